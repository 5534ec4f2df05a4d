use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_path: String,
    pub allowed_origins: Vec<String>,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            database_path: "users.json".to_string(),
            allowed_origins: vec!["*".to_string()],
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port.parse().map_err(|_| "Invalid SERVER_PORT")?,
            None => defaults.server_port,
        };

        let database_path = lookup("DATABASE_PATH").unwrap_or(defaults.database_path);

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(origins) => parse_origins(&origins),
            None => defaults.allowed_origins,
        };

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);

        Ok(Config {
            server_host,
            server_port,
            database_path,
            allowed_origins,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Whether CORS should accept any origin
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:5000");
        assert_eq!(config.database_path, "users.json");
        assert!(config.allows_any_origin());
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8081"),
            ("DATABASE_PATH", "/tmp/accounts.json"),
            ("ALLOWED_ORIGINS", "http://localhost:3000, http://example.com,"),
        ]))
        .unwrap();

        assert_eq!(config.server_address(), "127.0.0.1:8081");
        assert_eq!(config.database_path, "/tmp/accounts.json");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://example.com"]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[("SERVER_PORT", "not-a-port")]));
        assert_eq!(result.unwrap_err(), "Invalid SERVER_PORT");
    }
}
