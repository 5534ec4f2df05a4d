/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Display name returned for anonymous or unknown users
pub const GUEST_USERNAME: &str = "Guest";

/// Document written to a fresh backing file
pub const EMPTY_DOCUMENT_JSON: &str = "{\n  \"users\": {}\n}";

// =============================================================================
// Error Messages
// =============================================================================

pub const ERR_MISSING_FIELDS: &str = "Missing required fields";

pub const ERR_EMAIL_TAKEN: &str = "Email already registered";

pub const ERR_INVALID_EMAIL: &str = "Invalid email format";

pub const ERR_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

pub const ERR_INVALID_CREDENTIALS: &str = "Invalid email or password";

pub const ERR_USER_NOT_FOUND: &str = "User not found. Please log in again.";

pub const ERR_MISSING_MOVIE_ID: &str = "Missing movie_id";

pub const ERR_MISSING_USER_ID: &str = "Missing user_id";

pub const ERR_MISSING_IMG_URL: &str = "Missing img_url";

pub const ERR_ALREADY_PURCHASED: &str = "Movie already purchased";

// =============================================================================
// Success Messages
// =============================================================================

pub const MSG_REGISTERED: &str = "Registration successful";

pub const MSG_LOGGED_IN: &str = "Login successful";

pub const MSG_LOGGED_OUT: &str = "Logged out successfully";

pub const MSG_PURCHASED: &str = "Movie purchased successfully";

pub const MSG_PROFILE_UPDATED: &str = "Profile updated successfully";
