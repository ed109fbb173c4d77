// Buffer related constants
pub const DEFAULT_BUFFER_SIZE: usize = 8192;
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

// Content types
pub const DIRECTORY_CONTENT_TYPE: &str = "application/directory";
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

// Write option forwarded to the container
pub const CONTENT_TYPE_OPTION: &str = "content_type";

// Selectel endpoints
pub const DEFAULT_AUTH_URL: &str = "https://api.selcdn.ru/auth/v1.0";
pub const AUTH_USER_HEADER: &str = "X-Auth-User";
pub const AUTH_KEY_HEADER: &str = "X-Auth-Key";
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
pub const STORAGE_URL_HEADER: &str = "X-Storage-Url";

// Registered driver name
pub const SELECTEL_DRIVER: &str = "selectel";
