// Backend endpoints
pub const REMOVE_CANDIDATES_PATH: &str = "/remove_candidates";
pub const REMOVE_USER_PATH: &str = "/remove_user";

// Presentation
pub const CARDS_PER_ROW: usize = 6;
pub const AVATAR_NORMAL_TOKEN: &str = "_normal";
pub const AVATAR_BIGGER_TOKEN: &str = "_bigger";

// Recency bucket thresholds
pub const DAYS_PER_YEAR: i64 = 365;
pub const DAYS_PER_MONTH: i64 = 30;

// Defaults
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_AUDIT_FILE: &str = "review_log.csv";
