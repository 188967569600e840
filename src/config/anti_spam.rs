/// Configuration for anti-spam and anti-flood protection on WebSocket sessions.
/// All values are in seconds or counts per second.
pub const MAX_RESPONSES_PER_SECOND: u32 = 20;
pub const MAX_REQUESTS_PER_SECOND: u32 = 30;
pub const BAN_DURATION_SECONDS: u64 = 300;

/// Error codes that are not repeated back to a client sending the same bad
/// frame twice in a row. Engine errors are always relayed.
pub const SUPPRESSIBLE_ERROR_CODES: [&str; 1] = ["INVALID_COMMAND"];
