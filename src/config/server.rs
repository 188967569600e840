/// Server configuration constants.
///
/// Network binding and save-file location for the HTTP shell.
pub const BIND_ADDRESS: &str = "127.0.0.1";

/// Port the HTTP server listens on.
pub const PORT: u16 = 8000;

/// Directory holding one text file per save name.
pub const SAVE_DIR: &str = "./saves";

/// Extension appended to every save name on disk.
pub const SAVE_EXTENSION: &str = "txt";

/// Longest accepted save name, in characters.
pub const MAX_SAVE_NAME_LEN: usize = 64;
