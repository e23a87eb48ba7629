// CardStyler platform paths for Windows
// Config: %APPDATA%/CardStyler

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for CardStyler on Windows.
/// `%APPDATA%/CardStyler`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("CardStyler")
}
