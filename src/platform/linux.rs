// CardStyler platform paths for Linux
// Config: ~/.config/cardstyler

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for CardStyler on Linux.
/// Uses `$XDG_CONFIG_HOME/cardstyler` if set, otherwise `~/.config/cardstyler`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("cardstyler")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("cardstyler")
    }
}
