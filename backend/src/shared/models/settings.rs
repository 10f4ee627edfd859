use std::error::Error;
use std::fs;

use serde::Deserialize;

const SETTINGS_FILENAME: &str = "settings.json";

/// Runtime configuration, read from a `settings.json` next to the binary.
/// A missing file falls back to defaults; a present-but-broken file is an
/// error rather than a silent default.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub allowed_origin: String,
    pub store_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 8080,
            allowed_origin: "*".to_string(),
            store_path: "tasks.redb".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Settings, Box<dyn Error>> {
        match fs::read_to_string(SETTINGS_FILENAME) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(_) => Ok(Settings::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"tcp_socket_port": 9000}"#).unwrap();
        assert_eq!(settings.tcp_socket_port, 9000);
        assert_eq!(settings.tcp_socket_binding, "0.0.0.0");
        assert_eq!(settings.allowed_origin, "*");
        assert_eq!(settings.store_path, "tasks.redb");
    }
}
