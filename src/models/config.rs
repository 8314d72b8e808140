use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://leetcode.cn/graphql/";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub endpoint: String,
    /// File holding the raw `cookie` header for authenticated requests.
    pub cookie_file: PathBuf,
    pub output_dir: PathBuf,
    /// Crate providing `TreeNode`, `ListNode` and the `tree!`/`link!`/`svec!`/`unorder` helpers.
    pub helper_crate: String,
    pub language: String,
    pub git_add: bool,
    pub request_delay_ms: u64,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cookie_file: PathBuf::from("cookie"),
            output_dir: PathBuf::from("src").join("bin"),
            helper_crate: "leetcode".to_string(),
            language: "rust".to_string(),
            git_add: false,
            request_delay_ms: 1000,
        }
    }
}

impl UserConfig {
    /// Session cookie, if the cookie file exists and is not empty.
    pub fn read_cookie(&self) -> Option<String> {
        let cookie = fs::read_to_string(&self.cookie_file).ok()?;
        let cookie = cookie.trim();
        if cookie.is_empty() {
            None
        } else {
            Some(cookie.to_string())
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("leetgen").join("config.json"))
}

pub fn load_config() -> UserConfig {
    let Some(path) = get_config_path() else {
        log::debug!("No config directory available. Using default config.");
        return UserConfig::default();
    };
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
            UserConfig::default()
        }),
        Err(e) => {
            log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
            UserConfig::default()
        }
    }
}
