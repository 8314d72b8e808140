use anyhow::Result;

use crate::models::config::{get_config_path, UserConfig};

pub fn show_config(config: &UserConfig) -> Result<()> {
    match get_config_path() {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!("Config file: {} (not created, using defaults)", path.display()),
        None => println!("Config file: unavailable on this platform"),
    }
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
