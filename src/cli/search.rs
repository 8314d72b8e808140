use anyhow::{Context, Result};

use super::pipeline::client_from_config;
use crate::display::display_problems;
use crate::models::config::UserConfig;

pub fn search_problems(
    config: &UserConfig,
    keyword: &str,
    skip: usize,
    limit: usize,
) -> Result<()> {
    let client = client_from_config(config);
    let problems = client
        .search(keyword, skip, limit)
        .with_context(|| format!("Failed to search for '{}'", keyword))?;
    display_problems(&problems);
    Ok(())
}
