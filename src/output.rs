use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

pub fn target_path(output_dir: &Path, stem: &str) -> PathBuf {
    output_dir.join(format!("leetcode_{}.rs", stem))
}

/// Whether `path` may be written. An existing file is only replaced with
/// `force`.
pub fn check_destination(path: &Path, force: bool) -> bool {
    if !path.exists() {
        return true;
    }
    if force {
        log::warn!("will replace {}", path.display());
        true
    } else {
        log::error!("path {} exists", path.display());
        false
    }
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

pub fn git_add(path: &Path) -> Result<()> {
    let status = Command::new("git")
        .arg("add")
        .arg(path)
        .status()
        .context("Failed to run git")?;
    if !status.success() {
        bail!("git add {} exited with {}", path.display(), status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path() {
        assert_eq!(
            target_path(Path::new("src/bin"), "m17_04"),
            PathBuf::from("src/bin/leetcode_m17_04.rs")
        );
    }

    #[test]
    fn test_check_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leetcode_1.rs");
        assert!(check_destination(&path, false));

        fs::write(&path, "old").unwrap();
        assert!(!check_destination(&path, false));
        assert!(check_destination(&path, true));
    }

    #[test]
    fn test_write_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("bin").join("leetcode_1.rs");
        write_file(&path, "fn main() {}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fn main() {}\n");
    }
}
