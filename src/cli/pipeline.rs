use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::engine::Generator;
use crate::models::config::UserConfig;
use crate::output::{check_destination, git_add, target_path, write_file};
use crate::source::{LeetCodeClient, ProblemSource};

/// Everything one batch run needs besides the source.
pub(super) struct Job<'a> {
    pub generator: Generator,
    pub lang: &'a str,
    pub output_dir: &'a Path,
    pub force: bool,
    pub unordered: bool,
    pub git_add: bool,
    pub delay: Duration,
}

impl<'a> Job<'a> {
    pub fn from_config(config: &'a UserConfig, force: bool) -> Self {
        Self {
            generator: Generator::new(config.helper_crate.clone()),
            lang: &config.language,
            output_dir: &config.output_dir,
            force,
            unordered: false,
            git_add: config.git_add,
            delay: Duration::from_millis(config.request_delay_ms),
        }
    }

    pub fn path_for(&self, stem: &str) -> PathBuf {
        target_path(self.output_dir, stem)
    }

    /// Fetches, generates and writes one problem. `dest` is a destination
    /// already cleared by `check_destination`; without one the path comes
    /// from the record id. Failures are logged and yield `None`.
    pub fn process(
        &self,
        source: &dyn ProblemSource,
        slug: &str,
        dest: Option<PathBuf>,
    ) -> Option<PathBuf> {
        let mut record = match source.fetch(slug) {
            Ok(Some(record)) => record,
            Ok(None) => {
                log::warn!("get empty problem detail for {}", slug);
                return None;
            }
            Err(e) => {
                log::error!("fetch {} failed: {}", slug, e);
                return None;
            }
        };
        if self.unordered {
            record.any_order = true;
        }

        let file = match self.generator.generate(&record, self.lang) {
            Ok(file) => file,
            Err(e) => {
                log::error!("generate testcases fail: {}", e);
                return None;
            }
        };

        let path = match dest {
            Some(path) => path,
            None => {
                let path = self.path_for(&file.stem);
                if !check_destination(&path, self.force) {
                    return None;
                }
                path
            }
        };

        if let Err(e) = write_file(&path, &file.content) {
            log::error!("{:#}", e);
            return None;
        }
        if self.git_add {
            if let Err(e) = git_add(&path) {
                log::warn!("{:#}", e);
            }
        }
        Some(path)
    }

    pub fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

pub(super) fn client_from_config(config: &UserConfig) -> LeetCodeClient {
    let cookie = config.read_cookie();
    if cookie.is_none() {
        log::debug!("no cookie at {}, requests are anonymous", config.cookie_file.display());
    }
    LeetCodeClient::new(config.endpoint.clone(), cookie)
}
