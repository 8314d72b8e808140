use anyhow::{Context, Result};

use super::pipeline::{client_from_config, Job};
use crate::models::config::UserConfig;
use crate::models::problem::normalize_id;
use crate::output::check_destination;

const RANGE_PAGE_SIZE: usize = 100;

pub struct GetOptions {
    pub force: bool,
    pub slug: bool,
    pub unorder: bool,
    pub lang: Option<String>,
}

pub fn get_problems(config: &UserConfig, ids: &[String], options: GetOptions) -> Result<()> {
    let client = client_from_config(config);
    let mut job = Job::from_config(config, options.force);
    job.unordered = options.unorder;
    if let Some(lang) = options.lang.as_deref() {
        job.lang = lang;
    }

    let mut written = 0;
    for arg in ids {
        let arg = arg.trim();
        let (slug, dest) = if let Some(slug) = slug_from_url(arg) {
            (slug.to_string(), None)
        } else if options.slug {
            (arg.to_string(), None)
        } else {
            // The id decides the file name, so a kept file costs no request.
            let path = job.path_for(&normalize_id(arg));
            if !check_destination(&path, job.force) {
                continue;
            }
            match client.resolve_slug(arg) {
                Ok(slug) => (slug, Some(path)),
                Err(e) => {
                    log::error!("{}", e);
                    continue;
                }
            }
        };

        if job.process(&client, &slug, dest).is_some() {
            written += 1;
        }
        job.pause();
    }

    log::info!("{} of {} problem(s) generated", written, ids.len());
    Ok(())
}

pub fn get_range(config: &UserConfig, start: u32, end: u32, force: bool) -> Result<()> {
    if start == 0 || start > end {
        anyhow::bail!("Invalid range {}..={}", start, end);
    }

    let client = client_from_config(config);
    let job = Job::from_config(config, force);
    let skip = (start - 1) as usize;
    let limit = (end - start + 1) as usize;

    let mut written = 0;
    let mut seen = 0;
    let mut offset = skip;
    while seen < limit {
        let page = client
            .search("", offset, RANGE_PAGE_SIZE.min(limit - seen))
            .context("Failed to list problems")?;
        if page.is_empty() {
            break;
        }
        offset += page.len();
        seen += page.len();

        for summary in page {
            let in_range = summary
                .id
                .parse::<u32>()
                .is_ok_and(|n| (start..=end).contains(&n));
            if !in_range {
                log::debug!("skip {} outside {}..={}", summary.id, start, end);
                continue;
            }
            let path = job.path_for(&normalize_id(&summary.id));
            if !check_destination(&path, job.force) {
                continue;
            }
            if job.process(&client, &summary.title_slug, Some(path)).is_some() {
                written += 1;
            }
            job.pause();
        }
    }

    log::info!("{} problem(s) generated", written);
    Ok(())
}

/// Title slug of a problem URL such as `https://leetcode.cn/problems/two-sum/`.
fn slug_from_url(arg: &str) -> Option<&str> {
    let (_, rest) = arg.split_once("/problems/")?;
    let slug = rest.split(['/', '?', '#']).next()?;
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}
