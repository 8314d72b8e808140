use anyhow::{Context, Result};

use super::pipeline::{client_from_config, Job};
use crate::models::config::UserConfig;
use crate::output::check_destination;
use crate::source::ContestSource;

pub fn get_contest(config: &UserConfig, contest: &str, force: bool) -> Result<()> {
    let client = client_from_config(config);
    let job = Job::from_config(config, force);

    let questions = client
        .contest_questions(contest)
        .with_context(|| format!("Failed to list questions of {}", contest))?;
    if questions.is_empty() {
        log::warn!("contest {} has no questions", contest);
        return Ok(());
    }

    let source = ContestSource::new(&client, contest);
    let mut written = 0;
    for (index, question) in questions.iter().enumerate() {
        let path = job.path_for(&contest_stem(contest, index + 1));
        if !check_destination(&path, job.force) {
            continue;
        }
        log::info!(
            "q{}: [{}] {}",
            index + 1,
            question.question_frontend_id.as_deref().unwrap_or("-"),
            question.title
        );
        if job.process(&source, &question.title_slug, Some(path)).is_some() {
            written += 1;
        }
        job.pause();
    }

    log::info!("{} of {} question(s) generated", written, questions.len());
    Ok(())
}

/// `weekly-contest-400`, question 2 -> `weekly_contest_400_q2`.
fn contest_stem(contest: &str, number: usize) -> String {
    format!("{}_q{}", contest.trim().replace('-', "_"), number)
}
