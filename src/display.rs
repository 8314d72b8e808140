use crate::models::ProblemSummary;

pub fn display_problems(problems: &[ProblemSummary]) {
    if problems.is_empty() {
        println!("No problems found.");
        return;
    }

    println!("{}", "-".repeat(60));
    for problem in problems {
        println!("{}", format_row(problem));
    }
    println!("{}", "-".repeat(60));
    println!("{} problem(s)", problems.len());
}

fn format_row(problem: &ProblemSummary) -> String {
    let difficulty = problem
        .difficulty
        .map(|d| d.display_name())
        .unwrap_or("-");
    let lock = if problem.paid_only { " [paid]" } else { "" };
    format!(
        "{:>8}  {:<6}  {}  ({}){}",
        problem.id,
        difficulty,
        problem.display_title(),
        problem.title_slug,
        lock
    )
}
