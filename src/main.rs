mod cli;
mod display;
mod engine;
mod models;
mod output;
mod source;

use std::io::Write;

use clap::Parser;
use crate::cli::Cli;

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}: {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() {
    init_logger();
    let cli = Cli::parse();
    cli::run(cli);
}
