mod config_cmd;
mod contest;
mod get;
mod pipeline;
mod search;

use clap::{Parser, Subcommand};

use crate::models::config;

#[derive(Parser)]
#[command(name = "leetgen")]
#[command(about = "Generate LeetCode solutions with tests from the examples", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate files for problem ids, slugs or problem URLs
    Get {
        /// Replace existing files
        #[arg(short, long)]
        force: bool,
        /// Treat arguments as title slugs
        #[arg(short, long)]
        slug: bool,
        /// Compare results ignoring order
        #[arg(short, long)]
        unorder: bool,
        /// Template language tag, defaults to the configured one
        #[arg(long)]
        lang: Option<String>,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Generate every problem whose numeric id lies in START..=END
    Range {
        start: u32,
        end: u32,
        #[arg(short, long)]
        force: bool,
    },
    /// Generate all problems of a contest
    Contest {
        name: String,
        #[arg(short, long)]
        force: bool,
    },
    /// List problems matching a keyword
    Search {
        keyword: Option<String>,
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Show the effective configuration
    Config,
}

pub fn run(cli: Cli) {
    let user_config = config::load_config();

    let result = match cli.command {
        Commands::Get {
            force,
            slug,
            unorder,
            lang,
            ids,
        } => get::get_problems(&user_config, &ids, get::GetOptions {
            force,
            slug,
            unorder,
            lang,
        }),
        Commands::Range { start, end, force } => get::get_range(&user_config, start, end, force),
        Commands::Contest { name, force } => contest::get_contest(&user_config, &name, force),
        Commands::Search {
            keyword,
            skip,
            limit,
        } => search::search_problems(&user_config, keyword.as_deref().unwrap_or(""), skip, limit),
        Commands::Config => config_cmd::show_config(&user_config),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
