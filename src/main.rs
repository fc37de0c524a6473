use anyhow::Result;
use clap::Parser;
use keywordmap::cli::{Cli, Commands};
use keywordmap::commands;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            keyword,
            format,
            output,
            seed,
            no_delay,
            top,
            quiet,
            plain,
        } => commands::analyze::run(commands::analyze::AnalyzeConfig {
            keyword,
            format,
            output,
            seed,
            no_delay,
            top,
            quiet,
            plain,
        }),
        Commands::Suggest {
            keyword,
            filter,
            difficulty,
            intent,
            page,
            page_size,
            format,
            output,
            seed,
            no_delay,
            quiet,
            plain,
        } => commands::suggest::run(commands::suggest::SuggestConfig {
            keyword,
            filter,
            difficulty,
            intent,
            page,
            page_size,
            format,
            output,
            seed,
            no_delay,
            quiet,
            plain,
        }),
        Commands::Tui {
            keyword,
            seed,
            no_delay,
        } => commands::tui::run(commands::tui::TuiConfig {
            keyword,
            seed,
            no_delay,
        }),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
