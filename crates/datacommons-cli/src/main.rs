//! Datacommons CLI - catalog, validate and verify agent-training datasets.

mod cli;
mod commands;
mod logging;
mod store;

use clap::Parser;
use cli::{Cli, Commands};
use store::Workspace;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = Workspace::open(cli.catalog).and_then(|mut workspace| match cli.command {
        Commands::Search { query, format, tags } => {
            commands::search::run(&workspace, query, format, tags, cli.verbose)
        }

        Commands::Register { config } => {
            commands::register::run(&mut workspace, config, cli.verbose)
        }

        Commands::Validate { dataset, schema } => {
            commands::validate::run(dataset, schema, cli.verbose)
        }

        Commands::Stats { dataset } => commands::stats::run(dataset, cli.verbose),

        Commands::List { limit, offset } => {
            commands::list::run(&workspace, limit, offset, cli.verbose)
        }

        Commands::Get { dataset_id } => commands::get::run(&workspace, dataset_id, cli.verbose),

        Commands::Versions { dataset_id } => {
            commands::versions::run(&workspace, dataset_id, cli.verbose)
        }

        Commands::Hash { file } => commands::hash::run(file, cli.verbose),

        Commands::Verify {
            dataset_id,
            file,
            sha256,
        } => commands::verify::run(dataset_id, file, sha256, cli.verbose),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
