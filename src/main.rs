use clap::Parser;
use tracing::info;

use shelfline::cli::command::{resolve_database, Cli, ColorChoice, Commands};
use shelfline::cli::{catalog, output, paths};
use shelfline::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    let config = match Config::load(&paths::default_config()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    config.logging.init();
    info!("shelfline starting");

    let configured_db = config.database.path.clone();
    let result = match cli.command {
        Commands::Show(args) => {
            catalog::execute_show(&resolve_database(args.db, configured_db))
        }
        Commands::Seed(args) => {
            catalog::execute_seed(&resolve_database(args.db, configured_db))
        }
        Commands::Categories(args) => {
            catalog::execute_categories(&resolve_database(args.db, configured_db))
        }
        Commands::Products(args) => catalog::execute_products(
            &resolve_database(args.db, configured_db),
            args.category.as_deref(),
        ),
        Commands::Summary(args) => {
            catalog::execute_summary(&resolve_database(args.db, configured_db))
        }
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }

    info!("shelfline done");
}
