use clap::Parser;
use color_eyre::Result;
use log::info;
use idealog::{
    Config, Database, Profile,
    cli::{self, Cli, Commands},
};

fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;
    initialize_logger();

    let cli = Cli::parse();

    // Determine profile: --dev flag enables dev mode, otherwise use prod
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    // An explicit --config file wins over the profile's config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_with_profile(profile)?,
    };

    let view = match cli.view {
        Some(view) => view,
        None => config.get_view_mode()?,
    };

    let db_path = cli.db.clone().unwrap_or_else(|| config.get_database_path());
    info!("Using idea store {}", db_path.display());
    let db = Database::new(&db_path)?;

    let mut out = std::io::stdout().lock();

    // Dispatch to appropriate command handler
    match cli.command.unwrap_or(Commands::List { json: false }) {
        Commands::Add {
            text,
            description,
            tags,
        } => {
            cli::handle_add(
                &text,
                description.as_deref(),
                tags.as_deref(),
                &db,
                view,
                &mut out,
            )?;
        }
        Commands::Search { keyword, json } => {
            cli::handle_search(&keyword, json, &db, view, &mut out)?;
        }
        Commands::List { json } => {
            cli::handle_list(json, &db, view, &mut out)?;
        }
        Commands::Delete { id } => {
            cli::handle_delete(&id, &db, &mut out)?;
        }
        Commands::Export { path } => {
            let path = path.unwrap_or_else(|| config.get_export_path());
            cli::handle_export(&path, &db, &mut out)?;
        }
    }

    Ok(())
}
