mod cli;

use movietracker::{
    catalog::{MovieCatalog, TmdbCatalog},
    config::{self, Config},
    server,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "movietracker=trace,movietracker_common=debug,tower_http=debug".to_string()
        } else {
            "movietracker=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Serve { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(serve(host, port, config_path))
        }
        Commands::Discover { page } => {
            let catalog = build_catalog(config_path)?;
            let rt = tokio::runtime::Runtime::new()?;
            let movies = rt.block_on(catalog.discover_movies(page))?;
            print_json(&movies)
        }
        Commands::Search { query, page } => {
            let catalog = build_catalog(config_path)?;
            let rt = tokio::runtime::Runtime::new()?;
            let movies = rt.block_on(catalog.search_movies(&query, page))?;
            print_json(&movies)
        }
        Commands::Movie { id } => {
            let catalog = build_catalog(config_path)?;
            let rt = tokio::runtime::Runtime::new()?;
            let movie = rt.block_on(catalog.get_movie(id))?;
            print_json(&movie)
        }
        Commands::Validate {
            config: validate_path,
        } => {
            let path = validate_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("movietracker {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn serve(host: Option<String>, port: Option<u16>, config_path: Option<&Path>) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    config::require_api_token(&config)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting Movietracker server");
    tracing::info!(
        "Catalog locale {} (region {}), provider {}",
        config.curation.locale,
        config.curation.region,
        config.tmdb.base_url
    );

    let catalog: Arc<dyn MovieCatalog> = Arc::new(TmdbCatalog::new(&config));
    server::start_server(config, catalog).await
}

fn build_catalog(config_path: Option<&Path>) -> Result<TmdbCatalog> {
    let config = config::load_config_or_default(config_path)?;
    config::require_api_token(&config)?;
    Ok(TmdbCatalog::new(&config))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json_str = serde_json::to_string_pretty(value)?;
    println!("{}", json_str);
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            config::load_config(p)?
        }
        None => {
            println!("No config file specified, using defaults");
            Config::default()
        }
    };

    println!("✓ Configuration is valid");
    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!("  TMDB: {}", config.tmdb.base_url);
    println!(
        "  API token: {}",
        if config.tmdb.api_token.is_empty() {
            "missing"
        } else {
            "set"
        }
    );
    println!(
        "  Locale: {} (region {})",
        config.curation.locale, config.curation.region
    );
    println!(
        "  Certification: <= {} ({})",
        config.curation.certification_max, config.curation.certification_country
    );
    println!(
        "  Excluded genres: {}",
        config.curation.excluded_genre_ids.len()
    );
    println!(
        "  Blocked keywords: {}",
        config.content_filter.blocked_keywords.len()
    );

    Ok(())
}
