use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "movietracker")]
#[command(author, version, about = "Curated movie catalog backed by TMDB")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List curated movies
    Discover {
        /// Page number
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Search movies by title
    Search {
        /// Search text
        #[arg(required = true)]
        query: String,

        /// Page number
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Show a single movie
    Movie {
        /// TMDB movie id
        id: u64,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_page() {
        let cli = Cli::parse_from(["movietracker", "search", "matrix", "--page", "3"]);
        match cli.command {
            Commands::Search { query, page } => {
                assert_eq!(query, "matrix");
                assert_eq!(page, 3);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["movietracker", "discover", "-v", "--config", "a.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert!(matches!(cli.command, Commands::Discover { page: 1 }));
    }
}
