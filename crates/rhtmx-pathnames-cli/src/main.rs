mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::commands::resolve::{parse_binding, ResolveRequest};
use crate::config::{Config, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "pathnames")]
#[command(version, about = "RHTMX Pathnames - resolve and match declared routes", long_about = None)]
struct Cli {
    /// Config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// JSON route definition (overrides config)
    #[arg(short, long, global = true)]
    routes: Option<String>,

    /// Origin for resolved URLs (overrides config)
    #[arg(short, long, global = true)]
    origin: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the path (or URL) of a declared route
    Resolve {
        /// Dotted declared names, e.g. private.users.root
        keys: String,

        /// Bind a placeholder on the way: KEY.PATH=VALUE (repeatable)
        #[arg(short, long = "bind", value_parser = parse_binding)]
        bindings: Vec<(String, String)>,

        /// Start the path right below this dotted prefix
        #[arg(short, long)]
        truncate: Option<String>,

        /// Include at most this many ancestor levels
        #[arg(short, long)]
        max_ancestors: Option<usize>,

        /// Print the full URL instead of the path
        #[arg(short, long)]
        url: bool,
    },

    /// Check whether a pathname is declared
    Match {
        /// Runtime pathname, e.g. /private/users/321
        pathname: String,

        /// Require a traced segment to carry this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// List every declared route with its path
    Tree,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(&cli.config)?.with_overrides(cli.routes, cli.origin);
    let tree = commands::load_tree(&config)?;

    // Execute command
    match cli.command {
        Commands::Resolve {
            keys,
            bindings,
            truncate,
            max_ancestors,
            url,
        } => {
            let request = ResolveRequest {
                keys,
                bindings,
                truncate,
                max_ancestors,
                url,
            };
            commands::resolve::execute(&tree, &request)?;
        }
        Commands::Match { pathname, tag } => {
            if !commands::matching::execute(&tree, &pathname, tag.as_deref())? {
                std::process::exit(1);
            }
        }
        Commands::Tree => {
            commands::tree::execute(&tree)?;
        }
    }

    Ok(())
}
