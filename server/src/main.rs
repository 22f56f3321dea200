//! Folio server
//!
//! Serves the built site locally or behind a reverse proxy.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use folio_core::Config;
use tokio::net::TcpListener;

/// Command-line interface for the Folio server.
#[derive(Parser)]
#[command(name = "folio-server", version, about = "Serve the built Folio site")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Directory holding the built site, overrides `server.root`
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Port to listen on, overrides `server.port`
    #[arg(short, long)]
    port: Option<u16>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio_server::init_tracing(cli.verbose);

    let config = Config::load_with_env(&cli.config).wrap_err("Failed to load configuration")?;
    let root = cli
        .root
        .unwrap_or_else(|| PathBuf::from(&config.server.root));
    let port = cli.port.unwrap_or(config.server.port);

    if !root.join("index.html").exists() {
        tracing::warn!(root = %root.display(), "no index.html found, run `cargo leptos build` first");
    }

    let app = folio_server::create_router(&root);
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    tracing::info!(
        %addr,
        root = %root.display(),
        public_url = %config.url_for("/"),
        "serving site"
    );
    println!("  Serving {} at http://{addr}", config.site.title);

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["folio-server"]);
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
        assert!(cli.root.is_none());
        assert!(cli.port.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "folio-server",
            "--config",
            "site.toml",
            "--root",
            "dist",
            "--port",
            "8080",
            "-vv",
        ]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert_eq!(cli.root, Some(PathBuf::from("dist")));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.verbose, 2);
    }
}
