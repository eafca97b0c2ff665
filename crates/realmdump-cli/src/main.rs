//! realmdump - export a Keycloak realm's users, one page per unit.
//!
//! This is a thin wrapper over the `realmdump-admin` library. Each run
//! is a one-shot full scan; put it on a schedule to keep a roster
//! mirror current.

mod cli;
mod sink;

use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use realmdump_admin::{ExportConfig, Exporter};
use realmdump_core::{AdminCredentials, Realm, ServerUrl};

use cli::Cli;
use sink::{DirSink, StdoutSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let config = build_config(&cli)?;
    let exporter = Exporter::new(config).context("Failed to build HTTP client")?;

    let outcome = match cli.out {
        Some(dir) => {
            let mut sink = DirSink::create(dir)
                .await
                .context("Failed to create output directory")?;
            exporter.run(&mut sink).await?
        }
        None => {
            let mut sink = StdoutSink::new();
            exporter.run(&mut sink).await?
        }
    };

    eprintln!(
        "{} {} pages, {} users",
        "exported".green(),
        outcome.pages,
        outcome.users
    );
    Ok(())
}

fn build_config(cli: &Cli) -> Result<ExportConfig> {
    let server = ServerUrl::new(&cli.url).context("Invalid server URL")?;
    let realm = Realm::new(&cli.realm).context("Invalid realm name")?;

    let password = match &cli.password {
        Some(p) => p.clone(),
        None => std::env::var("REALMDUMP_PASSWORD")
            .context("No password given: use --password or REALMDUMP_PASSWORD")?,
    };
    let credentials = AdminCredentials::new(&cli.user, password);

    let page_size = NonZeroU32::new(cli.page_size).context("Page size must be positive")?;

    Ok(ExportConfig::new(server, realm, credentials)
        .with_page_size(page_size)
        .with_timeouts(
            Duration::from_secs(cli.connect_timeout),
            Duration::from_secs(cli.read_timeout),
        )
        .with_danger_accept_invalid_certs(cli.insecure))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["realmdump"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn builds_config_from_flags() {
        let cli = parse(&[
            "--url",
            "http://localhost:8080",
            "--realm",
            "acme",
            "--user",
            "admin",
            "--password",
            "pw",
            "--page-size",
            "50",
            "--insecure",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.realm.as_str(), "acme");
        assert_eq!(config.page_size.get(), 50);
        assert!(config.danger_accept_invalid_certs);
    }

    #[test]
    fn tls_verification_on_by_default() {
        let cli = parse(&[
            "--url",
            "https://sso.example.com",
            "--realm",
            "acme",
            "--user",
            "admin",
            "--password",
            "pw",
        ]);
        let config = build_config(&cli).unwrap();
        assert!(!config.danger_accept_invalid_certs);
    }

    #[test]
    fn rejects_zero_page_size() {
        let cli = parse(&[
            "--url",
            "http://localhost:8080",
            "--realm",
            "acme",
            "--user",
            "admin",
            "--password",
            "pw",
            "--page-size",
            "0",
        ]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn rejects_invalid_url() {
        let cli = parse(&[
            "--url",
            "not a url",
            "--realm",
            "acme",
            "--user",
            "admin",
            "--password",
            "pw",
        ]);
        assert!(build_config(&cli).is_err());
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
