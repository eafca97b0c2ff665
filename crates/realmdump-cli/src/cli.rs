//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Export the full user roster of a Keycloak realm, one page per unit.
///
/// Each run re-authenticates and re-scans the realm from the start;
/// scheduling repeated runs is the caller's job (cron and friends).
#[derive(Parser, Debug)]
#[command(name = "realmdump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Keycloak server base URL, e.g. https://sso.example.com
    #[arg(long)]
    pub url: String,

    /// Realm whose users are exported
    #[arg(long)]
    pub realm: String,

    /// Admin username (password grant against the master realm)
    #[arg(long)]
    pub user: String,

    /// Admin password; falls back to the REALMDUMP_PASSWORD environment
    /// variable when omitted
    #[arg(long)]
    pub password: Option<String>,

    /// Users per page (`max` query parameter)
    #[arg(long, default_value_t = 200)]
    pub page_size: u32,

    /// Skip TLS certificate and hostname verification (dangerous)
    #[arg(long)]
    pub insecure: bool,

    /// Connect timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub connect_timeout: u64,

    /// Read timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub read_timeout: u64,

    /// Write each page to this directory as users-<offset>.json;
    /// pages go to stdout when omitted
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}
