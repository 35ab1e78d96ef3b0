//! Command line front end: one address and mask in, one report out.

use crate::error::AddressError;
use crate::output::{describe, to_html, to_json};
use crate::AddressInfo;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "ipv4-info")]
#[command(version, about = "Class, masks, network and broadcast of an IPv4 address", long_about = None)]
pub struct Cli {
    /// IPv4 address, e.g. 192.168.0.1
    pub address: String,

    /// Subnet mask in dotted form, e.g. 255.255.0.0
    #[arg(long, short)]
    pub mask: Option<String>,

    /// Subnet mask as prefix length, e.g. 26 (used when --mask is empty)
    #[arg(long, short)]
    pub prefix: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, env = "IPV4_INFO_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// The dotted mask wins, then the prefix, else no mask.
    pub fn raw_mask(&self) -> Option<&str> {
        [self.mask.as_deref(), self.prefix.as_deref()]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
    }
}

/// Build the [`AddressInfo`] once and render it in the requested format.
pub fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    log::info!(
        "#Start run() address={} mask={:?}",
        cli.address,
        cli.raw_mask()
    );
    let info = AddressInfo::new(&cli.address, cli.raw_mask())?;
    let rendered = match cli.format {
        OutputFormat::Text => describe(&info),
        OutputFormat::Html => to_html(&describe(&info)),
        OutputFormat::Json => to_json(&info)?,
    };
    Ok(rendered)
}

/// One line describing a failure, with the error kind when known.
pub fn error_line(err: &(dyn Error + 'static)) -> String {
    match err.downcast_ref::<AddressError>() {
        Some(e) => format!("{} {}: {e}", "failed".on_red(), e.kind().bold()),
        None => format!("{} {err}", "failed".on_red()),
    }
}
