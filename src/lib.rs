//! burrow - turns tagged markdown notes into self-contained content bundles
//!
//! A one-shot batch converter: walks a notes tree, picks the notes carrying a
//! configured tag, rewrites their front matter and body, copies embedded
//! attachments under content-addressed names, and writes one bundle directory
//! per note.
//!
//! Known limitation: front-matter key order is not preserved on rewrite; keys
//! are emitted in sorted order.

pub mod cli;
pub mod convert;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli,
    config::{Config, FileConfig},
    logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let file_config = FileConfig::load()?;
    let config = Config::resolve(&cli, file_config)?;
    logging::init(&config.log_level);

    convert::run(&config)
}
