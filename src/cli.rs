//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `routegen`.
#[derive(Debug, Parser)]
#[command(
    name = "routegen",
    version,
    about = "Generate meta/runtime.yml plugin routing for a collection"
)]
pub struct Cli {
    /// The name of the collection, e.g. `acme/net` or `acme.net`.
    #[arg(short, long)]
    pub collection: String,
    /// The path to the directory holding the collection.
    #[arg(short, long)]
    pub path: PathBuf,
}
