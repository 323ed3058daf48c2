//! Core library entry for the `routegen` CLI.
//!
//! Generates a collection's `meta/runtime.yml` by reading each module's
//! embedded documentation and deriving plugin routing from module names.

pub mod adapters;
pub mod cli;
pub mod collection;
pub mod context;
pub mod docs;
pub mod generate;
pub mod logging;
pub mod ports;
pub mod routing;
pub mod runtime;

use clap::error::ErrorKind;
use clap::Parser;

use crate::collection::CollectionId;
use crate::context::ServiceContext;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or generation fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    let ctx = ServiceContext::live();
    generate::generate(&ctx, &CollectionId::parse(&cli.collection), &cli.path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_writes_runtime_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let result = run(["routegen", "-c", "acme/net", "-p", root]);

        assert!(result.is_ok());
        assert!(dir.path().join("acme/net/meta/runtime.yml").is_file());
    }

    #[test]
    fn unwritable_meta_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("acme/net")).unwrap();
        std::fs::write(dir.path().join("acme/net/meta"), "not a directory").unwrap();

        let ctx = ServiceContext::live();
        let result = generate::generate(&ctx, &CollectionId::parse("acme/net"), dir.path());
        assert!(result.is_err());

        let root = dir.path().to_str().unwrap();
        assert!(run(["routegen", "-c", "acme/net", "-p", root]).is_err());
    }

    #[test]
    fn run_errors_without_arguments() {
        let result = run(["routegen"]);
        assert!(result.is_err());
    }
}
