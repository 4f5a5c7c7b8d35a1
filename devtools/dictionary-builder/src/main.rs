//! A simple application that downloads the data element registry and creates code or
//! data to reproduce it in the standard dictionary crate.
//!
//! ### How to use
//!
//! Run the application with one of the following subcommands:
//!
//! - **`data-element`** or **`tags`**: DICOM data element dictionary
//!
//! It will automatically retrieve dictionary specifications
//! from a credible source and output the result as a Rust code file
//! or some other supported format.
//!
//! Please use the `--help` flag for the full usage information.

use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod common;
mod tags;

/// DICOM dictionary builder
#[derive(Debug, Parser)]
struct App {
    #[clap(subcommand)]
    command: BuilderSubcommand,

    /// Print more information about the generation process
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum BuilderSubcommand {
    #[clap(name("data-element"), alias("tags"))]
    DataElement(tags::DataElementApp),
}

fn main() -> eyre::Result<()> {
    let App { command, verbose } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(if verbose {
                    LevelFilter::DEBUG.into()
                } else {
                    LevelFilter::INFO.into()
                }),
            )
            .finish(),
    )
    .unwrap_or_else(|e| {
        eprintln!("[ERROR] Could not set up global logging subscriber: {}", e);
    });

    match command {
        BuilderSubcommand::DataElement(app) => tags::run(app),
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }
}
