//! protoc-gen-enumwire - protoc plugin for enum wire names
//!
//! protoc runs the plugin with a `CodeGeneratorRequest` on stdin and reads
//! the `CodeGeneratorResponse` from stdout:
//!
//! ```text
//! protoc --enumwire_out=xml,json,gql:gen schema.proto
//! ```
//!
//! Diagnostics go to stderr, filtered by `--log-level` or `ENUMWIRE_LOG`.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

mod logging;

#[derive(Parser)]
#[command(name = "protoc-gen-enumwire")]
#[command(author, version, about = "protoc plugin generating enum wire-name codecs", long_about = None)]
struct Cli {
    /// Read the CodeGeneratorRequest from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    request: Option<PathBuf>,

    /// Log filter for diagnostics on stderr (e.g. debug, enumwire_core=info)
    #[arg(long, env = "ENUMWIRE_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let input = read_request(cli.request.as_deref())?;
    let output = enumwire_transport::run(&input).context("failed to process protoc request")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&output)
        .and_then(|()| stdout.flush())
        .context("failed to write CodeGeneratorResponse to stdout")?;

    Ok(())
}

fn read_request(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read request from {}", path.display())),
        None => {
            let mut input = Vec::new();
            io::stdin()
                .read_to_end(&mut input)
                .context("failed to read CodeGeneratorRequest from stdin")?;
            Ok(input)
        }
    }
}
