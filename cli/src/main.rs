#![deny(missing_docs)]

//! # struct-markdown
//!
//! Command line entry point. Meant to run from a `//go:generate
//! struct-markdown` directive, where `go generate` supplies the current file
//! through `GOFILE`.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use structdoc_core::config::{
    DEFAULT_NAME_KEY, DEFAULT_OUTPUT_DIR, DEFAULT_REQUIRED_KEY, DEFAULT_ROOT_MARKER,
    SOURCE_ENV_VAR,
};
use structdoc_core::{generate, resolve_input, AppResult, GeneratorConfig, TagKeys};

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Generate website data files from tagged Go struct declarations"
)]
struct Cli {
    /// Go source file to document. Defaults to the file named by $GOFILE.
    source: Option<PathBuf>,

    /// Directory name marking the project root in the file's absolute path.
    #[clap(long, env = "STRUCT_MARKDOWN_ROOT_MARKER", default_value = DEFAULT_ROOT_MARKER)]
    root_marker: String,

    /// Output directory, relative to the project root.
    #[clap(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Tag key holding the documented field name.
    #[clap(long, default_value = DEFAULT_NAME_KEY)]
    name_key: String,

    /// Tag key whose value `true` marks a field as required.
    #[clap(long, default_value = DEFAULT_REQUIRED_KEY)]
    required_key: String,
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            root_marker: self.root_marker.clone(),
            output_dir: self.output_dir.clone(),
            tag_keys: TagKeys {
                name_key: self.name_key.clone(),
                required_key: self.required_key.clone(),
            },
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let input = resolve_input(cli.source.clone(), std::env::var_os(SOURCE_ENV_VAR))?;
    log::debug!("processing {} ({:?})", input.path.display(), input.origin);

    let written = generate(&input.path, &cli.generator_config())?;
    if written.is_empty() {
        log::info!("{}: nothing to document", input.path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("struct-markdown: {}", e);
            ExitCode::FAILURE
        }
    }
}
