//! `jsonpick` CLI — look up and coerce values in JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print the sub-tree at a dot path (stdin → stdout)
//! echo '{"friends":[{"name":"hlts2"}]}' | jsonpick get friends.0
//!
//! # Slash paths, reading from a file
//! jsonpick get -i data.json --delimiter slash /friends/0/name
//!
//! # Coerce the value, strictly (default) or falling back to zero
//! jsonpick get -i data.json friends.0.id --as u32
//! jsonpick get -i data.json friends.0.name --as u32 --lenient
//!
//! # Fan out over a sequence
//! jsonpick get -i data.json 'friends.#.name'
//!
//! # Exit status 0 if the path resolves, 1 otherwise
//! jsonpick exists -i data.json friends.3
//!
//! # Re-indent the whole document
//! jsonpick fmt -i data.json --indent '    '
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jsonpick_core::{Delimiter, Document, Resolved};
use std::io::{self, Read};
use std::process;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "jsonpick",
    version,
    about = "Look up and coerce values in JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a path
    Get {
        /// Path to resolve, e.g. `friends.0.name`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Path separator
        #[arg(short, long, value_enum, default_value_t = PathStyle::Dot)]
        delimiter: PathStyle,
        /// Coerce the value to this type instead of printing JSON
        #[arg(long = "as", value_enum)]
        target: Option<Target>,
        /// Print the type's zero value instead of failing on a bad coercion
        #[arg(long, requires = "target")]
        lenient: bool,
    },
    /// Report whether a path resolves
    Exists {
        /// Path to check
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Path separator
        #[arg(short, long, value_enum, default_value_t = PathStyle::Dot)]
        delimiter: PathStyle,
    },
    /// Re-indent the whole document
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// String written at the start of every line after the first
        #[arg(long, default_value = "")]
        prefix: String,
        /// String written once per nesting level
        #[arg(long, default_value = "  ")]
        indent: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PathStyle {
    Dot,
    Slash,
}

impl From<PathStyle> for Delimiter {
    fn from(style: PathStyle) -> Self {
        match style {
            PathStyle::Dot => Delimiter::Dot,
            PathStyle::Slash => Delimiter::Slash,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    Isize,
    F32,
    F64,
    String,
    Bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Get {
            path,
            input,
            delimiter,
            target,
            lenient,
        } => {
            let doc = read_document(input.as_deref())?.with_delimiter(delimiter.into());
            let value = doc
                .path(&path)
                .with_context(|| format!("Failed to resolve path: {}", path))?;
            debug!(path = %path, kind = %value.kind(), "resolved");

            let text = match target {
                Some(target) if lenient => coerce_lenient(&value, target),
                Some(target) => coerce_strict(&value, target)
                    .with_context(|| format!("Failed to convert value at {} to {:?}", path, target))?,
                None => value.indent("", "  ")?,
            };
            println!("{}", text);
        }
        Commands::Exists {
            path,
            input,
            delimiter,
        } => {
            let doc = read_document(input.as_deref())?.with_delimiter(delimiter.into());
            let found = doc.exists_path(&path);
            println!("{}", found);
            if !found {
                info!(path = %path, "path does not resolve");
                process::exit(1);
            }
        }
        Commands::Fmt {
            input,
            prefix,
            indent,
        } => {
            let doc = read_document(input.as_deref())?;
            println!("{}", doc.indent(&prefix, &indent)?);
        }
    }

    Ok(())
}

/// Install a stderr `tracing` subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn coerce_strict(value: &Resolved, target: Target) -> jsonpick_core::Result<String> {
    Ok(match target {
        Target::U8 => value.to_u8_checked()?.to_string(),
        Target::U16 => value.to_u16_checked()?.to_string(),
        Target::U32 => value.to_u32_checked()?.to_string(),
        Target::U64 => value.to_u64_checked()?.to_string(),
        Target::I8 => value.to_i8_checked()?.to_string(),
        Target::I16 => value.to_i16_checked()?.to_string(),
        Target::I32 => value.to_i32_checked()?.to_string(),
        Target::I64 => value.to_i64_checked()?.to_string(),
        Target::Isize => value.to_isize_checked()?.to_string(),
        Target::F32 => value.to_f32_checked()?.to_string(),
        Target::F64 => value.to_f64_checked()?.to_string(),
        Target::String => value.to_string_checked()?,
        Target::Bool => value.to_bool_checked()?.to_string(),
    })
}

fn coerce_lenient(value: &Resolved, target: Target) -> String {
    match target {
        Target::U8 => value.to_u8().to_string(),
        Target::U16 => value.to_u16().to_string(),
        Target::U32 => value.to_u32().to_string(),
        Target::U64 => value.to_u64().to_string(),
        Target::I8 => value.to_i8().to_string(),
        Target::I16 => value.to_i16().to_string(),
        Target::I32 => value.to_i32().to_string(),
        Target::I64 => value.to_i64().to_string(),
        Target::Isize => value.to_isize().to_string(),
        Target::F32 => value.to_f32().to_string(),
        Target::F64 => value.to_f64().to_string(),
        Target::String => value.to_string(),
        Target::Bool => value.to_bool().to_string(),
    }
}

fn read_document(path: Option<&str>) -> Result<Document> {
    let doc = match path {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))?;
            Document::from_slice(&bytes)
                .with_context(|| format!("Failed to decode JSON from {}", path))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Document::from_slice(&buf).context("Failed to decode JSON from stdin")?
        }
    };
    debug!(kind = %doc.root().kind(), "decoded document");
    Ok(doc)
}
