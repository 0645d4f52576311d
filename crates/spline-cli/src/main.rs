//! `spline` - export and import Bezier spline documents.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use spline_core::Axis;
use tracing_subscriber::EnvFilter;

use config::{Config, ReadOverrides, WriteOverrides};

/// Export and import Bezier spline curves as JSON documents.
#[derive(Parser, Debug)]
#[command(name = "spline", version, about, long_about = None)]
struct Cli {
    /// TOML file with [read] and [write] options
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a file is a valid spline document
    Validate {
        /// Document to check
        file: PathBuf,
    },
    /// Re-write a document with different axis, scale or formatting
    Convert {
        input: PathBuf,
        output: PathBuf,
        #[command(flatten)]
        read: ReadArgs,
        #[command(flatten)]
        write: WriteArgs,
    },
    /// Export the active curve of a scene snapshot
    Export {
        /// Scene snapshot (JSON)
        scene: PathBuf,
        output: PathBuf,
        #[command(flatten)]
        write: WriteArgs,
    },
    /// Import a document into a scene snapshot
    Import {
        input: PathBuf,
        /// Scene snapshot (JSON), created if missing
        scene: PathBuf,
        /// Name of the new object
        #[arg(long)]
        name: Option<String>,
        /// Make the imported object active
        #[arg(long, default_value_t = false)]
        activate: bool,
        #[command(flatten)]
        read: ReadArgs,
    },
}

#[derive(Args, Debug, Default)]
struct ReadArgs {
    /// Up axis of the input document (y or z)
    #[arg(long, value_parser = parse_axis)]
    in_up_axis: Option<Axis>,

    /// Scale applied after reading
    #[arg(long)]
    in_scale: Option<f64>,
}

#[derive(Args, Debug, Default)]
struct WriteArgs {
    /// Up axis of the output document (y or z)
    #[arg(long, value_parser = parse_axis)]
    up_axis: Option<Axis>,

    /// Scale applied before writing
    #[arg(long)]
    scale: Option<f64>,

    /// Write single-line JSON
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Spaces per indentation level
    #[arg(long)]
    indent: Option<usize>,
}

impl ReadArgs {
    fn overrides(self, object_name: Option<String>) -> ReadOverrides {
        ReadOverrides {
            up_axis: self.in_up_axis,
            scale: self.in_scale,
            object_name,
        }
    }
}

impl WriteArgs {
    fn overrides(self) -> WriteOverrides {
        WriteOverrides {
            up_axis: self.up_axis,
            scale: self.scale,
            compact: self.compact,
            indent: self.indent,
        }
    }
}

fn parse_axis(value: &str) -> Result<Axis, String> {
    Axis::parse(value).ok_or_else(|| format!("unknown axis '{value}', expected y or z"))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Validate { file } => {
            let summary = commands::validate(&file)?;
            println!(
                "{}: {} splines, {} control points, {} closed",
                file.display(),
                summary.splines,
                summary.points,
                summary.closed
            );
        }
        Command::Convert {
            input,
            output,
            read,
            write,
        } => {
            let read = read.overrides(None).apply(config.read);
            let write = write.overrides().apply(config.write);
            let summary = commands::convert(&input, &output, &read, &write)?;
            println!(
                "wrote {} ({} splines, {} control points)",
                output.display(),
                summary.splines,
                summary.points
            );
        }
        Command::Export {
            scene,
            output,
            write,
        } => {
            let write = write.overrides().apply(config.write);
            let summary = commands::export(&scene, &output, &write)?;
            println!(
                "exported {} splines, {} control points to {}",
                summary.splines,
                summary.points,
                output.display()
            );
        }
        Command::Import {
            input,
            scene,
            name,
            activate,
            read,
        } => {
            let read = read.overrides(name).apply(config.read);
            let name = commands::import(&input, &scene, &read, activate)?;
            println!("linked '{}' into {}", name, scene.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
