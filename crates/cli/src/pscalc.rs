//! pscalc - Evaluate PDF Type 4 (PostScript calculator) functions
//!
//! A command line tool that parses a calculator program, evaluates it for
//! one set of inputs, and prints the outputs as text or JSON.

use clap::{ArgAction, Parser, ValueEnum};
use pscalc_core::function::PSFunction;
use pscalc_core::parser::read_program;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Output format for the results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Space-separated numbers (default)
    #[default]
    Text,
    /// JSON object with inputs and outputs
    Json,
}

/// Evaluate a PDF Type 4 function.
#[derive(Parser, Debug)]
#[command(name = "pscalc")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Input values, one per Domain interval
    #[arg(allow_negative_numbers = true)]
    inputs: Vec<f32>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Path to a file holding the program, or "-" for stdin
    #[arg(short = 'f', long, conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Program text given inline, e.g. "{ 2 mul }"
    #[arg(short = 'e', long)]
    expr: Option<String>,

    /// Domain as comma-separated min,max pairs (defaults to [0 1] per input)
    #[arg(short = 'D', long, value_delimiter = ',', allow_negative_numbers = true)]
    domain: Option<Vec<f32>>,

    /// Range as comma-separated min,max pairs
    #[arg(short = 'R', long, value_delimiter = ',', allow_negative_numbers = true)]
    range: Vec<f32>,

    /// Output format
    #[arg(short = 't', long = "format", value_enum, default_value_t)]
    format: OutputFormat,

    /// Print the parsed program before evaluating
    #[arg(long, action = ArgAction::SetTrue)]
    dump: bool,
}

#[derive(Serialize)]
struct Evaluation<'a> {
    inputs: &'a [f32],
    outputs: &'a [f32],
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn load_program(args: &Args) -> pscalc_core::Result<Vec<u8>> {
    if let Some(expr) = &args.expr {
        return Ok(expr.as_bytes().to_vec());
    }
    match &args.file {
        Some(path) if path.as_os_str() != "-" => read_program(fs::File::open(path)?),
        _ => read_program(io::stdin().lock()),
    }
}

fn main() -> core::result::Result<(), Box<dyn core::error::Error>> {
    let args = Args::parse();
    init_tracing(args.debug);

    let program = load_program(&args)?;
    let domain = args
        .domain
        .clone()
        .unwrap_or_else(|| [0.0, 1.0].repeat(args.inputs.len()));

    let mut function = PSFunction::new(&domain, &args.range, &program)?;
    tracing::debug!(
        inputs = function.inputs(),
        outputs = function.outputs(),
        "loaded function"
    );

    let mut out = BufWriter::new(io::stdout());
    if args.dump {
        writeln!(out, "{}", function.engine().main_procedure())?;
    }

    let outputs = function.call(&args.inputs)?;
    match args.format {
        OutputFormat::Text => {
            let text: Vec<String> = outputs
                .iter()
                .map(|v| pscalc_core::parser::format_number(*v))
                .collect();
            writeln!(out, "{}", text.join(" "))?;
        }
        OutputFormat::Json => {
            let evaluation = Evaluation {
                inputs: &args.inputs,
                outputs: &outputs,
            };
            serde_json::to_writer_pretty(&mut out, &evaluation)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
