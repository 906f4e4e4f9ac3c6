#![forbid(unsafe_code)]

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use cwidct::{Block, PackedBlock, REFERENCE_VECTORS, format_block, format_block_hex};

#[derive(Parser)]
#[command(name = "cwidct")]
#[command(about = "Bit-exact Chen-Wang 8x8 inverse DCT", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the built-in reference vectors and report PASSED/FAILED per vector
    Selftest {
        /// Only print the verdict lines
        #[arg(long)]
        quiet: bool,
    },

    /// Transform every 64-sample block of a text file
    Transform {
        /// Input file with row-major coefficients, or `-` for stdin
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Matrix)]
        format: OutputFormat,

        /// Emit each result block transposed, as the streaming kernel reads it out
        #[arg(long)]
        column_major: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Decimal 8x8 matrix
    Matrix,
    /// 16-bit hex words in an 8x8 matrix
    Hex,
    /// Two 64-bit words per row (lo, hi)
    Packed,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("read: {path:?}"))
    }
}

fn render(block: &Block, format: OutputFormat) -> String {
    match format {
        OutputFormat::Matrix => format_block(block),
        OutputFormat::Hex => format_block_hex(block),
        OutputFormat::Packed => {
            let packed = PackedBlock::pack(block);
            packed
                .lo
                .iter()
                .zip(packed.hi.iter())
                .map(|(lo, hi)| format!("    {lo:016x} {hi:016x}\n"))
                .collect()
        }
    }
}

fn selftest(quiet: bool) -> bool {
    let mut all_passed = true;
    for v in &REFERENCE_VECTORS {
        let outcome = v.check();
        if !quiet {
            print!("in =\n{}", format_block(&v.input_block()));
            print!("want =\n{}", format_block(&v.expected));
            print!("got =\n{}", format_block(&outcome.got));
        }
        if outcome.passed {
            println!("{} is PASSED", v.name);
        } else {
            println!("{} is FAILED", v.name);
            all_passed = false;
        }
    }
    println!("Done!");
    all_passed
}

fn transform_file(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    column_major: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let mut blocks =
        cwidct::parse_blocks(&text).with_context(|| format!("parse blocks from {input:?}"))?;
    log::info!("transforming {} blocks", blocks.len());

    cwidct::transform_blocks(&mut blocks);

    let mut rendered = String::new();
    for (i, block) in blocks.iter().enumerate() {
        let block = if column_major {
            cwidct::transpose(block)
        } else {
            *block
        };
        if i > 0 {
            rendered.push('\n');
        }
        rendered.push_str(&render(&block, format));
    }

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write: {path:?}"))?;
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("write stdout")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Selftest { quiet } => {
            if !selftest(quiet) {
                process::exit(1);
            }
        }
        Command::Transform {
            input,
            output,
            format,
            column_major,
        } => {
            transform_file(&input, output.as_deref(), format, column_major)?;
        }
    }

    Ok(())
}
