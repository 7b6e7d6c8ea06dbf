use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use insts_gen::{transpile_file, GenConfig, DEFAULT_INPUT};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate 6502 decode-table entries from an instruction CSV"
)]
struct Opts {
    /// Instruction CSV (hex,instr,addr,wb,byteLen,time)
    #[arg(value_name = "CSVFILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Reject invalid-opcode rows not coded as imp/NW
    #[arg(long)]
    strict: bool,
    /// Emit Opcode::Invalid(0xNN) for invalid opcodes
    #[arg(long)]
    tag_invalid: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // stdout carries the generated table, keep diagnostics off it
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let cfg = GenConfig {
        strict: opts.strict,
        tag_invalid: opts.tag_invalid,
    };

    let table = transpile_file(&opts.input, cfg)?;
    let text = match opts.format {
        OutputFormat::Text => table.render(),
        OutputFormat::Json => serde_json::to_string_pretty(&table)? + "\n",
    };

    if let Some(path) = opts.out {
        std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    } else {
        print!("{text}");
    }
    Ok(())
}
