use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use proto_rewrite_core::{rewrite, File, Pass, RewriteError, RewriteOptions};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "proto-rewrite")]
#[command(about = "Normalize protocol buffer schema ASTs for code generation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a schema file AST (JSON)
    Rewrite {
        /// Input file AST
        input: PathBuf,

        /// Output rewritten file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output rewrite report file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Options file (kebab-case JSON); command-line flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pass to run; repeat to run several in order (default: all)
        #[arg(long = "pass", value_parser = parse_pass)]
        passes: Vec<Pass>,

        /// Name of the constant inserted into enums without a zero value
        #[arg(long)]
        zero_name: Option<String>,

        /// Prefix for enum constants starting with a digit
        #[arg(long)]
        digit_prefix: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// List the available passes in default order
    Passes,
}

fn parse_pass(name: &str) -> Result<Pass, RewriteError> {
    name.parse()
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Rewrite {
            input,
            output,
            report,
            config,
            passes,
            zero_name,
            digit_prefix,
            format,
        } => {
            let content = fs::read_to_string(&input)
                .with_context(|| format!("Failed to open input file: {}", input.display()))?;
            let file = File::from_json(&content)
                .with_context(|| format!("Failed to parse file AST from: {}", input.display()))?;

            let mut options = match config {
                Some(path) => load_options(&path)?,
                None => RewriteOptions::default(),
            };
            if !passes.is_empty() {
                options.passes = passes;
            }
            if let Some(name) = zero_name {
                options.zero_value_name = name;
            }
            if let Some(prefix) = digit_prefix {
                options.digit_prefix = prefix;
            }
            options.validate().context("Invalid options")?;

            let result = rewrite(file, &options).context("Rewrite failed")?;
            tracing::info!(rewrites = result.report.rewrites.len(), "rewrite finished");

            write_json(&result.file, output.as_ref(), format)?;

            if let Some(path) = report {
                write_json(&result.report, Some(&path), format)?;
            }
        }
        Commands::Passes => {
            for pass in Pass::ALL {
                println!("{pass}");
            }
        }
    }

    Ok(())
}

fn load_options(path: &Path) -> Result<RewriteOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config from: {}", path.display()))
}

fn write_json<T: serde::Serialize>(
    val: &T,
    path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = fs::File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    writeln!(writer).context("Failed to write trailing newline")?;
    writer.flush().context("Failed to flush output")?;

    Ok(())
}
