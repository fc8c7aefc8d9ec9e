use anyhow::Context;
use clap::Parser;
use forumlog_core::{parse_prefix, ExtractorConfig, LogBlockProcessor, PrefixFormat};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forumlog", about = "Extract summary content from pipeline logs")]
struct Cli {
    /// Log files to read in order. Reads stdin when none are given.
    files: Vec<PathBuf>,

    /// Source tag attached to every extracted record.
    #[arg(long, default_value = "insight")]
    source: String,

    /// Config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print bare text instead of JSON lines.
    #[arg(long)]
    text: bool,

    /// Log debug diagnostics (discarded blocks, unknown prefixes) to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => ExtractorConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ExtractorConfig::load()?,
    };
    let processor = LogBlockProcessor::from_config(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.files.is_empty() {
        let stdin = std::io::stdin();
        run(&processor, stdin.lock(), &cli, "<stdin>", &mut out)?;
    } else {
        for path in &cli.files {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            let label = path.display().to_string();
            run(&processor, std::io::BufReader::new(file), &cli, &label, &mut out)?;
        }
    }
    Ok(())
}

/// Stream one input through a fresh extraction and write each record.
fn run(
    processor: &LogBlockProcessor,
    input: impl BufRead,
    cli: &Cli,
    label: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut stream = processor.stream(cli.source.as_str());
    let mut unknown = 0usize;

    for line in input.lines() {
        let line = line.with_context(|| format!("reading {label}"))?;
        if parse_prefix(&line).format == PrefixFormat::Unknown && !line.trim().is_empty() {
            unknown += 1;
            tracing::trace!(input = label, line = %line, "unknown prefix format");
        }
        if let Some(record) = stream.push(&line) {
            if cli.text {
                writeln!(out, "{}", record.text)?;
            } else {
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            }
        }
    }

    if stream.is_collecting() {
        tracing::debug!(input = label, "input ended inside an open JSON block");
    }
    tracing::debug!(input = label, unknown_prefix_lines = unknown, "input done");
    Ok(())
}
