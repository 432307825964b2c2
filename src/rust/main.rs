use anyhow::{Context, Result};
use charprobe::{DetectionResult, DetectorConfig, EncodingEra, UniversalDetector};
use clap::Parser;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;
use std::time::Instant;

/// Takes one or more file paths and reports their detected encodings
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files whose encoding we would like to determine (default: stdin)
    input: Vec<PathBuf>,

    /// Print only the encoding
    #[arg(long)]
    minimal: bool,

    /// Rename legacy encodings to more modern ones
    #[arg(short, long)]
    legacy: bool,

    /// Which era of encodings to consider: modern_web, legacy, dos, mainframe or all
    #[arg(short, long, default_value = "modern_web", value_parser = parse_era)]
    encoding_era: EncodingEra,

    /// Bytes examined at one time; 0 feeds the input line by line
    #[arg(short, long, default_value_t = 16384)]
    chunk_size: usize,

    /// Maximum number of chunks fed when chunk-size is set
    #[arg(long, default_value_t = 5)]
    chunk_steps: usize,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_era(value: &str) -> Result<EncodingEra, String> {
    EncodingEra::parse(value).ok_or_else(|| format!("unknown encoding era {:?}", value))
}

#[derive(Serialize)]
struct Report<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: DetectionResult,
}

/// Feeds `reader` to a fresh detector the way the options ask and returns
/// the verdict.
fn describe(mut reader: impl BufRead, args: &Args) -> Result<DetectionResult> {
    let config = DetectorConfig::default()
        .with_encoding_era(args.encoding_era)
        .with_rename_legacy(args.legacy);
    let mut detector = UniversalDetector::new(config);

    if args.chunk_size > 0 {
        let mut chunk = Vec::with_capacity(args.chunk_size);
        let mut steps = args.chunk_steps;
        while steps > 0 && !detector.is_done() {
            if reader.read_until(b'\n', &mut chunk)? == 0 {
                break;
            }
            if chunk.len() >= args.chunk_size {
                detector.feed(&chunk);
                chunk.clear();
                steps -= 1;
            }
        }
        // a short tail still counts as one step
        if steps > 0 && !chunk.is_empty() {
            detector.feed(&chunk);
        }
    } else {
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            detector.feed(&line);
            if detector.is_done() {
                break;
            }
        }
    }

    Ok(detector.close())
}

fn report(name: &str, result: DetectionResult, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string(&Report { name, result })?);
    } else if args.minimal {
        println!("{}", result.encoding.unwrap_or("None"));
    } else {
        println!("{}: {}", name, result);
    }
    Ok(())
}

fn main() -> Result<()> {
    charprobe::init_logger();
    let args = Args::parse();
    let start_time = Instant::now();

    if args.input.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!(
                "You are running chardetect interactively. Press CTRL-D twice at the start of \
                 a blank line to signal the end of your input. If you want help, run \
                 chardetect --help\n"
            );
        }
        let result = describe(stdin.lock(), &args).context("Failed to read stdin")?;
        report("stdin", result, &args)?;
    } else {
        for path in &args.input {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let result = describe(BufReader::new(file), &args)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            report(&path.display().to_string(), result, &args)?;
        }
    }

    info!("Examined {} input(s) in {:.2?}", args.input.len().max(1), start_time.elapsed());
    Ok(())
}
