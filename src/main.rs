use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use predlog::{ExtractorConfig, LogRecordExtractor};

#[derive(Parser)]
#[command(name = "predlog")]
#[command(about = "Extract prediction inputs from a log file into CSV")]
#[command(version)]
struct Args {
    /// Log file to read
    #[arg(short = 'i', long = "input", default_value = predlog::DEFAULT_INPUT_PATH)]
    input_file: PathBuf,

    /// CSV file to write (overwritten)
    #[arg(short = 'o', long = "output", default_value = predlog::DEFAULT_OUTPUT_PATH)]
    output_file: PathBuf,

    /// Column order for the CSV (comma-separated); default is the first record's keys
    #[arg(short = 'k', long = "keys", value_delimiter = ',')]
    keys: Option<Vec<String>>,

    /// Substring marking lines that carry a record
    #[arg(long, default_value = "Input:")]
    marker: String,

    /// Text that ends the embedded literal
    #[arg(long, default_value = ", Prediction:")]
    terminator: String,

    /// Debug mode - show processing details
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn validate(&self) -> Result<(), String> {
        if self.marker.is_empty() {
            return Err("--marker cannot be empty".to_string());
        }
        if let Some(keys) = &self.keys {
            if keys.iter().any(|k| k.trim().is_empty()) {
                return Err("--keys cannot contain empty names".to_string());
            }
        }
        Ok(())
    }

    fn to_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            terminator: self.terminator.clone(),
            keys: self
                .keys
                .as_ref()
                .map(|keys| keys.iter().map(|k| k.trim().to_string()).collect()),
            debug: self.debug,
            ..ExtractorConfig::default()
        }
        .with_marker(&self.marker)
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("predlog: error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("predlog: error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let extractor = LogRecordExtractor::new(args.to_config());

    match extractor.extract_and_convert(&args.input_file, &args.output_file) {
        Ok(stats) => {
            println!("Generated {}", args.output_file.display());

            if args.debug {
                eprintln!("Final statistics:");
                eprintln!("  Lines read: {}", stats.lines_read);
                eprintln!("  Records extracted: {}", stats.records_extracted);
                eprintln!("  Columns: {}", stats.columns.join(","));
                eprintln!(
                    "  Processing time: {}",
                    humantime::format_duration(stats.processing_time)
                );
            }
            Ok(())
        }
        Err(e) if e.is_input_not_found() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "Failed to convert '{}' to '{}'",
                args.input_file.display(),
                args.output_file.display()
            )
        }),
    }
}
