use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use psimage_decode::config::DEFAULT_PREFIX;
use psimage_decode::{run, Boundary, DecodeConfig, TextPolicy};

#[derive(Parser)]
#[command(
    name = "psimage-decode",
    about = "Recover scripts hidden in PNG pixels (embedded and raw layouts)"
)]
struct Cli {
    /// Encoded image to read.
    image: PathBuf,
    /// Directory receiving the four output files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// File name prefix, e.g. "decoded" gives decoded_raw.full.txt.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,
    /// Shortest run of text bytes accepted as the end of the payload.
    #[arg(long, default_value_t = TextPolicy::default().min_run_len)]
    min_run: usize,
    /// Consecutive non-text bytes tolerated inside a run.
    #[arg(long, default_value_t = TextPolicy::default().max_noise)]
    max_noise: usize,
    /// Treat bytes 0x80-0xFF as text (UTF-8 scripts).
    #[arg(long)]
    allow_high_bit: bool,
}

impl Cli {
    fn into_config(self) -> DecodeConfig {
        let mut config = DecodeConfig::new(self.image);
        config.out_dir = self.out_dir;
        config.prefix = self.prefix;
        config.policy = TextPolicy {
            min_run_len: self.min_run,
            max_noise: self.max_noise,
            allow_high_bit: self.allow_high_bit,
        };
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();
    let candidates = run(&config)
        .with_context(|| format!("failed to decode {}", config.image_path.display()))?;

    for candidate in &candidates {
        let cut = match candidate.boundary {
            Boundary::Found { last } => format!("payload ends at byte {last}"),
            Boundary::NotFound => "no boundary, trimmed = full".to_string(),
        };
        println!(
            "{:<8} {:>10} bytes, {} -> {}, {}",
            candidate.mode.name(),
            candidate.stream.len(),
            cut,
            config.full_path(candidate.mode).display(),
            config.trimmed_path(candidate.mode).display()
        );
    }
    println!("Check the .full.txt files if a trimmed result looks cut in the wrong place.");
    Ok(())
}
