use anyhow::{Context, Result};
use clap::Parser;

use video_resolution::get_resolution;

/// Print the pixel dimensions of a video file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Video file; a `_WIDTHxHEIGHT` token in the name skips opening it
    path: String,
    /// Print as JSON instead of WIDTHxHEIGHT
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let resolution = get_resolution(&cli.path)
        .with_context(|| format!("Could not determine resolution of {}", cli.path))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", resolution);
    }

    Ok(())
}
