use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use placeholder_gen_lib::{generate_placeholder_set, GeneratorConfig, DEFAULT_SIZE};
use std::fs;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to write placeholder images to
    #[arg(long, env("PLACEHOLDER_OUTPUT_DIR"), default_value = "public")]
    output_dir: String,

    /// Edge length of the generated squares, in pixels
    #[arg(long, env("PLACEHOLDER_SIZE"), default_value_t = DEFAULT_SIZE)]
    size: u32,
}

impl GeneratorConfig for Args {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn size(&self) -> u32 {
        self.size
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Create the output directory if it doesn't exist
    if !Path::new(&args.output_dir).exists() {
        fs::create_dir_all(&args.output_dir)
            .context("Failed to create output directory")?;
    }

    generate_placeholder_set(&args)?;

    println!("Placeholder images created successfully!");

    Ok(())
}
