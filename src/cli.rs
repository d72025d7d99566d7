use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agriscan")]
#[command(about = "AI plant disease diagnosis", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Diagnose a plant photo (or a folder of photos)
    Diagnose {
        /// Image file or folder
        #[arg(required = true)]
        path: PathBuf,

        /// Write results to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum image dimension in pixels before upload
        #[arg(long)]
        max_size: Option<u32>,

        /// API key (overrides GEMINI_API_KEY and the config file)
        #[arg(long)]
        api_key: Option<String>,

        /// Gemini model name
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Show or update configuration
    Config {
        /// Set the Gemini API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Set the Gemini model name
        #[arg(long)]
        set_model: Option<String>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}
