//! CLI definitions for the `pixtral` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::{DEFAULT_MODEL, DEFAULT_PROMPT};

/// Pixtral vision CLI
#[derive(Parser, Debug)]
#[command(name = "pixtral", version, about = "Describe images with Pixtral")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send images and a prompt to a Pixtral model
    Describe(DescribeArgs),
    /// Echo text the way the preview node displays it
    Preview(PreviewArgs),
}

/// Arguments for the `describe` subcommand.
#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Model identifier
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Prompt sent before the images
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Mistral API key (falls back to MISTRAL_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Temperature (0.0 - 1.5)
    #[arg(short, long, default_value_t = 0.7)]
    pub temperature: f64,

    /// Max tokens (1 - 32768)
    #[arg(long, default_value_t = 4096)]
    pub max_tokens: u32,

    /// Nucleus sampling (0.0 - 1.0)
    #[arg(long, default_value_t = 1.0)]
    pub top_p: f64,

    /// Stack the images into one batch first (2-30 images of equal size)
    #[arg(long)]
    pub batch: bool,

    /// Image files, sent in order
    #[arg(required = true, value_name = "IMAGE")]
    pub images: Vec<PathBuf>,
}

/// Arguments for the `preview` subcommand.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Text values to display
    #[arg(required = true)]
    pub text: Vec<String>,
}
