//! CLI argument parsing with clap.

use clap::{Args, Parser, Subcommand};

/// Generate AI wallpapers through the local wallpaper service.
#[derive(Parser, Debug)]
#[command(name = "wallgen", version, about)]
pub struct Cli {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Base URL of the local wallpaper service.
    #[arg(long, global = true, env = "WALLGEN_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Service operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an image from a text prompt.
    Generate(GenerateArgs),
    /// Set an image on the service host as the desktop wallpaper.
    Set(SetArgs),
}

/// Arguments for `wallgen generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text prompt describing the desired image.
    #[arg(conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt text.
    #[arg(short = 'p', long, conflicts_with = "prompt")]
    pub prompt_file: Option<String>,

    /// Address of the image generation backend.
    #[arg(long)]
    pub server: Option<String>,

    /// Port of the image generation backend.
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory on the service host where images are written.
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Save a local copy of the generated image.
    #[arg(short = 'o', long = "save")]
    pub save: Option<String>,

    /// Set the generated image as wallpaper.
    #[arg(long)]
    pub apply: bool,
}

/// Arguments for `wallgen set`.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Image path as seen by the service host.
    pub image_path: String,
}

impl GenerateArgs {
    /// Resolve the prompt from either the positional argument or the file flag.
    ///
    /// # Errors
    ///
    /// Returns an error if neither prompt nor prompt-file is provided,
    /// if the file cannot be read, or if the prompt is blank.
    pub fn resolve_prompt(&self) -> Result<String, std::io::Error> {
        let prompt = if let Some(ref text) = self.prompt {
            text.clone()
        } else if let Some(ref path) = self.prompt_file {
            std::fs::read_to_string(path)?
        } else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Provide a prompt string or use -p/--prompt-file",
            ));
        };

        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Prompt must not be empty",
            ));
        }
        Ok(trimmed.to_string())
    }
}
