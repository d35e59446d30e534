// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "sprite-engine")]
#[command(about = "Monochrome sprite engine demo", long_about = None)]
pub struct Cli {
    /// Scene description file (JSON); runs the built-in demo scene when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Where to present frames
    #[arg(long, value_enum, default_value = "terminal")]
    pub display: DisplayKind,

    /// Stop after this many frames (headless defaults to 300; ignored by
    /// the window preview)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Frame rate cap
    #[arg(long, default_value_t = 30.0)]
    pub fps: f32,

    /// Window pixels per canvas pixel
    #[arg(long, default_value_t = 8)]
    pub scale: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    /// Animate in the terminal with half-block characters
    Terminal,
    /// Desktop preview window
    Window,
    /// Render without presenting; print the final frame
    Headless,
}
