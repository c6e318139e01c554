//! Command line interface.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal operational output
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "lumenpath")]
#[command(about = "A simple path tracer in Rust")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, short = 'w', default_value = "400", help = "Image width in pixels")]
    pub width: u32,

    /// Ratio of image width over height; the height is derived from it
    #[arg(long, default_value_t = 16.0 / 9.0, help = "Ratio of image width over height")]
    pub aspect_ratio: f64,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Maximum number of ray bounces per sample
    #[arg(long, default_value = "50", help = "Maximum number of ray bounces per sample")]
    pub max_depth: u32,

    /// Seed for the random number generator (random when omitted)
    #[arg(long, help = "Seed for the random number generator (random when omitted)")]
    pub seed: Option<u64>,

    /// Output file path (.ppm for the plain pixel stream, .png for 8-bit
    /// with gamma correction, .exr for HDR linear)
    #[arg(
        short,
        long,
        default_value = "output.png",
        help = "Output file path (.ppm, .png or .exr)"
    )]
    pub output: String,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,
}
