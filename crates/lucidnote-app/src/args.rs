//! Command-line argument definitions.

use crate::app::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Replay canvas input and print the resulting document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON replay script
    pub script: PathBuf,

    /// Render SVG instead of printing the JSON snapshot
    #[arg(long)]
    pub svg: bool,

    /// Path to an application config file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a canvas defaults file (JSON), overriding the app config
    #[arg(long)]
    pub canvas_config: Option<PathBuf>,

    /// Snapshot to load before replaying
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn format(&self) -> OutputFormat {
        if self.svg {
            OutputFormat::Svg
        } else {
            OutputFormat::Json
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["lucidnote", "script.json", "--svg", "-c", "app.json"]);
        assert_eq!(args.script, PathBuf::from("script.json"));
        assert_eq!(args.format(), OutputFormat::Svg);
        assert_eq!(args.config, Some(PathBuf::from("app.json")));
        assert_eq!(args.output, None);
        assert_eq!(args.canvas_config, None);
    }

    #[test]
    fn test_parse_canvas_config() {
        let args = Args::parse_from(["lucidnote", "script.json", "--canvas-config", "canvas.json"]);
        assert_eq!(args.canvas_config, Some(PathBuf::from("canvas.json")));
        assert_eq!(args.format(), OutputFormat::Json);
    }
}
