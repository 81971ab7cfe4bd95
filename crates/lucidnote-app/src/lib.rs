//! LucidNote Application
//!
//! Command-line shell that replays canvas input from a script and exports
//! the resulting document as JSON or SVG.

mod app;
mod args;
mod script;

pub use app::{App, AppConfig, AppError, AppResult, OutputFormat, ReplayFiles, run_files};
pub use args::Args;
pub use script::{Script, Step};

/// Run the replay described by `args`, writing to the requested output.
pub fn run(args: &Args) -> AppResult<()> {
    let files = ReplayFiles {
        config: args.config.as_deref(),
        canvas_config: args.canvas_config.as_deref(),
        snapshot: args.snapshot.as_deref(),
    };
    let output = run_files(&args.script, files, args.format())?;
    match &args.output {
        Some(path) => std::fs::write(path, output).map_err(|source| AppError::Io {
            path: path.clone(),
            source,
        })?,
        None => println!("{}", output),
    }
    Ok(())
}
