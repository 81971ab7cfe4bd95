//! Replay application: applies a script to a canvas and exports the result.

use crate::script::{Input, Script, Step};
use kurbo::Size;
use lucidnote_core::canvas::{Canvas, CanvasDocument};
use lucidnote_core::config::{CanvasConfig, ConfigError};
use lucidnote_core::event_handler::CanvasChange;
use lucidnote_core::shapes::SerializableColor;
use lucidnote_render::{DrawList, RenderContext, RendererError, SvgRenderer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid script: {0}")]
    Script(#[source] serde_json::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[source] serde_json::Error),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Output format of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Document snapshot as JSON.
    #[default]
    Json,
    /// Rendered SVG image.
    Svg,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: SerializableColor,
    /// Defaults for new canvas content.
    pub canvas: CanvasConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            background_color: SerializableColor::new(250, 250, 250, 255),
            canvas: CanvasConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load a config file; missing fields keep their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = read_file(path)?;
        let config: Self =
            serde_json::from_str(&json).map_err(|e| AppError::Config(ConfigError::Parse(e)))?;
        config.canvas.validate()?;
        Ok(config)
    }

    pub fn viewport_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

pub(crate) fn read_file(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    canvas: Canvas,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let canvas = Canvas::with_config(config.canvas.clone());
        Self { config, canvas }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Apply one step.
    pub fn apply(&mut self, step: Step) -> CanvasChange {
        match step.into_input() {
            Input::Pointer(event) => self.canvas.handle_pointer_event(event),
            Input::Key(event) => self.canvas.handle_key_event(&event),
            Input::Command(command) => self.canvas.apply_command(command),
            Input::FocusAt(point) => {
                let hit = self.canvas.document.element_at(point).map(|e| e.id());
                match hit {
                    Some(id) => self.canvas.focus_text(id),
                    None => CanvasChange::None,
                }
            }
            Input::Type(text) => match self.canvas.editing_element() {
                Some(id) => self.canvas.edit_text(id, text),
                None => {
                    log::warn!("Ignoring typed text with nothing in edit mode");
                    CanvasChange::None
                }
            },
        }
    }

    /// Apply every step of `script` in order.
    pub fn run(&mut self, script: Script) -> Vec<CanvasChange> {
        let count = script.steps.len();
        let changes: Vec<_> = script.steps.into_iter().map(|step| self.apply(step)).collect();
        log::info!("Replayed {} steps", count);
        changes
    }

    /// Current document as pretty JSON.
    pub fn snapshot_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(&self.canvas.document).map_err(AppError::Snapshot)
    }

    /// Render the current canvas to SVG.
    pub fn render_svg(&self) -> AppResult<String> {
        let list = DrawList::from_canvas(&self.canvas);
        let ctx = RenderContext::new(&list, self.config.viewport_size())
            .with_background(self.config.background_color.into());
        Ok(SvgRenderer::new().render(&ctx)?)
    }

    pub fn output(&self, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Json => self.snapshot_json(),
            OutputFormat::Svg => self.render_svg(),
        }
    }

    /// Replace the canvas document with a saved snapshot.
    pub fn load_snapshot(&mut self, json: &str) -> AppResult<()> {
        let document = CanvasDocument::from_json(json).map_err(AppError::Snapshot)?;
        self.canvas = Canvas::with_config(self.config.canvas.clone());
        self.canvas.document = document;
        Ok(())
    }
}

/// Files read by a replay run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayFiles<'a> {
    /// Application config.
    pub config: Option<&'a Path>,
    /// Canvas defaults, replacing the `canvas` section of the app config.
    pub canvas_config: Option<&'a Path>,
    /// Snapshot loaded before the script runs.
    pub snapshot: Option<&'a Path>,
}

/// Load config and script from disk, replay, and produce output.
pub fn run_files(script_path: &Path, files: ReplayFiles<'_>, format: OutputFormat) -> AppResult<String> {
    let mut config = match files.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(path) = files.canvas_config {
        config.canvas = CanvasConfig::load(path)?;
    }
    let mut app = App::new(config);
    if let Some(path) = files.snapshot {
        app.load_snapshot(&read_file(path)?)?;
    }
    let script = Script::from_json(&read_file(script_path)?).map_err(AppError::Script)?;
    app.run(script);
    app.output(format)
}
