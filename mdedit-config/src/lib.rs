//! Shared configuration loader for the mdedit toolchain.
//!
//! `defaults/mdedit.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`EditorConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdedit_core::{EditMode, EditorOptions, RenderOptions, Theme};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdedit.default.toml");

/// Top-level configuration consumed by mdedit applications.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    pub sync: SyncConfig,
    pub render: RenderConfig,
    pub editor: SurfaceConfig,
}

/// Reconciliation timing knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    pub debounce_ms: u64,
}

/// Mirrors the knobs exposed by the core's renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub tables: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub superscript: bool,
    pub raw_html: bool,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            tables: config.tables,
            strikethrough: config.strikethrough,
            autolink: config.autolink,
            tasklist: config.tasklist,
            superscript: config.superscript,
            raw_html: config.raw_html,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        config.clone().into()
    }
}

/// Startup surface configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SurfaceConfig {
    pub mode: ModeName,
    pub theme: ThemeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ModeName {
    #[serde(rename = "split")]
    Split,
    #[serde(rename = "source")]
    Source,
    #[serde(rename = "result")]
    Result,
}

impl From<ModeName> for EditMode {
    fn from(name: ModeName) -> Self {
        match name {
            ModeName::Split => EditMode::Split,
            ModeName::Source => EditMode::Source,
            ModeName::Result => EditMode::Result,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ThemeName {
    #[serde(rename = "github")]
    Github,
    #[serde(rename = "night")]
    Night,
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Github => Theme::Github,
            ThemeName::Night => Theme::Night,
        }
    }
}

impl From<&EditorConfig> for EditorOptions {
    fn from(config: &EditorConfig) -> Self {
        EditorOptions {
            debounce_ms: config.sync.debounce_ms,
            render: (&config.render).into(),
            mode: config.editor.mode.into(),
            theme: config.editor.theme.into(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<EditorConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<EditorConfig, ConfigError> {
    Loader::new().build()
}
