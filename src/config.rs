use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CursorError;
use crate::pipeline::resources::{DirectoryResources, LayeredResources, ResourceLoader};

const CONFIG_DIR: &str = "cursor-registry";
const CONFIG_FILE: &str = "cursors.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Replace drag/copy/move with the operating system's own cursors where
    /// the platform has them.
    pub native_cursors: bool,

    /// Fixed pixel size for bitmap cursors instead of the platform size
    /// times the display scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_size: Option<u32>,

    /// Directory whose artwork takes precedence over the embedded artwork.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_dir: Option<PathBuf>,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            native_cursors: true,
            cursor_size: None,
            resource_dir: None,
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.cursor_size == Some(0) {
            return Err(CursorError::Config("cursor_size must be at least 1".into()));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/cursor-registry/cursors.toml`, when the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the file at `default_path()` if there is one, defaults otherwise.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Wraps the application's embedded artwork with the configured
    /// override directory, if any.
    pub fn resource_loader<'a, R>(
        &self,
        embedded: R,
    ) -> crate::error::Result<Box<dyn ResourceLoader + 'a>>
    where
        R: ResourceLoader + 'a,
    {
        match &self.resource_dir {
            Some(dir) => {
                let overrides = DirectoryResources::open(dir)?;
                Ok(Box::new(LayeredResources::new(overrides, embedded)))
            }
            None => Ok(Box::new(embedded)),
        }
    }
}
