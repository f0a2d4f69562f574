//
// Copyright 2025 Jeff Bush
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//
// Configuration files are RON. Every field is optional; anything left out
// falls back to its default.
//

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid value: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Only used when not fullscreen.
    pub width: u32,
    pub height: u32,
    /// Fullscreen at the desktop resolution.
    pub fullscreen: bool,
    pub vsync: bool,
    pub frame_rate: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ESC CTRL".to_string(),
            width: 1280,
            height: 720,
            fullscreen: true,
            vsync: true,
            frame_rate: 60,
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{}",
                self.width, self.height
            )));
        }

        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be non-zero".to_string()));
        }

        Ok(())
    }
}

pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Ok(ron::from_str(&text)?)
}

pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load(path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No config at {}, using defaults", path.display());
            T::default()
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_window_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "ESC CTRL");
        assert!(config.fullscreen);
        assert_eq!(config.frame_rate, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(fullscreen: false, width: 800)").unwrap();

        let config: WindowConfig = load(file.path()).unwrap();
        assert!(!config.fullscreen);
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 720);
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(fullscreen: maybe)").unwrap();

        let result: Result<WindowConfig, _> = load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let config: WindowConfig = load_or_default(file.path());
        assert_eq!(config, WindowConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ron");

        let result: Result<WindowConfig, _> = load(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));

        let config: WindowConfig = load_or_default(&path);
        assert_eq!(config, WindowConfig::default());
    }

    #[test]
    fn test_validate() {
        let config = WindowConfig {
            frame_rate: 0,
            ..WindowConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
