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

use crate::config::ConfigError;

#[derive(Debug)]
pub enum EngineError {
    Sdl(String),
    Gl(String),
    Io(std::io::Error),
    Image(image::ImageError),
    Audio(String),
    Font(String),
    Config(ConfigError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Sdl(e) => write!(f, "SDL error: {}", e),
            EngineError::Gl(e) => write!(f, "OpenGL error: {}", e),
            EngineError::Io(e) => write!(f, "IO error: {}", e),
            EngineError::Image(e) => write!(f, "Image error: {}", e),
            EngineError::Audio(e) => write!(f, "Audio error: {}", e),
            EngineError::Font(e) => write!(f, "Font error: {}", e),
            EngineError::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(e) => Some(e),
            EngineError::Image(e) => Some(e),
            EngineError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::Io(e)
    }
}

impl From<image::ImageError> for EngineError {
    fn from(e: image::ImageError) -> Self {
        EngineError::Image(e)
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        EngineError::Config(e)
    }
}

impl From<ab_glyph::InvalidFont> for EngineError {
    fn from(e: ab_glyph::InvalidFont) -> Self {
        EngineError::Font(e.to_string())
    }
}

// SDL reports most failures as plain strings.
impl From<sdl2::video::WindowBuildError> for EngineError {
    fn from(e: sdl2::video::WindowBuildError) -> Self {
        EngineError::Sdl(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let e = EngineError::Audio("no device".to_string());
        assert_eq!(e.to_string(), "Audio error: no device");
        assert!(e.source().is_none());
    }

    #[test]
    fn test_io_source() {
        let e: EngineError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(e, EngineError::Io(_)));
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("IO error"));
    }
}
