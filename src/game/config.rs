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

use engine::config::{ConfigError, WindowConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "esc_ctrl.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub music_enabled: bool,
    pub sfx_enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_volume: engine::audio::DEFAULT_MUSIC_VOLUME,
            sfx_volume: engine::audio::DEFAULT_SFX_VOLUME,
            music_enabled: true,
            sfx_enabled: true,
        }
    }
}

// Distances are pixels, times are seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub run_speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub start: (f32, f32),
    pub hitbox_size: (f32, f32),

    /// Player position relative to the top left of the hitbox.
    pub hitbox_origin: (f32, f32),
    pub frame_size: u32,
    pub sprite_scale: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            run_speed: 300.0,
            gravity: 2160.0,
            jump_velocity: 960.0,
            start: (300.0, 300.0),
            hitbox_size: (40.0, 150.0),
            hitbox_origin: (20.0, 40.0),
            frame_size: 1024,
            sprite_scale: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width as a multiple of the screen width.
    pub width_in_screens: f32,
    /// One entry per background layer, back to front, in pixels per second.
    pub parallax_speeds: Vec<f32>,
    /// Layers below this index drift on their own; the rest follow input.
    pub drifting_layers: usize,
    pub rain_drops: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width_in_screens: 10000.0,
            parallax_speeds: vec![0.0, 25.0, 60.0, 110.0, 120.0, 130.0, 140.0],
            drifting_layers: 2,
            rain_drops: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub audio: AudioConfig,
    pub player: PlayerTuning,
    pub world: WorldConfig,
    pub asset_dir: PathBuf,
    pub show_hitboxes: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            audio: AudioConfig::default(),
            player: PlayerTuning::default(),
            world: WorldConfig::default(),
            asset_dir: PathBuf::from("Assets"),
            show_hitboxes: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;

        if self.world.width_in_screens < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "width_in_screens {} is less than one screen",
                self.world.width_in_screens
            )));
        }

        if self.world.drifting_layers > self.world.parallax_speeds.len() {
            return Err(ConfigError::Invalid(format!(
                "drifting_layers {} exceeds {} parallax layers",
                self.world.drifting_layers,
                self.world.parallax_speeds.len()
            )));
        }

        if self.player.frame_size == 0 || self.player.hitbox_size.0 <= 0.0 || self.player.hitbox_size.1 <= 0.0 {
            return Err(ConfigError::Invalid("player dimensions must be positive".to_string()));
        }

        Ok(())
    }
}
