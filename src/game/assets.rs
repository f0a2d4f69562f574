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
// Asset paths are relative to the configured asset directory. Every asset
// is optional: a missing file is logged and the game falls back to flat
// colours or silence.
//

use engine::audio::SoundManager;
use engine::gfx::{RenderContext, Texture};
use std::path::Path;

pub const MUSIC_MENU: &str = "menu";
pub const MUSIC_GAME: &str = "game";

pub const SFX_BUTTON_CLICK: &str = "button_click";
pub const SFX_JUMP: &str = "jump";
pub const SFX_RUN: &str = "run";
pub const SFX_LANDING: &str = "landing";
pub const SFX_RAIN: &str = "rain";

const MUSIC_FILES: [(&str, &str); 2] = [
    (MUSIC_MENU, "SFX/BackGround.mp3"),
    (MUSIC_GAME, "SFX/BackGround.mp3"),
];

const SFX_FILES: [(&str, &str); 5] = [
    (SFX_BUTTON_CLICK, "Audio/button_click.wav"),
    (SFX_JUMP, "Audio/jump.wav"),
    (SFX_RUN, "Audio/run.wav"),
    (SFX_LANDING, "Audio/landing.wav"),
    (SFX_RAIN, "Audio/rain_loop.wav"),
];

pub const FONT_FILE: &str = "Fonts/MyFont.ttf";

pub fn background_layer_path(index: usize) -> String {
    format!("Backgrounds/background_{}.png", index + 1)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerSprites {
    pub idle: Option<Texture>,
    pub run: Option<Texture>,
    pub jump: Option<Texture>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonTextures {
    pub normal: Option<Texture>,
    pub hover: Option<Texture>,
}

#[derive(Clone, Debug, Default)]
pub struct Assets {
    pub menu_background: Option<Texture>,
    pub start_button: ButtonTextures,
    pub options_button: ButtonTextures,
    pub exit_button: ButtonTextures,
    pub player: PlayerSprites,
    pub background_layers: Vec<Option<Texture>>,
}

fn load_texture(context: &mut RenderContext, dir: &Path, name: &str, repeat: bool) -> Option<Texture> {
    let path = dir.join(name);
    match context.load_texture(&path, repeat) {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::warn!("Can't load {} (placeholder will be used): {}", path.display(), e);
            None
        }
    }
}

fn load_button(context: &mut RenderContext, dir: &Path, name: &str) -> ButtonTextures {
    ButtonTextures {
        normal: load_texture(context, dir, &format!("Buttons/{}.png", name), false),
        hover: load_texture(context, dir, &format!("Buttons/{}_hover.png", name), false),
    }
}

fn load_font(context: &mut RenderContext, dir: &Path) {
    let path = dir.join(FONT_FILE);
    if let Err(e) = context.load_font(&path) {
        log::warn!("Can't load {} (text will not be shown): {}", path.display(), e);
    }
}

impl Assets {
    pub fn load(context: &mut RenderContext, dir: &Path, layer_count: usize) -> Assets {
        load_font(context, dir);
        let background_layers = (0..layer_count)
            .map(|i| load_texture(context, dir, &background_layer_path(i), true))
            .collect();

        Assets {
            menu_background: load_texture(context, dir, "MenusBackgrounds/MainMenu.png", false),
            start_button: load_button(context, dir, "start"),
            options_button: load_button(context, dir, "options"),
            exit_button: load_button(context, dir, "exit"),
            player: PlayerSprites {
                idle: load_texture(context, dir, "Character/idle.png", false),
                run: load_texture(context, dir, "Character/run.png", false),
                jump: load_texture(context, dir, "Character/jump.png", false),
            },
            background_layers,
        }
    }
}

pub fn load_sounds(audio: &mut SoundManager, dir: &Path) {
    for (key, path) in MUSIC_FILES {
        audio.load_music(key, &dir.join(path));
    }

    for (key, path) in SFX_FILES {
        audio.load_effect(key, &dir.join(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_paths_are_one_based() {
        assert_eq!(background_layer_path(0), "Backgrounds/background_1.png");
        assert_eq!(background_layer_path(6), "Backgrounds/background_7.png");
    }

    #[test]
    fn test_sfx_keys_unique() {
        let mut keys: Vec<&str> = SFX_FILES.iter().map(|(key, _)| *key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), SFX_FILES.len());
    }
}
