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

mod app;
mod assets;
mod camera;
mod collision;
mod config;
mod menu;
mod options;
mod parallax;
mod platform;
mod player;
mod rain;
#[cfg(test)]
mod testing;
mod world;

use engine::GameEngine;
use env_logger::Env;
use std::path::PathBuf;

fn load_config() -> config::GameConfig {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));

    let config: config::GameConfig = engine::config::load_or_default(&path);
    if let Err(e) = config.validate() {
        log::warn!("{}: {}, using defaults", path.display(), e);
        return config::GameConfig::default();
    }

    config
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config();
    let mut engine = match GameEngine::new(&config.window) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let screen = engine.screen_size();
    log::info!("Screen size {}x{}", screen.0, screen.1);

    let assets = assets::Assets::load(
        engine.context(),
        &config.asset_dir,
        config.world.parallax_speeds.len(),
    );

    let audio = engine.audio();
    assets::load_sounds(audio, &config.asset_dir);
    audio.set_music_volume(config.audio.music_volume);
    audio.set_sfx_volume(config.audio.sfx_volume);
    audio.set_music_enabled(config.audio.music_enabled);
    audio.set_sfx_enabled(config.audio.sfx_enabled);

    let mut app = app::App::new(&config, screen, &assets, audio);
    engine.run(&mut app);
    log::info!("Exiting");
}
