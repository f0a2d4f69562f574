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

pub mod audio;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod text;
pub mod ui;
pub mod util;
extern crate sdl2;

use std::time::{Duration, Instant};

pub use error::EngineError;

// Longest step fed to update, so a stall (dragging the window, a slow
// asset load) doesn't launch the player through the floor.
const MAX_FRAME_TIME: f32 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// The game plugs into the main loop through this.
pub trait Scene {
    fn handle_event(&mut self, event: &input::InputEvent, audio: &mut audio::SoundManager) -> Flow;
    fn update(&mut self, d_t: f32, input: &input::InputState, audio: &mut audio::SoundManager) -> Flow;
    fn draw(&self, context: &mut gfx::RenderContext);
}

pub struct GameEngine {
    _sdl: sdl2::Sdl,
    context: gfx::RenderContext,
    event_pump: sdl2::EventPump,
    audio: audio::SoundManager,
    frame_duration: Duration,
}

impl GameEngine {
    pub fn new(window: &config::WindowConfig) -> Result<GameEngine, EngineError> {
        window.validate()?;

        let sdl = sdl2::init().map_err(EngineError::Sdl)?;
        let context = gfx::RenderContext::new(&sdl, window)?;
        let event_pump = sdl.event_pump().map_err(EngineError::Sdl)?;

        let audio = match audio::MixerDevice::open() {
            Ok(device) => audio::SoundManager::new(Box::new(device)),
            Err(e) => {
                log::warn!("Audio disabled: {}", e);
                audio::SoundManager::silent()
            }
        };

        Ok(GameEngine {
            _sdl: sdl,
            context,
            event_pump,
            audio,
            frame_duration: Duration::from_secs_f64(1.0 / window.frame_rate as f64),
        })
    }

    pub fn context(&mut self) -> &mut gfx::RenderContext {
        &mut self.context
    }

    pub fn audio(&mut self) -> &mut audio::SoundManager {
        &mut self.audio
    }

    pub fn screen_size(&self) -> (f32, f32) {
        self.context.size()
    }

    pub fn run(&mut self, scene: &mut dyn Scene) {
        let mut last_frame = Instant::now();

        'main: loop {
            let frame_start = Instant::now();
            let mut clicked = false;

            for event in self.event_pump.poll_iter() {
                let Some(event) = input::translate_event(&event) else {
                    continue;
                };

                match event {
                    input::InputEvent::Quit => break 'main,
                    input::InputEvent::MouseDown { .. } => clicked = true,
                    _ => {}
                }

                if scene.handle_event(&event, &mut self.audio) == Flow::Quit {
                    break 'main;
                }
            }

            let mouse = self.event_pump.mouse_state();
            let input = input::InputState {
                buttons: input::buttons_from_keyboard(&self.event_pump.keyboard_state()),
                mouse: (mouse.x() as f32, mouse.y() as f32),
                mouse_down: mouse.left(),
                clicked,
            };

            let d_t = frame_start
                .duration_since(last_frame)
                .as_secs_f32()
                .min(MAX_FRAME_TIME);
            last_frame = frame_start;

            if scene.update(d_t, &input, &mut self.audio) == Flow::Quit {
                break 'main;
            }

            scene.draw(&mut self.context);
            self.context.render();

            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_duration {
                std::thread::sleep(self.frame_duration - elapsed);
            }
        }

        self.audio.stop_music();
        log::info!("Main loop exited");
    }
}
