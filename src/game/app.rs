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

use crate::assets;
use crate::config::GameConfig;
use crate::menu::{Menu, MenuAction};
use crate::options::{OptionsAction, OptionsMenu};
use crate::rain::RainSystem;
use crate::world::World;
use engine::audio::SoundManager;
use engine::gfx;
use engine::input::{InputEvent, InputState};
use engine::{Flow, Scene};
use sdl2::keyboard::Keycode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Options,
}

pub struct App {
    state: GameState,
    screen: (f32, f32),
    menu: Menu,
    options: OptionsMenu,
    rain: RainSystem,
    world: World,
}

impl App {
    pub fn new(config: &GameConfig, screen: (f32, f32), assets: &assets::Assets, audio: &mut SoundManager) -> App {
        App::with_rain(
            config,
            screen,
            assets,
            audio,
            RainSystem::new(config.world.rain_drops, screen.0, screen.1),
        )
    }

    fn with_rain(
        config: &GameConfig,
        screen: (f32, f32),
        assets: &assets::Assets,
        audio: &mut SoundManager,
        rain: RainSystem,
    ) -> App {
        audio.play_music(assets::MUSIC_MENU, true);
        App {
            state: GameState::Menu,
            screen,
            menu: Menu::new(screen.0, screen.1, assets),
            options: OptionsMenu::new(screen.0, screen.1, audio),
            rain,
            world: World::new(config, screen, assets),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("{:?} -> {:?}", self.state, state);
        self.state = state;
    }
}

impl Scene for App {
    fn handle_event(&mut self, event: &InputEvent, audio: &mut SoundManager) -> Flow {
        if *event == InputEvent::KeyDown(Keycode::Escape) {
            return Flow::Quit;
        }

        if self.state == GameState::Options
            && self.options.handle_event(event, audio) == Some(OptionsAction::Back)
        {
            self.set_state(GameState::Menu);
        }

        Flow::Continue
    }

    fn update(&mut self, d_t: f32, input: &InputState, audio: &mut SoundManager) -> Flow {
        match self.state {
            GameState::Menu => {
                match self.menu.update(input, audio) {
                    Some(MenuAction::Start) => {
                        log::info!("Starting game");
                        audio.play_music(assets::MUSIC_GAME, true);
                        self.set_state(GameState::Playing);
                    }
                    Some(MenuAction::Options) => {
                        // Sliders pick up the current volumes.
                        self.options = OptionsMenu::new(self.screen.0, self.screen.1, audio);
                        self.set_state(GameState::Options);
                    }
                    Some(MenuAction::Exit) => return Flow::Quit,
                    None => {}
                }

                self.rain.update(d_t);
            }
            GameState::Playing => self.world.update(d_t, input.buttons, audio),
            GameState::Options => {}
        }

        Flow::Continue
    }

    fn draw(&self, context: &mut gfx::RenderContext) {
        match self.state {
            GameState::Menu => {
                context.set_offset(0.0, 0.0);
                self.menu.draw(context);
                self.rain.draw(context);
            }
            GameState::Playing => self.world.draw(context),
            GameState::Options => {
                context.set_offset(0.0, 0.0);
                self.menu.draw_background(context);
                self.options.draw(context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{recording_sound, Calls};

    const FRAME: f32 = 1.0 / 60.0;

    fn app() -> (App, SoundManager, Calls) {
        let (mut audio, calls) = recording_sound();
        let app = App::with_rain(
            &GameConfig::default(),
            (1920.0, 1080.0),
            &assets::Assets::default(),
            &mut audio,
            RainSystem::with_seed(10, 1920.0, 1080.0, 1),
        );
        (app, audio, calls)
    }

    fn click_at(x: f32, y: f32) -> InputState {
        InputState {
            mouse: (x, y),
            mouse_down: true,
            clicked: true,
            ..InputState::default()
        }
    }

    #[test]
    fn test_starts_in_menu_with_music() {
        let (app, audio, calls) = app();
        assert_eq!(app.state(), GameState::Menu);
        assert_eq!(audio.current_music(), Some(assets::MUSIC_MENU));
        assert_eq!(*calls.borrow(), vec!["music menu"]);
    }

    #[test]
    fn test_start_switches_music() {
        let (mut app, mut audio, calls) = app();
        let flow = app.update(FRAME, &click_at(1310.0, 540.0), &mut audio);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(app.state(), GameState::Playing);
        assert_eq!(audio.current_music(), Some(assets::MUSIC_GAME));
        assert_eq!(
            *calls.borrow(),
            vec!["music menu", "sfx button_click", "music game"]
        );
    }

    #[test]
    fn test_exit_quits() {
        let (mut app, mut audio, _calls) = app();
        assert_eq!(app.update(FRAME, &click_at(1310.0, 840.0), &mut audio), Flow::Quit);
    }

    #[test]
    fn test_escape_quits_from_any_state() {
        let (mut app, mut audio, _calls) = app();
        let escape = InputEvent::KeyDown(Keycode::Escape);
        assert_eq!(app.handle_event(&escape, &mut audio), Flow::Quit);

        app.update(FRAME, &click_at(1310.0, 540.0), &mut audio);
        assert_eq!(app.state(), GameState::Playing);
        assert_eq!(app.handle_event(&escape, &mut audio), Flow::Quit);
    }

    #[test]
    fn test_options_round_trip() {
        let (mut app, mut audio, _calls) = app();
        app.update(FRAME, &click_at(1310.0, 690.0), &mut audio);
        assert_eq!(app.state(), GameState::Options);

        let press = InputEvent::MouseDown { x: 960.0, y: 440.0 };
        assert_eq!(app.handle_event(&press, &mut audio), Flow::Continue);
        assert_eq!(audio.music_volume(), 50.0);

        let back = InputEvent::MouseDown { x: 960.0, y: 720.0 };
        app.handle_event(&back, &mut audio);
        assert_eq!(app.state(), GameState::Menu);
    }

    #[test]
    fn test_events_ignored_outside_options() {
        let (mut app, mut audio, _calls) = app();
        let press = InputEvent::MouseDown { x: 960.0, y: 440.0 };
        app.handle_event(&press, &mut audio);
        assert_eq!(audio.music_volume(), 60.0);
        assert_eq!(app.state(), GameState::Menu);
    }

    #[test]
    fn test_playing_updates_world() {
        let (mut app, mut audio, _calls) = app();
        app.update(FRAME, &click_at(1310.0, 540.0), &mut audio);
        let before = app.world.player().position();
        app.update(FRAME, &InputState::default(), &mut audio);
        assert!(app.world.player().position().1 > before.1);
    }
}
