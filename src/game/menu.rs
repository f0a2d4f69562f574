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
use engine::audio::SoundManager;
use engine::gfx;
use engine::input::InputState;
use engine::ui::Button;
use engine::util::{Color, Rect};

const BUTTON_SIZE: (f32, f32) = (300.0, 80.0);
const BUTTON_COLOR: Color = Color::rgb(120, 120, 120);

// Buttons sit right of center, stacked downwards.
const BUTTON_X_OFFSET: f32 = 350.0;
const BUTTON_SPACING: f32 = 150.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Options,
    Exit,
}

pub struct Menu {
    background: Option<gfx::Texture>,
    screen: (f32, f32),
    buttons: [(Button, MenuAction); 3],
}

impl Menu {
    pub fn new(width: f32, height: f32, assets: &assets::Assets) -> Menu {
        let x = width / 2.0 + BUTTON_X_OFFSET;
        let y = height / 2.0;
        let button = |row: f32, label: &str, textures: &assets::ButtonTextures| {
            Button::new(BUTTON_SIZE, (x, y + row * BUTTON_SPACING), BUTTON_COLOR)
                .with_label(label)
                .with_textures(textures.normal, textures.hover)
        };

        Menu {
            background: assets.menu_background,
            screen: (width, height),
            buttons: [
                (button(0.0, "Start", &assets.start_button), MenuAction::Start),
                (button(1.0, "Options", &assets.options_button), MenuAction::Options),
                (button(2.0, "Exit", &assets.exit_button), MenuAction::Exit),
            ],
        }
    }

    pub fn update(&mut self, input: &InputState, audio: &mut SoundManager) -> Option<MenuAction> {
        let (mouse_x, mouse_y) = input.mouse;
        for (button, _) in self.buttons.iter_mut() {
            button.update_hover(mouse_x, mouse_y);
        }

        if !input.clicked {
            return None;
        }

        let action = self
            .buttons
            .iter()
            .find(|(button, _)| button.contains(mouse_x, mouse_y))
            .map(|(_, action)| *action)?;

        audio.play_sfx(assets::SFX_BUTTON_CLICK);
        Some(action)
    }

    #[cfg(test)]
    pub fn button_bounds(&self, action: MenuAction) -> Option<Rect<f32>> {
        self.buttons
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(button, _)| *button.bounds())
    }

    // Also used behind the options screen.
    pub fn draw_background(&self, context: &mut gfx::RenderContext) {
        if let Some(texture) = self.background.as_ref() {
            let dest = Rect::new(0.0, 0.0, self.screen.0, self.screen.1);
            context.draw_texture(texture, &dest, &texture.full_rect(), false, Color::WHITE);
        }
    }

    pub fn draw(&self, context: &mut gfx::RenderContext) {
        self.draw_background(context);
        for (button, _) in self.buttons.iter() {
            button.draw(context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_sound;

    fn click_at(x: f32, y: f32) -> InputState {
        InputState {
            mouse: (x, y),
            mouse_down: true,
            clicked: true,
            ..InputState::default()
        }
    }

    #[test]
    fn test_layout() {
        let menu = Menu::new(1920.0, 1080.0, &assets::Assets::default());
        assert_eq!(
            menu.button_bounds(MenuAction::Start),
            Some(Rect::new(1160.0, 500.0, 300.0, 80.0))
        );
        assert_eq!(
            menu.button_bounds(MenuAction::Options),
            Some(Rect::new(1160.0, 650.0, 300.0, 80.0))
        );
        assert_eq!(
            menu.button_bounds(MenuAction::Exit),
            Some(Rect::new(1160.0, 800.0, 300.0, 80.0))
        );
    }

    #[test]
    fn test_click_buttons() {
        let mut menu = Menu::new(1920.0, 1080.0, &assets::Assets::default());
        let (mut audio, calls) = recording_sound();
        assert_eq!(menu.update(&click_at(1310.0, 540.0), &mut audio), Some(MenuAction::Start));
        assert_eq!(menu.update(&click_at(1310.0, 690.0), &mut audio), Some(MenuAction::Options));
        assert_eq!(menu.update(&click_at(1310.0, 840.0), &mut audio), Some(MenuAction::Exit));
        assert_eq!(calls.borrow().len(), 3);
        assert!(calls.borrow().iter().all(|c| c == "sfx button_click"));
    }

    #[test]
    fn test_click_outside() {
        let mut menu = Menu::new(1920.0, 1080.0, &assets::Assets::default());
        let (mut audio, calls) = recording_sound();
        assert_eq!(menu.update(&click_at(100.0, 100.0), &mut audio), None);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_hover_without_click() {
        let mut menu = Menu::new(1920.0, 1080.0, &assets::Assets::default());
        let (mut audio, _calls) = recording_sound();
        let input = InputState {
            mouse: (1310.0, 540.0),
            ..InputState::default()
        };
        assert_eq!(menu.update(&input, &mut audio), None);
        assert!(menu.buttons[0].0.is_hovered());
        assert!(!menu.buttons[1].0.is_hovered());
    }
}
