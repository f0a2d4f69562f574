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
use engine::input::InputEvent;
use engine::ui::{Button, Slider};
use engine::util::Color;

const SLIDER_WIDTH: f32 = 400.0;
const BACK_SIZE: (f32, f32) = (200.0, 70.0);
const BACK_COLOR: Color = Color::rgb(150, 150, 150);

const TITLE_SIZE: u32 = 36;
const LABEL_SIZE: u32 = 20;
const VALUE_SIZE: u32 = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionsAction {
    Back,
}

pub struct OptionsMenu {
    center_x: f32,
    base_y: f32,
    music_slider: Slider,
    sfx_slider: Slider,
    back_button: Button,
}

impl OptionsMenu {
    pub fn new(width: f32, height: f32, audio: &SoundManager) -> OptionsMenu {
        let center_x = width / 2.0;
        let base_y = height / 2.0 - 120.0;

        OptionsMenu {
            center_x,
            base_y,
            music_slider: Slider::new(center_x - 200.0, base_y + 20.0, SLIDER_WIDTH, audio.music_volume() as i32),
            sfx_slider: Slider::new(center_x - 200.0, base_y + 140.0, SLIDER_WIDTH, audio.sfx_volume() as i32),
            back_button: Button::new(BACK_SIZE, (center_x, base_y + 300.0), BACK_COLOR).with_label("Back"),
        }
    }

    pub fn music_value_text(&self) -> String {
        format!("{}%", self.music_slider.value())
    }

    pub fn sfx_value_text(&self) -> String {
        format!("{}%", self.sfx_slider.value())
    }

    pub fn handle_event(&mut self, event: &InputEvent, audio: &mut SoundManager) -> Option<OptionsAction> {
        if self.music_slider.handle_event(event) {
            audio.set_music_volume(self.music_slider.value() as f32);
        }

        if self.sfx_slider.handle_event(event) {
            audio.set_sfx_volume(self.sfx_slider.value() as f32);
        }

        match *event {
            InputEvent::MouseMove { x, y } => {
                self.back_button.update_hover(x, y);
                None
            }
            InputEvent::MouseDown { x, y } if self.back_button.contains(x, y) => {
                audio.play_sfx(assets::SFX_BUTTON_CLICK);
                Some(OptionsAction::Back)
            }
            _ => None,
        }
    }

    pub fn draw(&self, context: &mut gfx::RenderContext) {
        let cx = self.center_x;
        let base = self.base_y;
        context.draw_text("Options", (cx - 60.0, base - 80.0), TITLE_SIZE, Color::WHITE);
        context.draw_text("Music Volume", (cx - 200.0, base - 10.0), LABEL_SIZE, Color::WHITE);
        context.draw_text("SFX Volume", (cx - 200.0, base + 120.0), LABEL_SIZE, Color::WHITE);
        self.music_slider.draw(context);
        self.sfx_slider.draw(context);
        context.draw_text(&self.music_value_text(), (cx + 220.0, base + 10.0), VALUE_SIZE, Color::WHITE);
        context.draw_text(&self.sfx_value_text(), (cx + 220.0, base + 130.0), VALUE_SIZE, Color::WHITE);
        self.back_button.draw(context);
    }
}
