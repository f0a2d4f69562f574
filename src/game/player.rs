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

use crate::assets::PlayerSprites;
use crate::config::PlayerTuning;
use engine::gfx;
use engine::input;
use engine::util::{Color, Rect};

const PLACEHOLDER_COLOR: Color = Color::rgb(200, 60, 60);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Run,
    Jump,
}

impl PlayerState {
    pub fn frame_count(self) -> u32 {
        match self {
            PlayerState::Idle => 3,
            PlayerState::Run => 6,
            PlayerState::Jump => 6,
        }
    }

    // Seconds each frame is shown.
    pub fn frame_duration(self) -> f32 {
        match self {
            PlayerState::Idle => 0.19,
            PlayerState::Run | PlayerState::Jump => 0.09,
        }
    }
}

pub struct Player {
    // The origin for the player is inside the hitbox, offset from its
    // top left by tuning.hitbox_origin. The sprite is centered here too.
    xpos: f32,
    ypos: f32,
    yvec: f32,
    on_ground: bool,
    facing_right: bool,
    state: PlayerState,
    frame: u32,
    frame_time: f32,
    tuning: PlayerTuning,
    sprites: PlayerSprites,
}

impl Player {
    pub fn new(tuning: &PlayerTuning, sprites: PlayerSprites) -> Player {
        Player {
            xpos: tuning.start.0,
            ypos: tuning.start.1,
            yvec: 0.0,
            on_ground: false,
            facing_right: true,
            state: PlayerState::Idle,
            frame: 0,
            frame_time: 0.0,
            tuning: tuning.clone(),
            sprites,
        }
    }

    // Applies input and gravity. Returns true if a jump started this frame.
    pub fn update_movement(&mut self, d_t: f32, buttons: u32) -> bool {
        let mut moving = false;
        let step = self.tuning.run_speed * d_t;

        if buttons & input::CONTROL_LEFT != 0 {
            self.xpos -= step;
            self.facing_right = false;
            moving = true;
        }

        if buttons & input::CONTROL_RIGHT != 0 {
            self.xpos += step;
            self.facing_right = true;
            moving = true;
        }

        let jumped = buttons & input::CONTROL_JUMP != 0 && self.on_ground;
        if jumped {
            self.yvec = -self.tuning.jump_velocity;
            self.on_ground = false;
        }

        self.yvec += self.tuning.gravity * d_t;
        self.ypos += self.yvec * d_t;

        let new_state = if !self.on_ground {
            PlayerState::Jump
        } else if moving {
            PlayerState::Run
        } else {
            PlayerState::Idle
        };

        if new_state != self.state {
            self.state = new_state;
            self.frame = 0;
        }

        jumped
    }

    pub fn update_animation(&mut self, d_t: f32) {
        self.frame_time += d_t;
        if self.frame_time >= self.state.frame_duration() {
            self.frame_time = 0.0;
            self.frame += 1;
            if self.frame >= self.state.frame_count() {
                self.frame = 0;
            }
        }
    }

    pub fn bounding_box(&self) -> Rect<f32> {
        Rect::new(
            self.xpos - self.tuning.hitbox_origin.0,
            self.ypos - self.tuning.hitbox_origin.1,
            self.tuning.hitbox_size.0,
            self.tuning.hitbox_size.1,
        )
    }

    pub fn position(&self) -> (f32, f32) {
        (self.xpos, self.ypos)
    }

    #[cfg(test)]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.xpos = x;
        self.ypos = y;
    }

    pub fn move_by(&mut self, d_x: f32, d_y: f32) {
        self.xpos += d_x;
        self.ypos += d_y;
    }

    #[cfg(test)]
    pub fn velocity_y(&self) -> f32 {
        self.yvec
    }

    pub fn set_velocity_y(&mut self, yvec: f32) {
        self.yvec = yvec;
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn set_on_ground(&mut self, on_ground: bool) {
        self.on_ground = on_ground;
    }

    #[cfg(test)]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    #[cfg(test)]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[cfg(test)]
    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    fn current_sprite(&self) -> Option<&gfx::Texture> {
        match self.state {
            PlayerState::Idle => self.sprites.idle.as_ref(),
            PlayerState::Run => self.sprites.run.as_ref(),
            PlayerState::Jump => self.sprites.jump.as_ref(),
        }
    }

    // Frames are laid out left to right in the sheet.
    pub fn source_rect(&self) -> Rect<f32> {
        let size = self.tuning.frame_size as f32;
        Rect::new(self.frame as f32 * size, 0.0, size, size)
    }

    pub fn draw(&self, context: &mut gfx::RenderContext) {
        let Some(texture) = self.current_sprite() else {
            context.fill_rect(&self.bounding_box(), PLACEHOLDER_COLOR);
            return;
        };

        let size = self.tuning.frame_size as f32 * self.tuning.sprite_scale;
        let dest = Rect::centered(self.xpos, self.ypos, size, size);
        context.draw_texture(texture, &dest, &self.source_rect(), !self.facing_right, Color::WHITE);
    }
}
