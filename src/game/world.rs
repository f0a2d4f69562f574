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
use crate::camera::Camera;
use crate::collision;
use crate::config::GameConfig;
use crate::parallax::ParallaxBackground;
use crate::platform::{Platform, PLATFORM_COLOR};
use crate::player::Player;
use engine::audio::SoundManager;
use engine::gfx;
use engine::input;
use engine::util::Color;

const HITBOX_COLOR: Color = Color::rgba(255, 0, 0, 90);
const PLATFORM_HITBOX_COLOR: Color = Color::rgba(0, 255, 0, 90);

// The ground starts a little in from the world's left edge and runs to
// just short of the right.
const GROUND_INSET: f32 = 50.0;
const GROUND_HEIGHT: f32 = 200.0;

// Movement and collision run in steps of this size whatever the frame
// time, so a long frame can't carry the player past a platform's side.
const PHYSICS_STEP: f32 = 1.0 / 60.0;

pub struct World {
    player: Player,
    background: ParallaxBackground,
    ground: Platform,
    platforms: Vec<Platform>,
    camera: Camera,
    drifting_layers: usize,
    show_hitboxes: bool,
    unsimulated_time: f32,
}

impl World {
    pub fn new(config: &GameConfig, screen: (f32, f32), assets: &assets::Assets) -> World {
        let (width, height) = screen;
        let world_width = width * config.world.width_in_screens;

        let platforms = vec![
            Platform::new(800.0, height - 250.0, 300.0, 40.0, PLATFORM_COLOR),
            Platform::new(1400.0, height - 350.0, 250.0, 40.0, PLATFORM_COLOR),
            Platform::new(2000.0, height - 200.0, 400.0, 40.0, PLATFORM_COLOR),
        ];

        World {
            player: Player::new(&config.player, assets.player),
            background: ParallaxBackground::new(
                &assets.background_layers,
                &config.world.parallax_speeds,
                world_width,
                height,
            ),
            ground: Platform::new(
                GROUND_INSET,
                height - GROUND_HEIGHT,
                world_width - GROUND_INSET * 2.0,
                GROUND_HEIGHT,
                Color::TRANSPARENT,
            ),
            platforms,
            camera: Camera::new(screen, 0.0, world_width),
            drifting_layers: config.world.drifting_layers,
            show_hitboxes: config.show_hitboxes,
            unsimulated_time: 0.0,
        }
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[cfg(test)]
    pub fn background(&self) -> &ParallaxBackground {
        &self.background
    }

    #[cfg(test)]
    pub fn ground(&self) -> &Platform {
        &self.ground
    }

    fn step_physics(&mut self, buttons: u32, audio: &mut SoundManager) {
        let was_on_ground = self.player.on_ground();
        if self.player.update_movement(PHYSICS_STEP, buttons) {
            audio.play_sfx(assets::SFX_JUMP);
        }

        self.player.set_on_ground(false);
        collision::resolve_all(&mut self.player, &self.ground, &self.platforms);
        if !was_on_ground && self.player.on_ground() {
            audio.play_sfx(assets::SFX_LANDING);
        }
    }

    pub fn update(&mut self, d_t: f32, buttons: u32, audio: &mut SoundManager) {
        self.unsimulated_time += d_t;
        while self.unsimulated_time >= PHYSICS_STEP {
            self.step_physics(buttons, audio);
            self.unsimulated_time -= PHYSICS_STEP;
        }

        self.player.update_animation(d_t);

        let layer_count = self.background.layer_count();
        self.background.update(d_t, -1.0, 0..self.drifting_layers);
        let direction = if buttons & input::CONTROL_LEFT != 0 {
            -1.0
        } else if buttons & input::CONTROL_RIGHT != 0 {
            1.0
        } else {
            0.0
        };

        if direction != 0.0 {
            self.background
                .update(d_t, direction, self.drifting_layers..layer_count);
        }

        self.camera.follow(self.player.position().0);
    }

    pub fn draw(&self, context: &mut gfx::RenderContext) {
        self.camera.apply(context);
        self.background.draw(context, &self.camera.visible_rect());
        self.ground.draw(context);
        for platform in self.platforms.iter() {
            platform.draw(context);
        }

        self.player.draw(context);

        if self.show_hitboxes {
            context.fill_rect(&self.player.bounding_box(), HITBOX_COLOR);
            for platform in std::iter::once(&self.ground).chain(self.platforms.iter()) {
                context.fill_rect(platform.bounds(), PLATFORM_HITBOX_COLOR);
            }
        }
    }
}
