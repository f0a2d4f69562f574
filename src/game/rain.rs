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

use engine::gfx;
use engine::util::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DROP_RADIUS: f32 = 2.5;
const DROP_COLOR: Color = Color::rgba(173, 216, 230, 180);

// Drops drift left as they fall, so they spawn across a wider strip than
// the screen.
const SPAWN_MARGIN: i32 = 500;
const RESPAWN_Y: f32 = -10.0;
const MIN_SPEED: i32 = 300;
const SPEED_RANGE: i32 = 200;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainDrop {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

pub struct RainSystem {
    drops: Vec<RainDrop>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl RainSystem {
    pub fn new(count: usize, width: f32, height: f32) -> RainSystem {
        RainSystem::with_rng(count, width, height, StdRng::from_os_rng())
    }

    #[cfg(test)]
    pub fn with_seed(count: usize, width: f32, height: f32, seed: u64) -> RainSystem {
        RainSystem::with_rng(count, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, width: f32, height: f32, mut rng: StdRng) -> RainSystem {
        let spawn_width = width as i32 + SPAWN_MARGIN;
        let drops = (0..count)
            .map(|_| RainDrop {
                x: rng.random_range(0..spawn_width) as f32,
                y: rng.random_range(0..(height as i32).max(1)) as f32,
                speed: (MIN_SPEED + rng.random_range(0..SPEED_RANGE)) as f32,
            })
            .collect();

        RainSystem {
            drops,
            width,
            height,
            rng,
        }
    }

    #[cfg(test)]
    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    pub fn update(&mut self, d_t: f32) {
        let spawn_width = self.width as i32 + SPAWN_MARGIN;
        for drop in self.drops.iter_mut() {
            drop.x -= drop.speed / 2.0 * d_t;
            drop.y += drop.speed * d_t;
            if drop.y > self.height {
                drop.x = self.rng.random_range(0..spawn_width) as f32;
                drop.y = RESPAWN_Y;
            }
        }
    }

    pub fn draw(&self, context: &mut gfx::RenderContext) {
        for drop in self.drops.iter() {
            context.fill_circle((drop.x + DROP_RADIUS, drop.y + DROP_RADIUS), DROP_RADIUS, DROP_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_ranges() {
        let rain = RainSystem::with_seed(80, 1920.0, 1080.0, 7);
        assert_eq!(rain.drops().len(), 80);
        for drop in rain.drops() {
            assert!(drop.x >= 0.0 && drop.x < 2420.0);
            assert!(drop.y >= 0.0 && drop.y < 1080.0);
            assert!(drop.speed >= 300.0 && drop.speed < 500.0);
            assert_eq!(drop.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_falls_and_drifts_left() {
        let mut rain = RainSystem::with_seed(20, 1920.0, 1080.0, 1);
        let before: Vec<RainDrop> = rain.drops().to_vec();
        rain.update(0.01);
        for (old, new) in before.iter().zip(rain.drops()) {
            if old.y + old.speed * 0.01 > 1080.0 {
                continue;
            }
            assert!((new.y - (old.y + old.speed * 0.01)).abs() < 1e-3);
            assert!((new.x - (old.x - old.speed * 0.005)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_respawn_above_screen() {
        // Every drop falls at least 300 px in a second, past a 100 px screen.
        let mut rain = RainSystem::with_seed(10, 200.0, 100.0, 3);
        rain.update(1.0);
        for drop in rain.drops() {
            assert_eq!(drop.y, -10.0);
            assert!(drop.x >= 0.0 && drop.x < 700.0);
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = RainSystem::with_seed(5, 800.0, 600.0, 42);
        let b = RainSystem::with_seed(5, 800.0, 600.0, 42);
        assert_eq!(a.drops(), b.drops());
    }
}
