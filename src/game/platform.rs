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
use engine::util::{Color, Rect};

pub const PLATFORM_COLOR: Color = Color::rgb(50, 50, 50);

pub struct Platform {
    bounds: Rect<f32>,
    color: Color,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Platform {
        Platform {
            bounds: Rect::new(x, y, width, height),
            color,
        }
    }

    pub fn bounds(&self) -> &Rect<f32> {
        &self.bounds
    }

    pub fn draw(&self, context: &mut gfx::RenderContext) {
        // The ground is invisible; the background art shows it.
        if !self.color.is_transparent() {
            context.fill_rect(&self.bounds, self.color);
        }
    }
}
