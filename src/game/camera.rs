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
use engine::util::Rect;

// Follows the player horizontally, clamped so the view never shows past
// either end of the world. The vertical position is fixed.
pub struct Camera {
    center: (f32, f32),
    view_size: (f32, f32),
    world_left: f32,
    world_right: f32,
}

impl Camera {
    pub fn new(view_size: (f32, f32), world_left: f32, world_right: f32) -> Camera {
        Camera {
            center: (view_size.0 / 2.0, view_size.1 / 2.0),
            view_size,
            world_left,
            world_right,
        }
    }

    // If the world is narrower than the view the right edge wins.
    pub fn follow(&mut self, target_x: f32) {
        let half_width = self.view_size.0 / 2.0;
        let x = target_x
            .max(self.world_left + half_width)
            .min(self.world_right - half_width);
        self.center = (x, self.view_size.1 / 2.0);
    }

    #[cfg(test)]
    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    pub fn visible_rect(&self) -> Rect<f32> {
        Rect::centered(self.center.0, self.center.1, self.view_size.0, self.view_size.1)
    }

    pub fn apply(&self, context: &mut gfx::RenderContext) {
        let visible = self.visible_rect();
        context.set_offset(visible.left, visible.top);
    }
}
