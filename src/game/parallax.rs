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
use std::ops::Range;

// Offsets are folded back once they pass this, before f32 loses precision.
const OFFSET_WRAP: f32 = 1_000_000.0;

struct Layer {
    texture: Option<gfx::Texture>,
    speed: f32,
    offset: f32,
}

// Each layer is a horizontally repeating texture that spans the whole
// world. Scrolling shifts where the texture is sampled, so layers with
// different speeds appear to be at different depths.
pub struct ParallaxBackground {
    layers: Vec<Layer>,
    width: f32,
    height: f32,
}

impl ParallaxBackground {
    pub fn new(textures: &[Option<gfx::Texture>], speeds: &[f32], width: f32, height: f32) -> ParallaxBackground {
        let layers = speeds
            .iter()
            .enumerate()
            .map(|(i, &speed)| Layer {
                texture: textures.get(i).copied().flatten(),
                speed,
                offset: 0.0,
            })
            .collect();

        ParallaxBackground {
            layers,
            width,
            height,
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    #[cfg(test)]
    pub fn offset(&self, layer: usize) -> Option<f32> {
        self.layers.get(layer).map(|layer| layer.offset)
    }

    pub fn update(&mut self, d_t: f32, direction: f32, layers: Range<usize>) {
        let end = layers.end.min(self.layers.len());
        let start = layers.start.min(end);
        for layer in self.layers[start..end].iter_mut() {
            layer.offset += layer.speed * d_t * direction;
            if layer.offset.abs() > OFFSET_WRAP {
                layer.offset %= OFFSET_WRAP;
            }
        }
    }

    // The part of the world under the visible rectangle, clipped to the
    // background's extent.
    pub fn visible_slice(&self, visible: &Rect<f32>) -> Option<Rect<f32>> {
        let left = visible.left.max(0.0);
        let right = visible.right().min(self.width);
        if right <= left {
            return None;
        }

        Some(Rect::new(left, 0.0, right - left, self.height))
    }

    pub fn draw(&self, context: &mut gfx::RenderContext, visible: &Rect<f32>) {
        let Some(dest) = self.visible_slice(visible) else {
            return;
        };

        for layer in self.layers.iter() {
            let Some(texture) = layer.texture.as_ref() else {
                continue;
            };

            let src = source_rect(layer.offset, texture.size(), &dest);
            context.draw_texture(texture, &dest, &src, false, Color::WHITE);
        }
    }
}

// Texels to sample for a slice of the world. The texture repeats, so the
// start is folded into the first tile to keep f32 precision far from the
// origin.
pub fn source_rect(offset: f32, texture_size: (f32, f32), dest: &Rect<f32>) -> Rect<f32> {
    let (tex_w, tex_h) = texture_size;
    let left = (offset.trunc() + dest.left).rem_euclid(tex_w);
    Rect::new(left, 0.0, dest.width, tex_h)
}
