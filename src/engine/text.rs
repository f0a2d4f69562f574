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

//
// Printable ASCII is rasterized once from a TrueType font into a coverage
// atlas. Text of any size is drawn by scaling quads cut from that atlas.
//

use crate::error::EngineError;
use crate::util::Rect;
use ab_glyph::{Font, FontVec, Glyph, PxScale, ScaleFont};
use std::collections::HashMap;

pub const ATLAS_PIXEL_SIZE: f32 = 48.0;
const ATLAS_WIDTH: u32 = 512;

// Empty texels around each glyph so linear filtering doesn't bleed.
const PADDING: u32 = 1;
const FALLBACK_CHAR: char = '?';

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphInfo {
    // Texels in the atlas. Zero sized for blank glyphs like space.
    pub src: Rect<f32>,

    // Top left of the bitmap relative to the pen, which sits at the top
    // of the line.
    pub bearing: (f32, f32),
    pub advance: f32,
}

// Places rectangles left to right in rows, starting a new row when one
// doesn't fit.
struct ShelfPacker {
    width: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
}

impl ShelfPacker {
    fn new(width: u32) -> ShelfPacker {
        ShelfPacker {
            width,
            cursor_x: PADDING,
            cursor_y: PADDING,
            row_height: 0,
        }
    }

    fn place(&mut self, width: u32, height: u32) -> (u32, u32) {
        if self.cursor_x + width + PADDING > self.width {
            self.cursor_x = PADDING;
            self.cursor_y += self.row_height + PADDING;
            self.row_height = 0;
        }

        let pos = (self.cursor_x, self.cursor_y);
        self.cursor_x += width + PADDING;
        self.row_height = self.row_height.max(height);
        pos
    }

    fn height(&self) -> u32 {
        self.cursor_y + self.row_height + PADDING
    }
}

pub struct FontAtlas {
    glyphs: HashMap<char, GlyphInfo>,
    pixel_size: f32,
    line_height: f32,
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl FontAtlas {
    pub fn from_bytes(bytes: Vec<u8>, pixel_size: f32) -> Result<FontAtlas, EngineError> {
        let font = FontVec::try_from_vec(bytes)?;
        let scale = PxScale::from(pixel_size);
        let scaled = font.as_scaled(scale);
        let ascent = scaled.ascent();

        let mut packer = ShelfPacker::new(ATLAS_WIDTH);
        let mut glyphs = HashMap::new();
        let mut bitmaps = Vec::new();
        for ch in (b' '..=b'~').map(char::from) {
            let id = font.glyph_id(ch);
            let advance = scaled.h_advance(id);
            let glyph = Glyph {
                id,
                scale,
                position: ab_glyph::point(0.0, ascent),
            };

            let Some(outline) = font.outline_glyph(glyph) else {
                glyphs.insert(
                    ch,
                    GlyphInfo {
                        src: Rect::default(),
                        bearing: (0.0, 0.0),
                        advance,
                    },
                );
                continue;
            };

            let bounds = outline.px_bounds();
            let w = (bounds.width().ceil() as u32).clamp(1, ATLAS_WIDTH - PADDING * 2);
            let h = (bounds.height().ceil() as u32).max(1);
            let (x, y) = packer.place(w, h);
            let mut pixels = vec![0u8; (w * h) as usize];
            outline.draw(|gx, gy, c| {
                if gx < w && gy < h {
                    pixels[(gy * w + gx) as usize] = (c.clamp(0.0, 1.0) * 255.0) as u8;
                }
            });

            bitmaps.push((x, y, w, h, pixels));
            glyphs.insert(
                ch,
                GlyphInfo {
                    src: Rect::new(x as f32, y as f32, w as f32, h as f32),
                    bearing: (bounds.min.x, bounds.min.y),
                    advance,
                },
            );
        }

        let height = packer.height();
        let mut coverage = vec![0u8; (ATLAS_WIDTH * height) as usize];
        for (x, y, w, h, pixels) in bitmaps {
            for row in 0..h {
                let dest = ((y + row) * ATLAS_WIDTH + x) as usize;
                let src = (row * w) as usize;
                coverage[dest..dest + w as usize].copy_from_slice(&pixels[src..src + w as usize]);
            }
        }

        Ok(FontAtlas {
            glyphs,
            pixel_size,
            line_height: scaled.height(),
            width: ATLAS_WIDTH,
            height,
            coverage,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // White texels with the glyph coverage as alpha, so the draw color
    // tints the text.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.coverage.iter().flat_map(|&a| [255, 255, 255, a]).collect()
    }

    // Characters outside the atlas are drawn as '?'.
    fn glyph(&self, ch: char) -> Option<&GlyphInfo> {
        self.glyphs.get(&ch).or_else(|| self.glyphs.get(&FALLBACK_CHAR))
    }

    // (destination, atlas source) pairs for text whose top left is at
    // origin.
    pub fn layout(&self, text: &str, origin: (f32, f32), char_size: f32) -> Vec<(Rect<f32>, Rect<f32>)> {
        let ratio = char_size / self.pixel_size;
        let mut pen_x = origin.0;
        let mut quads = Vec::new();
        for ch in text.chars() {
            let Some(glyph) = self.glyph(ch) else {
                continue;
            };

            if glyph.src.width > 0.0 {
                let dest = Rect::new(
                    pen_x + glyph.bearing.0 * ratio,
                    origin.1 + glyph.bearing.1 * ratio,
                    glyph.src.width * ratio,
                    glyph.src.height * ratio,
                );
                quads.push((dest, glyph.src));
            }

            pen_x += glyph.advance * ratio;
        }

        quads
    }

    pub fn text_size(&self, text: &str, char_size: f32) -> (f32, f32) {
        let ratio = char_size / self.pixel_size;
        let width: f32 = text
            .chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|glyph| glyph.advance)
            .sum();
        (width * ratio, self.line_height * ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two glyphs at a 10 px base size: a 4x6 'A' and a blank space.
    fn atlas() -> FontAtlas {
        let mut glyphs = HashMap::new();
        glyphs.insert(
            'A',
            GlyphInfo {
                src: Rect::new(1.0, 1.0, 4.0, 6.0),
                bearing: (0.5, 2.0),
                advance: 5.0,
            },
        );
        glyphs.insert(
            ' ',
            GlyphInfo {
                src: Rect::default(),
                bearing: (0.0, 0.0),
                advance: 3.0,
            },
        );
        glyphs.insert(
            '?',
            GlyphInfo {
                src: Rect::new(6.0, 1.0, 3.0, 6.0),
                bearing: (0.0, 2.0),
                advance: 4.0,
            },
        );

        FontAtlas {
            glyphs,
            pixel_size: 10.0,
            line_height: 12.0,
            width: 16,
            height: 8,
            coverage: vec![0; 16 * 8],
        }
    }

    #[test]
    fn test_layout_scales_from_atlas_size() {
        let quads = atlas().layout("A A", (100.0, 50.0), 20.0);
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].0, Rect::new(101.0, 54.0, 8.0, 12.0));
        assert_eq!(quads[0].1, Rect::new(1.0, 1.0, 4.0, 6.0));

        // Space draws nothing but still advances.
        assert_eq!(quads[1].0.left, 100.0 + (5.0 + 3.0) * 2.0 + 1.0);
    }

    #[test]
    fn test_unknown_char_uses_fallback() {
        let quads = atlas().layout("é", (0.0, 0.0), 10.0);
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].1, Rect::new(6.0, 1.0, 3.0, 6.0));
    }

    #[test]
    fn test_text_size() {
        assert_eq!(atlas().text_size("A A", 20.0), (26.0, 24.0));
        assert_eq!(atlas().text_size("", 20.0), (0.0, 24.0));
    }

    #[test]
    fn test_rgba_pixels_use_coverage_as_alpha() {
        let mut atlas = atlas();
        atlas.coverage[3] = 200;
        let rgba = atlas.rgba_pixels();
        assert_eq!(rgba.len(), 16 * 8 * 4);
        assert_eq!(&rgba[12..16], &[255, 255, 255, 200]);
        assert_eq!(&rgba[0..4], &[255, 255, 255, 0]);
    }

    #[test]
    fn test_packer_wraps_rows() {
        let mut packer = ShelfPacker::new(20);
        assert_eq!(packer.place(8, 5), (1, 1));
        assert_eq!(packer.place(8, 7), (10, 1));
        assert_eq!(packer.place(8, 3), (1, 9));
        assert_eq!(packer.height(), 13);
    }

    #[test]
    fn test_invalid_font_data() {
        let result = FontAtlas::from_bytes(vec![0, 1, 2, 3], ATLAS_PIXEL_SIZE);
        assert!(matches!(result, Err(EngineError::Font(_))));
    }
}
