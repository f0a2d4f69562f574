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

use std::ops::{Add, Div, Sub};

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rect<T> {
    pub left: T,
    pub top: T,
    pub width: T,
    pub height: T,
}

impl<T: Add<Output = T> + PartialOrd<T> + Clone + Copy> Rect<T> {
    pub fn new(left: T, top: T, width: T, height: T) -> Rect<T> {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    // Edges that only touch are not considered overlapping.
    pub fn overlaps(&self, rect: &Rect<T>) -> bool {
        self.left < rect.right()
            && rect.left < self.right()
            && self.top < rect.bottom()
            && rect.top < self.bottom()
    }

    // Left and top edges are inside, right and bottom edges are not.
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    pub fn right(&self) -> T {
        self.left + self.width
    }

    pub fn bottom(&self) -> T {
        self.top + self.height
    }
}

impl<T> Rect<T>
where
    T: Add<Output = T> + Sub<Output = T> + Div<Output = T> + PartialOrd<T> + Copy + From<u8>,
{
    pub fn centered(center_x: T, center_y: T, width: T, height: T) -> Rect<T> {
        let two = T::from(2);
        Rect::new(center_x - width / two, center_y - height / two, width, height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    // Normalized components for the vertex buffer.
    pub fn to_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // +--------+--------+--------+
    // |   r1   |   r2   |   r3   |
    // +--------+--------+--------+
    // |   r4   |        |   r6   |
    // +--------+--------+--------+
    // |   r7   |   r8   |   r9   |
    // +--------+--------+--------+
    #[test]
    fn test_overlap() {
        let r1 = Rect::<f32>::new(0.0, 0.0, 10.0, 10.0);
        let r2 = Rect::<f32>::new(10.0, 0.0, 10.0, 10.0);
        let r3 = Rect::<f32>::new(20.0, 0.0, 10.0, 10.0);
        let r4 = Rect::<f32>::new(0.0, 10.0, 10.0, 10.0);
        let r6 = Rect::<f32>::new(20.0, 10.0, 10.0, 10.0);
        let r7 = Rect::<f32>::new(0.0, 20.0, 10.0, 10.0);
        let r8 = Rect::<f32>::new(10.0, 20.0, 10.0, 10.0);
        let r9 = Rect::<f32>::new(20.0, 20.0, 10.0, 10.0);

        let middle_large = Rect::<f32>::new(9.0, 9.0, 12.0, 12.0);
        for r in [r1, r2, r3, r4, r6, r7, r8, r9] {
            assert!(r.overlaps(&middle_large));
        }

        // Exactly fills the hole, so only touches the neighbours.
        let middle_exact = Rect::<f32>::new(10.0, 10.0, 10.0, 10.0);
        for r in [r1, r2, r3, r4, r6, r7, r8, r9] {
            assert!(!r.overlaps(&middle_exact));
        }
    }

    #[test]
    fn test_contains_edges() {
        let r = Rect::<f32>::new(350.0, 260.0, 300.0, 80.0);
        assert!(r.contains(350.0, 260.0));
        assert!(r.contains(649.9, 339.9));
        assert!(!r.contains(650.0, 300.0));
        assert!(!r.contains(500.0, 340.0));
        assert!(!r.contains(349.9, 300.0));
    }

    #[test]
    fn test_centered() {
        let r = Rect::<f32>::centered(500.0, 300.0, 300.0, 80.0);
        assert_eq!(r, Rect::new(350.0, 260.0, 300.0, 80.0));

        let r = Rect::<i32>::centered(10, 10, 4, 6);
        assert_eq!(r, Rect::new(8, 7, 4, 6));
    }

    #[test]
    fn test_bounds() {
        let r1 = Rect::<i32>::new(2, 3, 4, 5);
        assert_eq!(r1.right(), 6);
        assert_eq!(r1.bottom(), 8);
    }

    #[test]
    fn test_debug() {
        let r1 = Rect::<i32>::new(1, 2, 3, 4);
        assert_eq!(
            "Rect { left: 1, top: 2, width: 3, height: 4 }",
            format!("{:?}", r1)
        );
    }

    #[test]
    fn test_color() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::rgba(1, 2, 3, 1).is_transparent());
        assert_eq!(Color::WHITE.to_f32(), [1.0, 1.0, 1.0, 1.0]);
    }
}
