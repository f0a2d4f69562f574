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

use crate::gfx;
use crate::input::InputEvent;
use crate::util::{Color, Rect};

const LABEL_SIZE: u32 = 24;
const BAR_THICKNESS: f32 = 8.0;
const KNOB_RADIUS: f32 = 12.0;

const BAR_COLOR: Color = Color::rgba(80, 80, 80, 200);
const FILL_COLOR: Color = Color::rgba(160, 160, 160, 220);
const KNOB_COLOR: Color = Color::rgba(220, 220, 220, 230);

pub struct Button {
    bounds: Rect<f32>,
    fill: Color,
    label: String,
    texture: Option<gfx::Texture>,
    hover_texture: Option<gfx::Texture>,
    hovered: bool,
}

impl Button {
    pub fn new(size: (f32, f32), center: (f32, f32), fill: Color) -> Button {
        Button {
            bounds: Rect::centered(center.0, center.1, size.0, size.1),
            fill,
            label: String::new(),
            texture: None,
            hover_texture: None,
            hovered: false,
        }
    }

    pub fn with_label(mut self, label: &str) -> Button {
        self.label = label.to_string();
        self
    }

    pub fn with_textures(mut self, texture: Option<gfx::Texture>, hover: Option<gfx::Texture>) -> Button {
        self.texture = texture;
        self.hover_texture = hover;
        self
    }

    pub fn bounds(&self) -> &Rect<f32> {
        &self.bounds
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bounds.contains(x, y)
    }

    pub fn update_hover(&mut self, x: f32, y: f32) {
        self.hovered = self.contains(x, y);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    // Hover texture only replaces the normal one if it was loaded.
    pub fn current_texture(&self) -> Option<&gfx::Texture> {
        if self.hovered && self.hover_texture.is_some() {
            self.hover_texture.as_ref()
        } else {
            self.texture.as_ref()
        }
    }

    pub fn draw(&self, context: &mut gfx::RenderContext) {
        if let Some(texture) = self.current_texture() {
            context.draw_texture(texture, &self.bounds, &texture.full_rect(), false, Color::WHITE);
            return;
        }

        let fill = if self.hovered {
            Color::rgba(
                self.fill.r.saturating_add(40),
                self.fill.g.saturating_add(40),
                self.fill.b.saturating_add(40),
                self.fill.a,
            )
        } else {
            self.fill
        };

        context.fill_rect(&self.bounds, fill);
        if !self.label.is_empty() {
            let (text_w, text_h) = context.text_size(&self.label, LABEL_SIZE);
            let x = self.bounds.left + (self.bounds.width - text_w) / 2.0;
            let y = self.bounds.top + (self.bounds.height - text_h) / 2.0;
            context.draw_text(&self.label, (x, y), LABEL_SIZE, Color::WHITE);
        }
    }
}

// Horizontal slider with a draggable knob. Value is 0-100.
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    value: i32,
    dragging: bool,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, initial: i32) -> Slider {
        Slider {
            x,
            y,
            width,
            value: initial.clamp(0, 100),
            dragging: false,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(0, 100);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn fill_width(&self) -> f32 {
        self.width * self.value as f32 / 100.0
    }

    pub fn bar_bounds(&self) -> Rect<f32> {
        Rect::new(self.x, self.y - BAR_THICKNESS / 2.0, self.width, BAR_THICKNESS)
    }

    pub fn knob_center(&self) -> (f32, f32) {
        (self.x + self.fill_width(), self.y)
    }

    pub fn knob_bounds(&self) -> Rect<f32> {
        let (cx, cy) = self.knob_center();
        Rect::centered(cx, cy, KNOB_RADIUS * 2.0, KNOB_RADIUS * 2.0)
    }

    fn value_at(&self, mouse_x: f32) -> i32 {
        let rel = ((mouse_x - self.x) / self.width).clamp(0.0, 1.0);
        (rel * 100.0) as i32
    }

    // Returns true if the value changed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::MouseDown { x, y } => {
                if self.knob_bounds().contains(x, y) {
                    self.dragging = true;
                    false
                } else if self.bar_bounds().contains(x, y) {
                    self.set_value(self.value_at(x));
                    self.dragging = true;
                    true
                } else {
                    false
                }
            }
            InputEvent::MouseUp { .. } => {
                self.dragging = false;
                false
            }
            InputEvent::MouseMove { x, .. } if self.dragging => {
                self.set_value(self.value_at(x));
                true
            }
            _ => false,
        }
    }

    pub fn draw(&self, context: &mut gfx::RenderContext) {
        let bar = self.bar_bounds();
        context.fill_rect(&bar, BAR_COLOR);
        context.fill_rect(&Rect::new(bar.left, bar.top, self.fill_width(), bar.height), FILL_COLOR);
        context.fill_circle(self.knob_center(), KNOB_RADIUS, KNOB_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_contains() {
        let button = Button::new((300.0, 80.0), (500.0, 300.0), Color::rgb(120, 120, 120));
        assert_eq!(*button.bounds(), Rect::new(350.0, 260.0, 300.0, 80.0));
        assert!(button.contains(350.0, 260.0));
        assert!(button.contains(500.0, 300.0));
        assert!(!button.contains(650.0, 300.0));
        assert!(!button.contains(500.0, 250.0));
    }

    #[test]
    fn test_button_hover_without_textures() {
        let mut button = Button::new((300.0, 80.0), (500.0, 300.0), Color::rgb(120, 120, 120));
        button.update_hover(500.0, 300.0);
        assert!(button.is_hovered());
        assert!(button.current_texture().is_none());

        button.update_hover(0.0, 0.0);
        assert!(!button.is_hovered());
    }

    #[test]
    fn test_slider_initial_clamped() {
        assert_eq!(Slider::new(0.0, 0.0, 100.0, 150).value(), 100);
        assert_eq!(Slider::new(0.0, 0.0, 100.0, -1).value(), 0);
    }

    #[test]
    fn test_slider_geometry() {
        let slider = Slider::new(100.0, 200.0, 400.0, 50);
        assert_eq!(slider.fill_width(), 200.0);
        assert_eq!(slider.knob_center(), (300.0, 200.0));
        assert_eq!(slider.knob_bounds(), Rect::new(288.0, 188.0, 24.0, 24.0));
        assert_eq!(slider.bar_bounds(), Rect::new(100.0, 196.0, 400.0, 8.0));
    }

    #[test]
    fn test_slider_click_bar() {
        let mut slider = Slider::new(100.0, 200.0, 400.0, 50);
        assert!(slider.handle_event(&InputEvent::MouseDown { x: 400.0, y: 200.0 }));
        assert_eq!(slider.value(), 75);
        assert!(slider.is_dragging());

        // Dragging past either end clamps.
        assert!(slider.handle_event(&InputEvent::MouseMove { x: 0.0, y: 200.0 }));
        assert_eq!(slider.value(), 0);
        assert!(slider.handle_event(&InputEvent::MouseMove { x: 1000.0, y: 900.0 }));
        assert_eq!(slider.value(), 100);

        assert!(!slider.handle_event(&InputEvent::MouseUp { x: 1000.0, y: 900.0 }));
        assert!(!slider.is_dragging());
        assert!(!slider.handle_event(&InputEvent::MouseMove { x: 200.0, y: 200.0 }));
        assert_eq!(slider.value(), 100);
    }

    #[test]
    fn test_slider_drag_knob() {
        let mut slider = Slider::new(100.0, 200.0, 400.0, 50);

        // Grabbing the knob does not move it.
        assert!(!slider.handle_event(&InputEvent::MouseDown { x: 300.0, y: 205.0 }));
        assert_eq!(slider.value(), 50);
        assert!(slider.is_dragging());

        // Vertical position doesn't matter once dragging.
        assert!(slider.handle_event(&InputEvent::MouseMove { x: 200.0, y: 0.0 }));
        assert_eq!(slider.value(), 25);
    }

    #[test]
    fn test_slider_click_outside() {
        let mut slider = Slider::new(100.0, 200.0, 400.0, 50);
        assert!(!slider.handle_event(&InputEvent::MouseDown { x: 400.0, y: 300.0 }));
        assert!(!slider.is_dragging());
        assert!(!slider.handle_event(&InputEvent::MouseMove { x: 400.0, y: 200.0 }));
        assert_eq!(slider.value(), 50);
    }

    #[test]
    fn test_set_value() {
        let mut slider = Slider::new(0.0, 0.0, 100.0, 10);
        slider.set_value(150);
        assert_eq!(slider.value(), 100);
        slider.set_value(-5);
        assert_eq!(slider.value(), 0);
    }
}
