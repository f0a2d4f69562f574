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

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;

pub const CONTROL_LEFT: u32 = 0x1;
pub const CONTROL_RIGHT: u32 = 0x2;
pub const CONTROL_JUMP: u32 = 0x4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),

    // Left mouse button only, in window coordinates.
    MouseDown { x: f32, y: f32 },
    MouseUp { x: f32, y: f32 },
    MouseMove { x: f32, y: f32 },
}

// Snapshot of the controls for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub buttons: u32,
    pub mouse: (f32, f32),
    pub mouse_down: bool,

    // The left button went down at some point during this frame.
    pub clicked: bool,
}

impl InputState {
    pub fn is_held(&self, control: u32) -> bool {
        self.buttons & control != 0
    }
}

pub fn get_key_mask(key: Scancode) -> u32 {
    match key {
        Scancode::A | Scancode::Left => CONTROL_LEFT,
        Scancode::D | Scancode::Right => CONTROL_RIGHT,
        Scancode::Space | Scancode::W | Scancode::Up => CONTROL_JUMP,
        _ => 0,
    }
}

pub fn buttons_from_keyboard(keys: &sdl2::keyboard::KeyboardState) -> u32 {
    keys.pressed_scancodes().fold(0, |mask, key| mask | get_key_mask(key))
}

pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match *event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => Some(InputEvent::KeyDown(keycode)),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(InputEvent::MouseDown {
            x: x as f32,
            y: y as f32,
        }),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(InputEvent::MouseUp {
            x: x as f32,
            y: y as f32,
        }),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::MouseMove {
            x: x as f32,
            y: y as f32,
        }),
        _ => None,
    }
}
