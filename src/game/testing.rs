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

// Audio device for tests. Records what the game asked for, ignoring volumes.

use engine::audio::{AudioDevice, SoundManager};
use engine::EngineError;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

pub type Calls = Rc<RefCell<Vec<String>>>;

struct RecordingDevice {
    calls: Calls,
    playing: bool,
}

impl AudioDevice for RecordingDevice {
    fn load_music(&mut self, _key: &str, _path: &Path) -> Result<(), EngineError> {
        Ok(())
    }

    fn load_effect(&mut self, _key: &str, _path: &Path) -> Result<(), EngineError> {
        Ok(())
    }

    fn play_music(&mut self, key: &str, _looped: bool, _volume: f32) {
        self.calls.borrow_mut().push(format!("music {}", key));
        self.playing = true;
    }

    fn stop_music(&mut self) {
        self.playing = false;
    }

    fn is_music_playing(&self) -> bool {
        self.playing
    }

    fn set_music_volume(&mut self, _volume: f32) {}

    fn set_effect_volume(&mut self, _volume: f32) {}

    fn play_effect(&mut self, key: &str, _volume: f32) {
        self.calls.borrow_mut().push(format!("sfx {}", key));
    }
}

pub fn recording_sound() -> (SoundManager, Calls) {
    let calls = Calls::default();
    let device = RecordingDevice {
        calls: calls.clone(),
        playing: false,
    };
    (SoundManager::new(Box::new(device)), calls)
}
