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

use crate::error::EngineError;
use sdl2::mixer;
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_MUSIC_VOLUME: f32 = 60.0;
pub const DEFAULT_SFX_VOLUME: f32 = 80.0;

// Volumes are percentages (0-100).
pub trait AudioDevice {
    fn load_music(&mut self, key: &str, path: &Path) -> Result<(), EngineError>;
    fn load_effect(&mut self, key: &str, path: &Path) -> Result<(), EngineError>;
    fn play_music(&mut self, key: &str, looped: bool, volume: f32);
    fn stop_music(&mut self);
    fn is_music_playing(&self) -> bool;
    fn set_music_volume(&mut self, volume: f32);

    // Applies to loaded effects, including any that are playing.
    fn set_effect_volume(&mut self, volume: f32);
    fn play_effect(&mut self, key: &str, volume: f32);
}

fn to_mixer_volume(volume: f32) -> i32 {
    (volume.clamp(0.0, 100.0) / 100.0 * mixer::MAX_VOLUME as f32).round() as i32
}

// Each effect key owns a mixer channel, so replaying a key restarts only
// that key's sound. Reserved channels are never handed out by the mixer
// for other playback.
#[derive(Default)]
struct EffectChannels {
    assigned: HashMap<String, i32>,
}

impl EffectChannels {
    // Returns the key's channel and whether it was newly assigned.
    fn channel_for(&mut self, key: &str) -> (i32, bool) {
        if let Some(&channel) = self.assigned.get(key) {
            return (channel, false);
        }

        let channel = self.assigned.len() as i32;
        self.assigned.insert(key.to_string(), channel);
        (channel, true)
    }

    fn count(&self) -> i32 {
        self.assigned.len() as i32
    }
}

pub struct MixerDevice {
    _context: mixer::Sdl2MixerContext,
    music: HashMap<String, mixer::Music<'static>>,
    effects: HashMap<String, (mixer::Chunk, mixer::Channel)>,
    channels: EffectChannels,
}

impl MixerDevice {
    pub fn open() -> Result<MixerDevice, EngineError> {
        mixer::open_audio(44100, mixer::AUDIO_S16LSB, mixer::DEFAULT_CHANNELS, 1024)
            .map_err(EngineError::Audio)?;
        let context = mixer::init(mixer::InitFlag::MP3).map_err(EngineError::Audio)?;

        Ok(MixerDevice {
            _context: context,
            music: HashMap::new(),
            effects: HashMap::new(),
            channels: EffectChannels::default(),
        })
    }
}

impl AudioDevice for MixerDevice {
    fn load_music(&mut self, key: &str, path: &Path) -> Result<(), EngineError> {
        let music = mixer::Music::from_file(path).map_err(EngineError::Audio)?;
        self.music.insert(key.to_string(), music);
        Ok(())
    }

    fn load_effect(&mut self, key: &str, path: &Path) -> Result<(), EngineError> {
        let chunk = mixer::Chunk::from_file(path).map_err(EngineError::Audio)?;
        let (index, is_new) = self.channels.channel_for(key);
        let channel = mixer::Channel(index);
        if is_new {
            mixer::allocate_channels(self.channels.count());
            mixer::reserve_channels(self.channels.count());
        } else {
            // The old chunk is freed below; it must not be playing.
            channel.halt();
        }

        self.effects.insert(key.to_string(), (chunk, channel));
        Ok(())
    }

    fn play_music(&mut self, key: &str, looped: bool, volume: f32) {
        let Some(music) = self.music.get(key) else {
            return;
        };

        mixer::Music::set_volume(to_mixer_volume(volume));
        let loops = if looped { -1 } else { 1 };
        if let Err(msg) = music.play(loops) {
            log::warn!("Unable to play music {}: {}", key, msg);
        }
    }

    fn stop_music(&mut self) {
        mixer::Music::halt();
    }

    fn is_music_playing(&self) -> bool {
        mixer::Music::is_playing()
    }

    fn set_music_volume(&mut self, volume: f32) {
        mixer::Music::set_volume(to_mixer_volume(volume));
    }

    fn set_effect_volume(&mut self, volume: f32) {
        for (chunk, _) in self.effects.values_mut() {
            chunk.set_volume(to_mixer_volume(volume));
        }
    }

    fn play_effect(&mut self, key: &str, volume: f32) {
        let Some((chunk, channel)) = self.effects.get_mut(key) else {
            return;
        };

        chunk.set_volume(to_mixer_volume(volume));
        if let Err(msg) = channel.play(chunk, 0) {
            log::warn!("Unable to play effect {}: {}", key, msg);
        }
    }
}

// Stand-in when no audio device can be opened.
pub struct SilentDevice;

impl AudioDevice for SilentDevice {
    fn load_music(&mut self, _key: &str, _path: &Path) -> Result<(), EngineError> {
        Ok(())
    }

    fn load_effect(&mut self, _key: &str, _path: &Path) -> Result<(), EngineError> {
        Ok(())
    }

    fn play_music(&mut self, _key: &str, _looped: bool, _volume: f32) {}

    fn stop_music(&mut self) {}

    fn is_music_playing(&self) -> bool {
        false
    }

    fn set_music_volume(&mut self, _volume: f32) {}

    fn set_effect_volume(&mut self, _volume: f32) {}

    fn play_effect(&mut self, _key: &str, _volume: f32) {}
}

pub struct SoundManager {
    device: Box<dyn AudioDevice>,
    music_volume: f32,
    sfx_volume: f32,
    music_enabled: bool,
    sfx_enabled: bool,
    current_music: Option<String>,
}

impl SoundManager {
    pub fn new(device: Box<dyn AudioDevice>) -> SoundManager {
        SoundManager {
            device,
            music_volume: DEFAULT_MUSIC_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
            music_enabled: true,
            sfx_enabled: true,
            current_music: None,
        }
    }

    pub fn silent() -> SoundManager {
        SoundManager::new(Box::new(SilentDevice))
    }

    // Missing files are not fatal; the key just stays silent.
    pub fn load_music(&mut self, key: &str, path: &Path) {
        if let Err(e) = self.device.load_music(key, path) {
            log::warn!("Music {} not found (key: {}): {}", path.display(), key, e);
        }
    }

    pub fn load_effect(&mut self, key: &str, path: &Path) {
        if let Err(e) = self.device.load_effect(key, path) {
            log::warn!("SFX {} not found (key: {}): {}", path.display(), key, e);
        }
    }

    pub fn play_music(&mut self, key: &str, looped: bool) {
        if !self.music_enabled {
            return;
        }

        if self.current_music.as_deref() == Some(key) && self.device.is_music_playing() {
            return;
        }

        self.device.stop_music();
        self.device.play_music(key, looped, self.music_volume);
        self.current_music = Some(key.to_string());
    }

    pub fn stop_music(&mut self) {
        self.device.stop_music();
        self.current_music = None;
    }

    pub fn play_sfx(&mut self, key: &str) {
        if !self.sfx_enabled {
            return;
        }

        self.device.play_effect(key, self.sfx_volume);
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 100.0);
        self.device.set_music_volume(self.music_volume);
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 100.0);
        self.device.set_effect_volume(self.sfx_volume);
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.music_enabled = enabled;
        if !enabled {
            self.stop_music();
        }
    }

    pub fn set_sfx_enabled(&mut self, enabled: bool) {
        self.sfx_enabled = enabled;
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn sfx_volume(&self) -> f32 {
        self.sfx_volume
    }

    pub fn current_music(&self) -> Option<&str> {
        self.current_music.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    pub struct Recording {
        pub calls: Vec<String>,
        pub playing: bool,
    }

    // Logs every call so tests can check what reached the device.
    pub struct RecordingDevice(pub Rc<RefCell<Recording>>);

    impl AudioDevice for RecordingDevice {
        fn load_music(&mut self, key: &str, _path: &Path) -> Result<(), EngineError> {
            if key == "missing" {
                return Err(EngineError::Audio("no such file".to_string()));
            }
            Ok(())
        }

        fn load_effect(&mut self, _key: &str, _path: &Path) -> Result<(), EngineError> {
            Ok(())
        }

        fn play_music(&mut self, key: &str, _looped: bool, volume: f32) {
            let mut rec = self.0.borrow_mut();
            rec.calls.push(format!("music {} {}", key, volume));
            rec.playing = true;
        }

        fn stop_music(&mut self) {
            let mut rec = self.0.borrow_mut();
            rec.calls.push("stop".to_string());
            rec.playing = false;
        }

        fn is_music_playing(&self) -> bool {
            self.0.borrow().playing
        }

        fn set_music_volume(&mut self, volume: f32) {
            self.0.borrow_mut().calls.push(format!("volume {}", volume));
        }

        fn set_effect_volume(&mut self, volume: f32) {
            self.0.borrow_mut().calls.push(format!("sfx volume {}", volume));
        }

        fn play_effect(&mut self, key: &str, volume: f32) {
            self.0.borrow_mut().calls.push(format!("sfx {} {}", key, volume));
        }
    }

    fn recording_manager() -> (SoundManager, Rc<RefCell<Recording>>) {
        let rec = Rc::new(RefCell::new(Recording::default()));
        (SoundManager::new(Box::new(RecordingDevice(rec.clone()))), rec)
    }

    #[test]
    fn test_defaults() {
        let sound = SoundManager::silent();
        assert_eq!(sound.music_volume(), 60.0);
        assert_eq!(sound.sfx_volume(), 80.0);
        assert_eq!(sound.current_music(), None);
    }

    #[test]
    fn test_volume_clamped() {
        let (mut sound, rec) = recording_manager();
        sound.set_music_volume(150.0);
        assert_eq!(sound.music_volume(), 100.0);
        sound.set_sfx_volume(-3.0);
        assert_eq!(sound.sfx_volume(), 0.0);
        assert_eq!(rec.borrow().calls, vec!["volume 100", "sfx volume 0"]);
    }

    #[test]
    fn test_music_not_restarted() {
        let (mut sound, rec) = recording_manager();
        sound.play_music("menu", true);
        sound.play_music("menu", true);
        assert_eq!(rec.borrow().calls, vec!["stop", "music menu 60"]);
        assert_eq!(sound.current_music(), Some("menu"));
    }

    #[test]
    fn test_switch_music() {
        let (mut sound, rec) = recording_manager();
        sound.play_music("menu", true);
        sound.play_music("game", true);
        assert_eq!(
            rec.borrow().calls,
            vec!["stop", "music menu 60", "stop", "music game 60"]
        );
        assert_eq!(sound.current_music(), Some("game"));
    }

    #[test]
    fn test_music_disabled() {
        let (mut sound, rec) = recording_manager();
        sound.play_music("menu", true);
        sound.set_music_enabled(false);
        assert_eq!(sound.current_music(), None);
        assert!(!rec.borrow().playing);

        sound.play_music("menu", true);
        assert!(!rec.borrow().playing);
    }

    #[test]
    fn test_sfx() {
        let (mut sound, rec) = recording_manager();
        sound.set_sfx_volume(50.0);
        sound.play_sfx("jump");
        sound.set_sfx_enabled(false);
        sound.play_sfx("jump");
        assert_eq!(rec.borrow().calls, vec!["sfx volume 50", "sfx jump 50"]);
    }

    #[test]
    fn test_missing_asset_is_not_fatal() {
        let (mut sound, _rec) = recording_manager();
        sound.load_music("missing", Path::new("nowhere.mp3"));
        sound.load_effect("jump", Path::new("jump.wav"));
    }

    #[test]
    fn test_mixer_volume() {
        assert_eq!(to_mixer_volume(0.0), 0);
        assert_eq!(to_mixer_volume(100.0), mixer::MAX_VOLUME);
        assert_eq!(to_mixer_volume(250.0), mixer::MAX_VOLUME);
        assert_eq!(to_mixer_volume(50.0), mixer::MAX_VOLUME / 2);
    }

    #[test]
    fn test_effect_channel_per_key() {
        let mut channels = EffectChannels::default();
        assert_eq!(channels.channel_for("jump"), (0, true));
        assert_eq!(channels.channel_for("landing"), (1, true));

        // Reloading or replaying a key keeps its channel.
        assert_eq!(channels.channel_for("jump"), (0, false));
        assert_eq!(channels.channel_for("landing"), (1, false));
        assert_eq!(channels.count(), 2);
    }
}
