//! Audio cue playback
//!
//! The simulation only names cues. `AudioManager` gates them on volume and
//! on whether the cue's sound file exists. A cue with no sound file is a
//! silent no-op.
//!
//! Sound files are decoded and played through rodio when the `sound`
//! feature is enabled. Without it (the default, so no system audio headers
//! are needed) the output is a stub and cues are only logged.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use self::output::Output;

use crate::assets::AssetLoader;
use crate::settings::Settings;
use crate::sim::{Cue, GameEvent};

/// Fire-and-forget cue output
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
    fn stop(&mut self, cue: Cue);
}

/// Sound file backing a cue
pub fn cue_file(cue: Cue) -> &'static str {
    match cue {
        Cue::Defend => "sounds/item.wav",
        Cue::Collect => "sounds/coin.wav",
        Cue::LifeLost => "sounds/life.wav",
        Cue::GameOver => "sounds/gameover.wav",
        Cue::Victory => "sounds/victory.wav",
    }
}

#[cfg(feature = "sound")]
mod output {
    use std::fmt;
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    struct Device {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    /// rodio output; a missing device leaves it silent
    #[derive(Default)]
    pub struct Output {
        device: Option<Device>,
        /// Sink kept for the cue that can be stopped
        held: Option<Sink>,
    }

    impl fmt::Debug for Output {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Output")
                .field("device", &self.device.is_some())
                .field("held", &self.held.is_some())
                .finish()
        }
    }

    impl Output {
        pub fn open() -> Self {
            match OutputStream::try_default() {
                Ok((stream, handle)) => Self {
                    device: Some(Device {
                        _stream: stream,
                        handle,
                    }),
                    held: None,
                },
                Err(e) => {
                    log::warn!("No audio device ({}), sound disabled", e);
                    Self::default()
                }
            }
        }

        pub fn play(&mut self, path: &Path, volume: f32, hold: bool) {
            let Some(device) = &self.device else {
                return;
            };
            let source = match File::open(path).map(BufReader::new) {
                Ok(reader) => match Decoder::new(reader) {
                    Ok(source) => source,
                    Err(e) => {
                        log::warn!("Cannot decode {}: {}", path.display(), e);
                        return;
                    }
                },
                Err(e) => {
                    log::warn!("Cannot open {}: {}", path.display(), e);
                    return;
                }
            };
            let Ok(sink) = Sink::try_new(&device.handle) else {
                return;
            };
            sink.set_volume(volume);
            sink.append(source);
            if hold {
                if let Some(previous) = self.held.replace(sink) {
                    previous.stop();
                }
            } else {
                sink.detach();
            }
        }

        pub fn stop(&mut self) {
            if let Some(sink) = self.held.take() {
                sink.stop();
            }
        }
    }
}

#[cfg(not(feature = "sound"))]
mod output {
    use std::path::Path;

    /// Silent output used when built without the `sound` feature
    #[derive(Debug, Default)]
    pub struct Output;

    impl Output {
        pub fn open() -> Self {
            Self
        }

        pub fn play(&mut self, _path: &Path, _volume: f32, _hold: bool) {}

        pub fn stop(&mut self) {}
    }
}

/// Audio manager for the game
#[derive(Debug, Default)]
pub struct AudioManager {
    /// Resolved sound file per cue
    available: HashMap<Cue, PathBuf>,
    /// Long-running cues currently sounding
    playing: HashSet<Cue>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    output: Output,
}

impl AudioManager {
    /// Resolve every cue's sound file; missing files disable that cue
    pub fn new(loader: &mut dyn AssetLoader, settings: &Settings) -> Self {
        let available: HashMap<Cue, PathBuf> = Cue::ALL
            .into_iter()
            .filter_map(|cue| loader.load(cue_file(cue)).map(|handle| (cue, handle.path)))
            .collect();
        if available.len() < Cue::ALL.len() {
            log::warn!(
                "{} of {} sound cues missing - those will be silent",
                Cue::ALL.len() - available.len(),
                Cue::ALL.len()
            );
        }
        let mut manager = Self {
            available,
            output: Output::open(),
            ..Default::default()
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn is_playing(&self, cue: Cue) -> bool {
        self.playing.contains(&cue)
    }

    /// Route this frame's cue events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::PlayCue(cue) => self.play(*cue),
                GameEvent::StopCue(cue) => self.stop(*cue),
                _ => {}
            }
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, cue: Cue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(path) = self.available.get(&cue) else {
            return;
        };
        log::debug!("Cue {:?} ({}) at volume {:.2}", cue, path.display(), vol);
        // Victory music runs until the end screen is left
        let hold = cue == Cue::Victory;
        self.output.play(path, vol, hold);
        if hold {
            self.playing.insert(cue);
        }
    }

    fn stop(&mut self, cue: Cue) {
        if self.playing.remove(&cue) {
            self.output.stop();
            log::debug!("Cue {:?} stopped", cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetHandle;

    /// Loader that only knows a fixed set of names
    struct Only(Vec<&'static str>);

    impl AssetLoader for Only {
        fn load(&mut self, name: &str) -> Option<AssetHandle> {
            self.0.iter().any(|n| *n == name).then(|| AssetHandle {
                id: 1,
                path: name.into(),
            })
        }
    }

    #[test]
    fn test_missing_cue_is_silent() {
        let mut loader = Only(vec![cue_file(Cue::Victory)]);
        let mut audio = AudioManager::new(&mut loader, &Settings::default());
        audio.play(Cue::GameOver);
        assert!(!audio.is_playing(Cue::GameOver));

        audio.handle_events(&[GameEvent::PlayCue(Cue::Victory)]);
        assert!(audio.is_playing(Cue::Victory));
        audio.handle_events(&[GameEvent::StopCue(Cue::Victory)]);
        assert!(!audio.is_playing(Cue::Victory));
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut loader = Only(Cue::ALL.iter().map(|c| cue_file(*c)).collect());
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut audio = AudioManager::new(&mut loader, &settings);
        audio.play(Cue::Victory);
        assert!(!audio.is_playing(Cue::Victory));
    }

    #[test]
    fn test_cues_keep_the_loader_path() {
        let mut loader = Only(vec![cue_file(Cue::Collect), cue_file(Cue::Victory)]);
        let mut audio = AudioManager::new(&mut loader, &Settings::default());
        assert_eq!(audio.available.len(), 2);
        assert_eq!(
            audio.available.get(&Cue::Collect).map(|p| p.as_path()),
            Some(std::path::Path::new("sounds/coin.wav"))
        );

        // Short cues are not tracked; a second Victory replaces the first
        audio.play(Cue::Collect);
        assert!(!audio.is_playing(Cue::Collect));
        audio.play(Cue::Victory);
        audio.play(Cue::Victory);
        assert!(audio.is_playing(Cue::Victory));
        audio.stop(Cue::Victory);
        audio.stop(Cue::Victory);
        assert!(!audio.is_playing(Cue::Victory));
    }
}
