//! Completion cue playback.
//!
//! The cue plays on its own short-lived output so ambience ducking never
//! silences it. Playback is fire-and-forget: the caller only learns the
//! decoded cue length (when the codec exposes one) so the dispatcher can
//! derive the ambience restore delay.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::features::session::effects::CuePlayer;

/// Plays the completion cue from an audio file.
pub struct FileCue {
    path: Option<PathBuf>,
}

impl FileCue {
    /// Create a cue player for the given file.
    ///
    /// `None`, or a path that never decodes, degrades to a silent cue.
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl CuePlayer for FileCue {
    fn play(&mut self) -> Option<Duration> {
        let path = self.path.as_ref()?;

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("cannot open cue {}: {e}", path.display());
                return None;
            }
        };

        let decoder = match Decoder::new(BufReader::new(file)) {
            Ok(decoder) => decoder,
            Err(e) => {
                log::warn!("cannot decode cue {}: {e}", path.display());
                return None;
            }
        };

        let duration = decoder.total_duration();

        thread::Builder::new()
            .name("cue".to_string())
            .spawn(move || {
                let Ok((_stream, handle)) = OutputStream::try_default() else {
                    log::warn!("no audio output for completion cue");
                    return;
                };
                let Ok(sink) = Sink::try_new(&handle) else {
                    return;
                };
                sink.append(decoder);
                sink.sleep_until_end();
            })
            .ok()?;

        duration
    }
}
