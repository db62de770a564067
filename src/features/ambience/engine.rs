//! Low-level ambient audio engine.
//!
//! rodio's output types are not `Send`, so playback runs on a dedicated
//! audio thread driven by a command channel. The handle is cheaply
//! cloneable; every operation degrades to a no-op when no output device
//! is available or the thread has died.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use rodio::{Decoder, OutputStream, Sink, Source};

enum EngineCommand {
    Play(PathBuf),
    Pause,
    Resume,
    Stop,
    SetVolume(f32),
}

/// Handle to the ambient audio thread.
#[derive(Clone)]
pub struct AudioEngine {
    tx: Arc<Mutex<Option<Sender<EngineCommand>>>>,
    playing: Arc<AtomicBool>,
    volume: Arc<AtomicU8>,
}

impl AudioEngine {
    /// Create an engine; the audio thread spawns lazily on first use.
    #[must_use]
    pub fn new(volume: u8) -> Self {
        Self {
            tx: Arc::new(Mutex::new(None)),
            playing: Arc::new(AtomicBool::new(false)),
            volume: Arc::new(AtomicU8::new(volume.min(100))),
        }
    }

    fn sender(&self) -> Option<Sender<EngineCommand>> {
        let mut guard = match self.tx.lock() {
            Ok(guard) => guard,
            Err(e) => {
                log::warn!("audio engine lock poisoned: {e}");
                return None;
            }
        };

        if let Some(tx) = guard.as_ref() {
            return Some(tx.clone());
        }

        let (tx, rx) = mpsc::channel::<EngineCommand>();
        let spawned = thread::Builder::new()
            .name("ambience".to_string())
            .spawn(move || {
                // The stream must outlive the sink; both live only on
                // this thread.
                let mut _stream: Option<OutputStream> = None;
                let mut sink: Option<Sink> = None;

                while let Ok(cmd) = rx.recv() {
                    match cmd {
                        EngineCommand::Play(path) => {
                            if let Some(old) = sink.take() {
                                old.stop();
                            }
                            _stream = None;

                            match open_looping_source(&path) {
                                Ok(source) => match open_sink() {
                                    Ok((stream, new_sink)) => {
                                        new_sink.append(source);
                                        _stream = Some(stream);
                                        sink = Some(new_sink);
                                    }
                                    Err(e) => log::warn!("no audio output: {e}"),
                                },
                                Err(e) => {
                                    log::warn!("cannot play {}: {e}", path.display());
                                }
                            }
                        }
                        EngineCommand::Pause => {
                            if let Some(ref s) = sink {
                                s.pause();
                            }
                        }
                        EngineCommand::Resume => {
                            if let Some(ref s) = sink {
                                s.play();
                            }
                        }
                        EngineCommand::Stop => {
                            if let Some(old) = sink.take() {
                                old.stop();
                            }
                            _stream = None;
                        }
                        EngineCommand::SetVolume(v) => {
                            if let Some(ref s) = sink {
                                s.set_volume(v);
                            }
                        }
                    }
                }
            });

        if let Err(e) = spawned {
            log::warn!("failed to spawn audio thread: {e}");
            return None;
        }

        *guard = Some(tx.clone());
        Some(tx)
    }

    fn send(&self, cmd: EngineCommand) {
        if let Some(tx) = self.sender() {
            // A dead thread just drops the command.
            let _ = tx.send(cmd);
        }
    }

    /// Start playing a file from the beginning, looping.
    pub fn play(&self, path: PathBuf) {
        self.send(EngineCommand::Play(path));
        self.send(EngineCommand::SetVolume(self.gain()));
        self.playing.store(true, Ordering::SeqCst);
    }

    /// Pause playback, keeping the current track.
    pub fn pause(&self) {
        self.send(EngineCommand::Pause);
        self.playing.store(false, Ordering::SeqCst);
    }

    /// Resume a paused track.
    pub fn resume(&self) {
        self.send(EngineCommand::Resume);
        self.playing.store(true, Ordering::SeqCst);
    }

    /// Stop playback and drop the current track.
    pub fn stop(&self) {
        self.send(EngineCommand::Stop);
        self.playing.store(false, Ordering::SeqCst);
    }

    /// Set the volume (0-100) and apply it to the live sink.
    pub fn set_volume(&self, volume: u8) {
        self.volume.store(volume.min(100), Ordering::SeqCst);
        self.send(EngineCommand::SetVolume(self.gain()));
    }

    /// Attenuate the live sink to silence without touching the stored
    /// volume.
    pub fn attenuate(&self) {
        self.send(EngineCommand::SetVolume(0.0));
    }

    /// Reapply the stored volume to the live sink.
    pub fn reapply_volume(&self) {
        self.send(EngineCommand::SetVolume(self.gain()));
    }

    /// Current volume, 0-100.
    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume.load(Ordering::SeqCst)
    }

    /// Whether playback is currently requested.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn gain(&self) -> f32 {
        f32::from(self.volume()) / 100.0
    }
}

fn open_sink() -> Result<(OutputStream, Sink), String> {
    let (stream, handle) =
        OutputStream::try_default().map_err(|e| format!("failed to open output stream: {e}"))?;
    let sink = Sink::try_new(&handle).map_err(|e| format!("failed to create sink: {e}"))?;
    Ok((stream, sink))
}

fn open_looping_source(
    path: &std::path::Path,
) -> Result<impl Source<Item = i16> + Send + 'static, String> {
    let file = File::open(path).map_err(|e| format!("open failed: {e}"))?;
    let decoder =
        Decoder::new(BufReader::new(file)).map_err(|e| format!("decode failed: {e}"))?;
    Ok(decoder.repeat_infinite())
}
