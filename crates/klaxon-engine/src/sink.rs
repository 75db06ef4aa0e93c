//! Collaborator seams: asset store, audio sink, notifier.
//!
//! The engine is headless; everything that touches the host runtime sits
//! behind these traits. Failures from the sink or notifier are reported,
//! logged by the caller, and swallowed — a bad speaker must never stop
//! hazard evaluation.

use thiserror::Error;

use klaxon_core::enums::WarningCategory;
use klaxon_core::types::ClipHandle;
use klaxon_synth::tone::ToneBuffer;

/// The two output channels. Never conflated: the brake loop owns its
/// channel exclusively so one-shot playback can never cut it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioChannel {
    /// Voice clips, recorded beeps, and synthesized one-shot patterns.
    OneShot,
    /// Reserved for the continuous brake tone.
    Brake,
}

/// Audio output failure. Expected occasionally; never fatal.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("unknown clip handle {0:?}")]
    UnknownClip(ClipHandle),
    #[error("output device error: {0}")]
    Device(String),
}

/// Notification display failure. Purely observational.
#[derive(Debug, Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

/// Pre-loaded audio assets, queried once at engine construction.
///
/// Absence of a clip is a normal, expected outcome — the dispatcher falls
/// back to synthesis, never treats it as an error.
pub trait AssetStore {
    /// The category's recorded beep clip, if one was loaded.
    fn beep(&self, category: WarningCategory) -> Option<ClipHandle>;

    /// All recorded voice clips for the category (possibly empty).
    fn voices(&self, category: WarningCategory) -> Vec<ClipHandle>;
}

/// Audio output device.
pub trait AudioSink {
    /// Output sample rate, if the device reports one. `None` means the
    /// engine synthesizes at 44100 Hz.
    fn sample_rate(&self) -> Option<u32>;

    /// Fire-and-forget playback of a pre-loaded clip.
    fn play_clip(&mut self, channel: AudioChannel, clip: ClipHandle) -> Result<(), SinkError>;

    /// Fire-and-forget playback of a synthesized buffer.
    fn play_buffer(&mut self, channel: AudioChannel, buffer: &ToneBuffer) -> Result<(), SinkError>;

    /// Start looping a buffer on a channel until `stop` is called.
    fn start_loop(&mut self, channel: AudioChannel, buffer: ToneBuffer) -> Result<(), SinkError>;

    /// Halt everything on a channel. Must be a no-op when already silent.
    fn stop(&mut self, channel: AudioChannel);
}

/// On-screen text notifications for triggered warnings.
pub trait Notifier {
    fn notify(&mut self, label: &str, duration_secs: f64) -> Result<(), NotifyError>;
}

/// Asset store with no clips at all: every category synthesizes.
pub struct NoAssets;

impl AssetStore for NoAssets {
    fn beep(&self, _category: WarningCategory) -> Option<ClipHandle> {
        None
    }

    fn voices(&self, _category: WarningCategory) -> Vec<ClipHandle> {
        Vec::new()
    }
}

/// Notifier that drops every message (for hosts without a display).
pub struct NoNotifier;

impl Notifier for NoNotifier {
    fn notify(&mut self, _label: &str, _duration_secs: f64) -> Result<(), NotifyError> {
        Ok(())
    }
}
