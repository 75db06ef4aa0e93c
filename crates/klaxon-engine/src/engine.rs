//! The alerting engine — owns all cross-tick state.
//!
//! `AlertEngine` caches the asset census at construction, evaluates each
//! telemetry snapshot, gates triggers through the debounce clock, and
//! drives the audio sink and notifier. One instance per process,
//! tick-driven, single-threaded; the only externally shared state is the
//! global enable flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use klaxon_core::constants::{DEFAULT_SAMPLE_RATE, NOTIFY_PULL_UP_SECS, NOTIFY_SECS, VOICE_STOP_SECS};
use klaxon_core::enums::{WarningCategory, WarningLevel};
use klaxon_core::state::TickReport;
use klaxon_core::types::{ClipHandle, TelemetrySnapshot};
use klaxon_synth::patterns::{brake_loop, pattern_for};

use crate::debounce::DebounceClock;
use crate::evaluate::evaluate;
use crate::sink::{AssetStore, AudioChannel, AudioSink, Notifier};

/// Configuration for constructing an engine.
pub struct EngineConfig {
    /// RNG seed for voice-clip selection. Same seed = same clip sequence.
    pub seed: u64,
    /// Initial state of the global audio enable flag.
    pub enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enabled: true,
        }
    }
}

/// Cached audio assets for one category.
#[derive(Debug, Clone, Default)]
struct CategorySounds {
    beep: Option<ClipHandle>,
    voices: Vec<ClipHandle>,
}

/// The alerting engine. Owns the debounce clock, brake-tone state, and
/// the audio/notification collaborators.
pub struct AlertEngine<S: AudioSink, N: Notifier> {
    sink: S,
    notifier: N,
    sounds: [CategorySounds; WarningCategory::COUNT],
    clock: DebounceClock,
    rng: ChaCha8Rng,
    enabled: Arc<AtomicBool>,
    sample_rate: u32,
    /// Whether the continuous brake tone currently owns its channel.
    brake_playing: bool,
    /// Deferred one-shot stop for voice playback (absolute deadline).
    voice_stop_deadline: Option<f64>,
    /// Set once both channels have been silenced after a disable.
    silenced: bool,
}

impl<S: AudioSink, N: Notifier> AlertEngine<S, N> {
    /// Build an engine, querying the asset store once per category and
    /// caching the results for the engine's lifetime.
    pub fn new<A: AssetStore>(config: EngineConfig, assets: &A, sink: S, notifier: N) -> Self {
        let sample_rate = sink.sample_rate().unwrap_or(DEFAULT_SAMPLE_RATE);
        let sounds = WarningCategory::ALL.map(|category| CategorySounds {
            beep: assets.beep(category),
            voices: assets.voices(category),
        });

        let beep_count = sounds.iter().filter(|s| s.beep.is_some()).count();
        let voice_count: usize = sounds.iter().map(|s| s.voices.len()).sum();
        info!(
            beep_count,
            voice_count, sample_rate, "alert engine ready; missing clips will be synthesized"
        );

        Self {
            sink,
            notifier,
            sounds,
            clock: DebounceClock::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            enabled: Arc::new(AtomicBool::new(config.enabled)),
            sample_rate,
            brake_playing: false,
            voice_stop_deadline: None,
            silenced: false,
        }
    }

    /// Shared handle to the global audio enable flag, for hosts that flip
    /// it from outside the tick thread.
    pub fn enabled_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Read-only access to the sink (used by hosts and tests).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Read-only access to the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Advance one tick. `now` is seconds on a monotonic clock shared by
    /// all categories; `telemetry` is `None` when the host has no vehicle
    /// this tick, in which case nothing is evaluated and nothing fires.
    pub fn tick(&mut self, telemetry: Option<&TelemetrySnapshot>, now: f64) -> TickReport {
        if !self.enabled.load(Ordering::Relaxed) {
            self.silence();
            // Keep evaluating for observers, but dispatch nothing. The
            // debounce clock is untouched, so re-enabling resumes cleanly.
            return TickReport {
                state: telemetry.map(evaluate),
                triggered: Vec::new(),
            };
        }
        self.silenced = false;

        // Honor the deferred voice stop before anything else this tick.
        if let Some(deadline) = self.voice_stop_deadline {
            if now >= deadline {
                self.sink.stop(AudioChannel::OneShot);
                self.voice_stop_deadline = None;
            }
        }

        let Some(snapshot) = telemetry else {
            return TickReport::default();
        };

        let state = evaluate(snapshot);
        let mut triggered = Vec::new();

        for category in WarningCategory::ALL {
            if category == WarningCategory::Brake {
                if self.update_brake(state.is_active(category), now) {
                    triggered.push(category);
                }
                continue;
            }

            let level = state.level(category);
            if self.clock.should_trigger(category, level.is_active(), now) {
                self.dispatch(category, level, now);
                triggered.push(category);
            }
        }

        TickReport {
            state: Some(state),
            triggered,
        }
    }

    /// Stop everything and drop pending deferred actions. Safe to call
    /// more than once; after this the engine may still be ticked.
    pub fn shutdown(&mut self) {
        if self.brake_playing {
            self.sink.stop(AudioChannel::Brake);
            self.brake_playing = false;
        }
        self.sink.stop(AudioChannel::OneShot);
        self.voice_stop_deadline = None;
        debug!("alert engine shut down");
    }

    /// One-shot dispatch for a category whose debounce gate just opened:
    /// recorded beep clip if cached, else the synthesized pattern, then
    /// the on-screen label, then a random voice clip if any exist.
    fn dispatch(&mut self, category: WarningCategory, level: WarningLevel, now: f64) {
        // Sustained (solid) gee gets only the plain slow beep — no clip,
        // no voice. Blinking gee takes the full path below.
        if category == WarningCategory::Gee && level == WarningLevel::Solid {
            let buffer = pattern_for(self.sample_rate, category, level);
            if let Err(err) = self.sink.play_buffer(AudioChannel::OneShot, &buffer) {
                warn!(%err, ?category, "one-shot playback failed");
            }
            self.notify(category);
            return;
        }

        match self.sounds[category.index()].beep {
            Some(clip) => {
                if let Err(err) = self.sink.play_clip(AudioChannel::OneShot, clip) {
                    warn!(%err, ?category, "beep clip failed to play");
                }
            }
            None => {
                let buffer = pattern_for(self.sample_rate, category, level);
                if let Err(err) = self.sink.play_buffer(AudioChannel::OneShot, &buffer) {
                    warn!(%err, ?category, "pattern playback failed");
                }
            }
        }

        self.notify(category);
        self.play_voice(category, now);
    }

    /// Post the category label to the notification collaborator. Failures
    /// are logged and swallowed — they must never affect audio dispatch.
    fn notify(&mut self, category: WarningCategory) {
        let duration = if category == WarningCategory::PullUp {
            NOTIFY_PULL_UP_SECS
        } else {
            NOTIFY_SECS
        };
        if let Err(err) = self.notifier.notify(category.label(), duration) {
            warn!(%err, ?category, "notification collaborator failed");
        }
    }

    /// Pick a voice clip uniformly at random and play it, scheduling the
    /// automatic stop so a long clip cannot overlap the next trigger.
    fn play_voice(&mut self, category: WarningCategory, now: f64) {
        let voices = &self.sounds[category.index()].voices;
        if voices.is_empty() {
            return;
        }
        let clip = voices[self.rng.gen_range(0..voices.len())];
        match self.sink.play_clip(AudioChannel::OneShot, clip) {
            Ok(()) => self.voice_stop_deadline = Some(now + VOICE_STOP_SECS),
            Err(err) => warn!(%err, ?category, "voice clip failed to play"),
        }
    }

    /// Start or stop the continuous brake tone. Returns true when the
    /// loop was started this tick. The brake debounce interval does not
    /// gate a one-shot sound — it only spaces out (re)start attempts.
    fn update_brake(&mut self, active: bool, now: f64) -> bool {
        if active {
            if !self.brake_playing
                && self
                    .clock
                    .should_trigger(WarningCategory::Brake, true, now)
            {
                let buffer = brake_loop(self.sample_rate);
                match self.sink.start_loop(AudioChannel::Brake, buffer) {
                    Ok(()) => {
                        self.brake_playing = true;
                        return true;
                    }
                    Err(err) => warn!(%err, "brake loop failed to start"),
                }
            }
        } else if self.brake_playing {
            self.sink.stop(AudioChannel::Brake);
            self.brake_playing = false;
        }
        false
    }

    /// Immediate silence on disable: stop both channels once and drop the
    /// pending voice stop.
    fn silence(&mut self) {
        if self.silenced {
            return;
        }
        if self.brake_playing {
            self.sink.stop(AudioChannel::Brake);
            self.brake_playing = false;
        }
        self.sink.stop(AudioChannel::OneShot);
        self.voice_stop_deadline = None;
        self.silenced = true;
    }
}
