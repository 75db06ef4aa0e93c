//! Sample-buffer generators.
//!
//! All generators are deterministic: identical inputs and sample rate
//! produce bit-identical buffers. Durations are defensively clamped to a
//! minimum of one sample — a zero-length buffer would be a playback no-op
//! that silently drops a warning.

use std::f64::consts::TAU;

use klaxon_core::constants::{BEEP_GAIN, BRAKE_LOOP_SECS, COMPOSITE_GAIN};

/// A mono sample buffer at a known sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneBuffer {
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl ToneBuffer {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Buffer length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Sample count for a duration, clamped to at least one sample.
pub fn samples_for(sample_rate: u32, duration_secs: f64) -> usize {
    let n = (sample_rate as f64 * duration_secs).round();
    if n < 1.0 {
        1
    } else {
        n as usize
    }
}

/// Gap sample count; gaps may legitimately be zero, never negative.
fn gap_samples(sample_rate: u32, gap_secs: f64) -> usize {
    let n = (sample_rate as f64 * gap_secs).round();
    if n < 0.0 {
        0
    } else {
        n as usize
    }
}

/// Single sine beep with a linear fade-out envelope.
pub fn beep(sample_rate: u32, freq_hz: f64, duration_secs: f64) -> ToneBuffer {
    let n = samples_for(sample_rate, duration_secs);
    let sr = sample_rate as f64;
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let fade = 1.0 - i as f64 / n as f64;
        samples.push(((TAU * freq_hz * i as f64 / sr).sin() * BEEP_GAIN * fade) as f32);
    }
    ToneBuffer {
        sample_rate,
        samples,
    }
}

/// Sine sweep whose instantaneous frequency interpolates `f0 → f1`
/// linearly across the buffer, with the same linear fade-out as `beep`.
pub fn sweep(sample_rate: u32, f0_hz: f64, f1_hz: f64, duration_secs: f64) -> ToneBuffer {
    let n = samples_for(sample_rate, duration_secs);
    let sr = sample_rate as f64;
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 / n as f64;
        let freq = f0_hz + (f1_hz - f0_hz) * t;
        samples.push(((TAU * freq * i as f64 / sr).sin() * BEEP_GAIN * (1.0 - t)) as f32);
    }
    ToneBuffer {
        sample_rate,
        samples,
    }
}

/// Sequential tones separated by silent gaps. Each tone fades out on its
/// own; gaps appear between tones, never after the last one.
pub fn composite(sample_rate: u32, tones: &[(f64, f64)], gap_secs: f64) -> ToneBuffer {
    let sr = sample_rate as f64;
    let gap = gap_samples(sample_rate, gap_secs);
    let tone_lengths: Vec<usize> = tones
        .iter()
        .map(|&(_, dur)| samples_for(sample_rate, dur))
        .collect();
    let total: usize =
        tone_lengths.iter().sum::<usize>() + gap * tones.len().saturating_sub(1);

    let mut samples = Vec::with_capacity(total);
    for (t, &(freq, _)) in tones.iter().enumerate() {
        let n = tone_lengths[t];
        for i in 0..n {
            let fade = 1.0 - i as f64 / n as f64;
            samples.push(((TAU * freq * i as f64 / sr).sin() * COMPOSITE_GAIN * fade) as f32);
        }
        if t + 1 < tones.len() {
            samples.extend(std::iter::repeat(0.0f32).take(gap));
        }
    }

    ToneBuffer {
        sample_rate,
        samples,
    }
}

/// One second of steady sine at the given frequency and gain, meant to be
/// looped by the playback channel until explicitly stopped. No fade — the
/// loop seam stays smooth only if the sink loops the whole buffer.
pub fn loop_tone(sample_rate: u32, freq_hz: f64, gain: f64) -> ToneBuffer {
    let n = samples_for(sample_rate, BRAKE_LOOP_SECS);
    let sr = sample_rate as f64;
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        samples.push(((TAU * freq_hz * i as f64 / sr).sin() * gain) as f32);
    }
    ToneBuffer {
        sample_rate,
        samples,
    }
}
