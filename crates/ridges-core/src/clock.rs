//! Fixed-cadence sampling on top of the host's per-frame callback.

use crate::constants::{SAMPLE_INTERVAL_MS, SPEED_AMPLITUDE, SPEED_PERIOD_DIVISOR_MS};
use crate::field::RidgeField;
use crate::ridge::RidgeFactory;
use crate::sampler::FrequencySampler;

/// Opaque handle for a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub i32);

/// Host event-loop primitive that delivers one frame callback per request.
///
/// The host owns the callback itself; when a requested frame fires it calls
/// back into the session with the frame timestamp.
pub trait FrameScheduler {
    fn request_tick(&mut self) -> Option<TickHandle>;
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Depth advance per sampling cycle after `elapsed_ms` of session time.
///
/// Oscillates in [0.5, 1.5] with a period of 2000·2π ms.
#[inline]
pub fn speed_at(elapsed_ms: f64) -> f32 {
    1.0 + SPEED_AMPLITUDE * (elapsed_ms / SPEED_PERIOD_DIVISOR_MS).sin() as f32
}

/// Result of one frame callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickOutcome {
    /// Whether a sampling cycle ran on this frame.
    pub sampled: bool,
    pub speed: f32,
    pub retired: usize,
}

/// Throttles frame callbacks into sampling cycles.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    started_at: f64,
    last_sample: Option<f64>,
}

impl AnimationClock {
    pub fn new(started_at: f64) -> Self {
        Self {
            started_at,
            last_sample: None,
        }
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    pub fn last_sample(&self) -> Option<f64> {
        self.last_sample
    }

    #[inline]
    pub fn is_due(&self, now: f64) -> bool {
        match self.last_sample {
            None => true,
            Some(last) => now - last >= SAMPLE_INTERVAL_MS,
        }
    }

    pub fn speed(&self, now: f64) -> f32 {
        speed_at(now - self.started_at)
    }

    /// Run one frame: when due, advance the field, then sample and insert a
    /// fresh ridge at depth 0.
    pub fn on_tick<S>(
        &mut self,
        now: f64,
        sampler: &mut S,
        factory: &mut RidgeFactory,
        field: &mut RidgeField,
    ) -> TickOutcome
    where
        S: FrequencySampler + ?Sized,
    {
        if !self.is_due(now) {
            return TickOutcome::default();
        }
        self.last_sample = Some(now);
        let speed = self.speed(now);
        let retired = field.advance(speed);
        let snapshot = sampler.sample();
        field.insert(factory.create(&snapshot));
        TickOutcome {
            sampled: true,
            speed,
            retired,
        }
    }
}
