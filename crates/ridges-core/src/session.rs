use crate::clock::{AnimationClock, FrameScheduler, TickHandle, TickOutcome};
use crate::field::RidgeField;
use crate::input::{toggle_playback, LocationTrigger, Transport, Volume};
use crate::location::StatusSlot;
use crate::ridge::RidgeFactory;
use crate::sampler::FrequencySampler;

/// Per-viewport visualizer state between `init` and `destroy`.
///
/// The session is only touched from the host's frame and input callbacks,
/// never concurrently.
pub struct VisualizerSession {
    field: RidgeField,
    factory: RidgeFactory,
    clock: AnimationClock,
    sampler: Box<dyn FrequencySampler>,
    scheduler: Box<dyn FrameScheduler>,
    volume: Volume,
    location: LocationTrigger,
    status: StatusSlot,
    pending: Option<TickHandle>,
    initialized: bool,
}

impl VisualizerSession {
    /// Start a session at host time `now` and request the first frame.
    pub fn init(
        now: f64,
        sampler: Box<dyn FrequencySampler>,
        scheduler: Box<dyn FrameScheduler>,
        factory: RidgeFactory,
    ) -> Self {
        let mut session = Self {
            field: RidgeField::new(),
            factory,
            clock: AnimationClock::new(now),
            sampler,
            scheduler,
            volume: Volume::default(),
            location: LocationTrigger::default(),
            status: StatusSlot::new(),
            pending: None,
            initialized: true,
        };
        session.pending = session.scheduler.request_tick();
        log::info!("[session] init at t={:.1}ms", now);
        session
    }

    /// Frame callback from the host. Runs the clock and requests the next frame.
    pub fn frame(&mut self, now: f64) -> TickOutcome {
        self.pending = None;
        if !self.initialized {
            return TickOutcome::default();
        }
        let outcome = self.clock.on_tick(
            now,
            self.sampler.as_mut(),
            &mut self.factory,
            &mut self.field,
        );
        self.pending = self.scheduler.request_tick();
        outcome
    }

    /// Cancel the pending frame, drop all ridges and close the status slot.
    /// Calling it twice is harmless.
    pub fn destroy(&mut self) {
        if !self.initialized {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_tick(handle);
        }
        self.status.close();
        self.field.clear();
        self.initialized = false;
        log::info!("[session] destroyed");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn field(&self) -> &RidgeField {
        &self.field
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Wheel notch over the viewport; pushes the new level to the transport.
    pub fn on_wheel<T: Transport + ?Sized>(&mut self, delta_y: f64, transport: &mut T) -> Volume {
        self.volume.step_wheel(delta_y);
        transport.set_volume(self.volume.get());
        self.volume
    }

    pub fn on_click<T: Transport + ?Sized>(&mut self, transport: &mut T) -> bool {
        let playing = toggle_playback(transport);
        log::info!("[click] playing={}", playing);
        playing
    }

    /// Key press; true when this press should start the location lookup.
    pub fn on_key(&mut self, code: &str) -> bool {
        let fire = self.initialized && self.location.press(code);
        if fire {
            log::info!("[keys] location requested");
        }
        fire
    }

    pub fn status(&self) -> StatusSlot {
        self.status.clone()
    }
}
