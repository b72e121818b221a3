use crate::constants::{LOCATION_KEY_CODE, VOLUME_DEFAULT, VOLUME_STEP};

/// Playback volume clamped to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Volume(f32);

impl Default for Volume {
    fn default() -> Self {
        Volume(VOLUME_DEFAULT)
    }
}

impl Volume {
    pub fn new(value: f32) -> Self {
        Volume(value.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// Apply one wheel notch: scrolling up (negative `delta_y`) raises the
    /// volume, anything else lowers it.
    pub fn step_wheel(&mut self, delta_y: f64) -> f32 {
        let direction = if delta_y < 0.0 { 1.0 } else { -1.0 };
        self.0 = (self.0 + direction * VOLUME_STEP).clamp(0.0, 1.0);
        self.0
    }

    /// Rounded percentage shown in the volume overlay.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }

    pub fn label(self) -> String {
        format!("Volume: {}%", self.percent())
    }
}

/// Playback controls of the audio collaborator.
pub trait Transport {
    fn is_playing(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn set_volume(&mut self, volume: f32);
}

/// Pointer click: pause when playing, play otherwise. Returns the new state.
pub fn toggle_playback<T: Transport + ?Sized>(transport: &mut T) -> bool {
    if transport.is_playing() {
        transport.pause();
        false
    } else {
        transport.play();
        true
    }
}

/// One-shot latch for the location lookup key.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationTrigger {
    requested: bool,
}

impl LocationTrigger {
    #[inline]
    pub fn is_location_key(code: &str) -> bool {
        code == LOCATION_KEY_CODE
    }

    /// True only for the first press of the location key in a session.
    pub fn press(&mut self, code: &str) -> bool {
        if !Self::is_location_key(code) || self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    pub fn requested(&self) -> bool {
        self.requested
    }
}
