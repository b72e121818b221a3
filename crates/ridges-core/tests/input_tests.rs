// Host-side tests for volume clamping, playback toggling and the location latch.

use ridges_core::*;

#[test]
fn wheel_up_past_full_volume_stays_at_one() {
    let mut volume = Volume::default();
    for _ in 0..100 {
        volume.step_wheel(-1.0);
    }
    assert_eq!(volume.get(), 1.0);
    assert_eq!(volume.percent(), 100);
}

#[test]
fn wheel_down_past_silence_stays_at_zero() {
    let mut volume = Volume::default();
    for _ in 0..100 {
        volume.step_wheel(3.0);
    }
    assert_eq!(volume.get(), 0.0);
    assert_eq!(volume.label(), "Volume: 0%");
}

#[test]
fn zero_delta_counts_as_scrolling_down() {
    let mut volume = Volume::new(0.5);
    volume.step_wheel(0.0);
    assert!((volume.get() - 0.45).abs() < 1e-6);
}

#[test]
fn one_notch_moves_five_percent() {
    let mut volume = Volume::default();
    assert_eq!(volume.percent(), 30);
    volume.step_wheel(-53.0);
    assert_eq!(volume.label(), "Volume: 35%");
    volume.step_wheel(53.0);
    volume.step_wheel(53.0);
    assert_eq!(volume.percent(), 25);
}

#[test]
fn volume_new_clamps_input() {
    assert_eq!(Volume::new(2.0).get(), 1.0);
    assert_eq!(Volume::new(-0.5).get(), 0.0);
}

#[test]
fn location_trigger_only_reacts_to_space() {
    assert!(LocationTrigger::is_location_key("Space"));
    assert!(!LocationTrigger::is_location_key(" "));
    assert!(!LocationTrigger::is_location_key("Enter"));

    let mut trigger = LocationTrigger::default();
    assert!(!trigger.press("KeyL"));
    assert!(!trigger.requested());
    assert!(trigger.press("Space"));
    assert!(trigger.requested());
    assert!(!trigger.press("Space"));
}

struct Deck {
    playing: bool,
    plays: u32,
    pauses: u32,
}

impl Transport for Deck {
    fn is_playing(&self) -> bool {
        self.playing
    }
    fn play(&mut self) {
        self.playing = true;
        self.plays += 1;
    }
    fn pause(&mut self) {
        self.playing = false;
        self.pauses += 1;
    }
    fn stop(&mut self) {
        self.playing = false;
    }
    fn set_volume(&mut self, _volume: f32) {}
}

#[test]
fn toggle_playback_alternates() {
    let mut deck = Deck {
        playing: false,
        plays: 0,
        pauses: 0,
    };
    assert!(toggle_playback(&mut deck));
    assert!(!toggle_playback(&mut deck));
    assert!(toggle_playback(&mut deck));
    assert_eq!((deck.plays, deck.pauses), (2, 1));
}
