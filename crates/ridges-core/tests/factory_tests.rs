// Host-side tests for ridge synthesis from spectrum snapshots.

use ridges_core::*;

fn ramp_snapshot() -> FrequencySnapshot {
    let bins: Vec<u8> = (0..SNAPSHOT_BINS).map(|i| (i * 2) as u8).collect();
    FrequencySnapshot::from_bins(&bins)
}

#[test]
fn ridge_has_exactly_200_points_with_fixed_x() {
    let mut factory = RidgeFactory::new(7);
    let ridge = factory.create(&ramp_snapshot());
    assert_eq!(ridge.points().len(), RIDGE_POINTS);
    for (i, p) in ridge.points().iter().enumerate() {
        assert!((p.x - (-99.5 + i as f32)).abs() < 1e-4, "x mismatch at {i}");
        assert_eq!(p.z, 0.0);
    }
    let first = ridge.points()[0].x;
    let last = ridge.points()[RIDGE_POINTS - 1].x;
    assert!((last - first - 199.0).abs() < 1e-4);
}

#[test]
fn new_ridge_sits_at_depth_zero() {
    let mut factory = RidgeFactory::new(1);
    let ridge = factory.create(&FrequencySnapshot::silent());
    assert_eq!(ridge.depth(), 0.0);
    assert!(ridge.heights().all(|h| h == 0.0));
}

#[test]
fn bin_mapping_formulas_hold_for_both_humps() {
    let snapshot = ramp_snapshot();
    let mut factory = RidgeFactory::new(3);
    let ridge = factory.create(&snapshot);
    let heights: Vec<f32> = ridge.heights().collect();
    for i in 0..RIDGE_POINTS {
        let expected = if (39..100).contains(&i) {
            snapshot.magnitude(102 - i).powf(1.2)
        } else if (100..161).contains(&i) {
            snapshot.magnitude(i - 97).powf(1.2)
        } else {
            0.0
        };
        assert!(
            (heights[i] - expected).abs() <= expected * 1e-5 + 1e-5,
            "height mismatch at {i}: {} vs {expected}",
            heights[i]
        );
    }
}

#[test]
fn heights_are_non_negative_for_loud_input() {
    let snapshot = FrequencySnapshot::from_bins(&[255u8; SNAPSHOT_BINS]);
    let ridge = RidgeFactory::new(0).create(&snapshot);
    let peak = 255f32.powf(HEIGHT_EXPONENT);
    for (i, h) in ridge.heights().enumerate() {
        assert!(h >= 0.0);
        if (39..161).contains(&i) {
            assert!((h - peak).abs() < 1e-2);
        } else {
            assert_eq!(h, 0.0);
        }
    }
}

#[test]
fn humps_mirror_around_the_center() {
    let snapshot = ramp_snapshot();
    // point 99 and point 100 both read bin 3
    assert_eq!(bin_magnitude(&snapshot, 99), snapshot.magnitude(3));
    assert_eq!(bin_magnitude(&snapshot, 100), snapshot.magnitude(3));
    // extremes read bin 63
    assert_eq!(bin_magnitude(&snapshot, 39), snapshot.magnitude(63));
    assert_eq!(bin_magnitude(&snapshot, 160), snapshot.magnitude(63));
    assert_eq!(bin_magnitude(&snapshot, 38), 0.0);
    assert_eq!(bin_magnitude(&snapshot, 161), 0.0);
}

#[test]
fn short_or_empty_snapshots_degrade_to_zero_height() {
    let mut factory = RidgeFactory::new(11);
    let empty = factory.create(&FrequencySnapshot::from_bins(&[]));
    assert_eq!(empty.points().len(), RIDGE_POINTS);
    assert!(empty.heights().all(|h| h == 0.0));

    // only bins 0..10 present: points reading bins >= 10 are flat
    let short = FrequencySnapshot::from_bins(&[100u8; 10]);
    let ridge = factory.create(&short);
    let heights: Vec<f32> = ridge.heights().collect();
    assert!(heights[99] > 0.0); // bin 3
    assert_eq!(heights[39], 0.0); // bin 63
    assert_eq!(heights[160], 0.0); // bin 63
}

#[test]
fn color_stays_within_jitter_range_and_is_gray() {
    let mut factory = RidgeFactory::new(99);
    for _ in 0..200 {
        let ridge = factory.create(&FrequencySnapshot::silent());
        let [r, g, b] = ridge.color.channels();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!(r >= 0xe1, "channel below base: {r:#x}");
        assert!(ridge.color.0 <= 0xff_ff_ff);
    }
}

#[test]
fn jittered_color_saturates_at_white() {
    assert_eq!(LineColor::jittered(0), LineColor(0xe1_e1_e1));
    assert_eq!(LineColor::jittered(0x10), LineColor(0xf1_f1_f1));
    assert_eq!(LineColor::jittered(0x1e), LineColor(0xff_ff_ff));
    assert_eq!(LineColor::jittered(0x21), LineColor(0xff_ff_ff));
    assert_eq!(LineColor::jittered(u32::MAX), LineColor(0xff_ff_ff));
    let rgba = LineColor::jittered(0).to_rgba();
    assert!((rgba[3] - LINE_OPACITY).abs() < 1e-6);
}

#[test]
fn factory_counts_created_ridges() {
    let mut factory = RidgeFactory::new(5);
    for expected in 0..4u64 {
        let ridge = factory.create(&FrequencySnapshot::silent());
        assert_eq!(ridge.born_at, expected);
    }
    assert_eq!(factory.created(), 4);
}
