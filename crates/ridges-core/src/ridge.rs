//! Ridge geometry and the factory that shapes it from a spectrum snapshot.

use crate::constants::*;
use crate::sampler::FrequencySnapshot;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Packed 0xRRGGBB line color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineColor(pub u32);

impl LineColor {
    /// Color with the same jitter added to all three channels, saturating at white.
    pub fn jittered(jitter: u32) -> Self {
        let jitter = jitter.min(0xff);
        let spread = (jitter << 16) | (jitter << 8) | jitter;
        LineColor(LINE_BASE_COLOR.saturating_add(spread).min(0xff_ff_ff))
    }

    pub fn channels(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }

    /// sRGB channels scaled to 0..1, with the fixed line opacity.
    pub fn to_rgba(self) -> [f32; 4] {
        let [r, g, b] = self.channels();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            LINE_OPACITY,
        ]
    }
}

/// One frequency snapshot extruded into a line strip.
///
/// `points` are stored at z = 0; the shared `depth` offset is applied when
/// the ridge is read in world space.
#[derive(Clone, Debug)]
pub struct Ridge {
    points: Vec<Vec3>,
    depth: f32,
    pub color: LineColor,
    pub born_at: u64,
}

impl Ridge {
    fn new(points: Vec<Vec3>, color: LineColor, born_at: u64) -> Self {
        debug_assert_eq!(points.len(), RIDGE_POINTS);
        Self {
            points,
            depth: 0.0,
            color,
            born_at,
        }
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Shape-bearing points in ridge-local space (z = 0).
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Points with the depth offset applied.
    pub fn world_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        let offset = Vec3::new(0.0, 0.0, self.depth);
        self.points.iter().map(move |p| *p + offset)
    }

    /// Occluding fill surface: the shaped top row followed by a flat bottom
    /// row, both at the ridge's depth.
    pub fn fill_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        let bottom = self
            .points
            .iter()
            .map(move |p| Vec3::new(p.x, FILL_BASE_Y, self.depth));
        self.world_points().chain(bottom)
    }

    /// Move the ridge away from the synthesis plane by `speed` units.
    /// Negative speeds are treated as zero; depth never increases.
    #[inline]
    pub(crate) fn advance(&mut self, speed: f32) {
        self.depth -= speed.max(0.0);
    }

    pub(crate) fn reset_depth(&mut self) {
        self.depth = 0.0;
    }

    pub fn is_retired(&self) -> bool {
        self.depth <= RETIREMENT_DEPTH
    }
}

/// x coordinate of control point `index`, evenly spaced over the ridge span.
#[inline]
pub fn point_x(index: usize) -> f32 {
    -RIDGE_SPAN / 2.0 + index as f32
}

/// Unshaped magnitude feeding control point `index`.
///
/// Points 39..100 read bins 63 down to 3, points 100..161 read bins 3 up to
/// 63; everything outside is flat. Missing bins read as 0.
#[inline]
pub fn bin_magnitude(snapshot: &FrequencySnapshot, index: usize) -> f32 {
    if (LEFT_HUMP_START..CENTER_INDEX).contains(&index) {
        snapshot.magnitude(LEFT_BIN_ORIGIN - index)
    } else if (CENTER_INDEX..RIGHT_HUMP_END).contains(&index) {
        snapshot.magnitude(index - RIGHT_BIN_OFFSET)
    } else {
        0.0
    }
}

/// Shaped height of control point `index`.
#[inline]
pub fn ridge_height(snapshot: &FrequencySnapshot, index: usize) -> f32 {
    bin_magnitude(snapshot, index).powf(HEIGHT_EXPONENT)
}

/// Builds depth-0 ridges from spectrum snapshots.
pub struct RidgeFactory {
    rng: StdRng,
    created: u64,
}

impl RidgeFactory {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            created: 0,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            created: 0,
        }
    }

    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn create(&mut self, snapshot: &FrequencySnapshot) -> Ridge {
        let points = (0..RIDGE_POINTS)
            .map(|i| Vec3::new(point_x(i), ridge_height(snapshot, i), 0.0))
            .collect::<Vec<_>>();
        let color = LineColor::jittered(self.rng.gen_range(0..LINE_COLOR_JITTER));
        let ridge = Ridge::new(points, color, self.created);
        self.created += 1;
        ridge
    }
}
