//! Packs the live field into GPU vertex streams.
//!
//! Lines are emitted as a line list (one segment per neighboring point pair)
//! so every ridge can share one draw call; fills are emitted as a triangle
//! list covering the 199 quads between the shaped top row and the flat
//! bottom row.

use crate::constants::{FILL_COLOR, RIDGE_POINTS};
use crate::field::RidgeField;
use glam::Vec3;

pub const LINE_VERTICES_PER_RIDGE: usize = (RIDGE_POINTS - 1) * 2;
pub const FILL_VERTICES_PER_RIDGE: usize = (RIDGE_POINTS - 1) * 6;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RidgeVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl RidgeVertex {
    #[inline]
    fn new(p: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: p.to_array(),
            color,
        }
    }
}

/// Reusable vertex storage for one frame.
#[derive(Default)]
pub struct RidgeMesh {
    pub lines: Vec<RidgeVertex>,
    pub fills: Vec<RidgeVertex>,
}

impl RidgeMesh {
    pub fn rebuild(&mut self, field: &RidgeField) {
        self.lines.clear();
        self.fills.clear();
        self.lines.reserve(field.len() * LINE_VERTICES_PER_RIDGE);
        self.fills.reserve(field.len() * FILL_VERTICES_PER_RIDGE);

        let mut fill: Vec<Vec3> = Vec::with_capacity(RIDGE_POINTS * 2);
        for ridge in field.current() {
            let rgba = ridge.color.to_rgba();
            fill.clear();
            fill.extend(ridge.fill_points());
            let (top, bottom) = fill.split_at(RIDGE_POINTS);

            for pair in top.windows(2) {
                self.lines.push(RidgeVertex::new(pair[0], rgba));
                self.lines.push(RidgeVertex::new(pair[1], rgba));
            }
            for i in 0..RIDGE_POINTS - 1 {
                let (t0, t1, b0, b1) = (top[i], top[i + 1], bottom[i], bottom[i + 1]);
                for p in [t0, b0, t1, t1, b0, b1] {
                    self.fills.push(RidgeVertex::new(p, FILL_COLOR));
                }
            }
        }
    }

    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    pub fn fill_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.fills)
    }
}
