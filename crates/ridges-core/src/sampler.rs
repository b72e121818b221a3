//! Frequency-domain input for ridge synthesis.
//!
//! A [`FrequencySnapshot`] is one analysis window of byte magnitudes
//! (0..=255 per bin). Snapshots are transient: the clock pulls one per
//! sampling cycle and drops it once the ridge is built.

use crate::constants::SNAPSHOT_BINS;
use smallvec::SmallVec;

/// Fixed-length bin magnitudes pulled from the audio analyser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencySnapshot {
    bins: SmallVec<[u8; SNAPSHOT_BINS]>,
}

impl FrequencySnapshot {
    /// All-zero snapshot with the standard bin count.
    pub fn silent() -> Self {
        Self {
            bins: SmallVec::from_elem(0, SNAPSHOT_BINS),
        }
    }

    pub fn from_bins(bins: &[u8]) -> Self {
        Self {
            bins: SmallVec::from_slice(bins),
        }
    }

    /// Magnitude of bin `index`, or 0 when the snapshot is too short.
    #[inline]
    pub fn magnitude(&self, index: usize) -> f32 {
        self.bins.get(index).copied().unwrap_or(0) as f32
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bins
    }
}

impl From<Vec<u8>> for FrequencySnapshot {
    fn from(bins: Vec<u8>) -> Self {
        Self {
            bins: SmallVec::from_vec(bins),
        }
    }
}

/// Source of the latest analysis window.
///
/// Implementations read whatever the audio collaborator currently holds; the
/// clock calls `sample` at most once per sampling cycle.
pub trait FrequencySampler {
    fn sample(&mut self) -> FrequencySnapshot;
}

impl<F> FrequencySampler for F
where
    F: FnMut() -> FrequencySnapshot,
{
    fn sample(&mut self) -> FrequencySnapshot {
        self()
    }
}
