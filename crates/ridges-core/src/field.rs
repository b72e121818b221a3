use crate::ridge::Ridge;
use std::collections::VecDeque;

/// Live ridges in creation order, oldest (deepest) first.
#[derive(Default, Debug)]
pub struct RidgeField {
    ridges: VecDeque<Ridge>,
    retired_total: u64,
}

impl RidgeField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `ridge` at the synthesis plane (depth 0), whatever depth it carried.
    pub fn insert(&mut self, mut ridge: Ridge) {
        ridge.reset_depth();
        self.ridges.push_back(ridge);
    }

    /// Push every ridge `speed` units deeper and drop the ones that crossed
    /// the retirement depth. Returns how many were dropped. Speeds below
    /// zero leave the field where it is.
    pub fn advance(&mut self, speed: f32) -> usize {
        for ridge in self.ridges.iter_mut() {
            ridge.advance(speed);
        }
        let before = self.ridges.len();
        self.ridges.retain(|r| !r.is_retired());
        let retired = before - self.ridges.len();
        if retired > 0 {
            self.retired_total += retired as u64;
            log::debug!(
                "[field] retired={} live={} total_retired={}",
                retired,
                self.ridges.len(),
                self.retired_total
            );
        }
        retired
    }

    pub fn current(&self) -> impl ExactSizeIterator<Item = &Ridge> + '_ {
        self.ridges.iter()
    }

    pub fn newest(&self) -> Option<&Ridge> {
        self.ridges.back()
    }

    pub fn len(&self) -> usize {
        self.ridges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ridges.is_empty()
    }

    pub fn retired_total(&self) -> u64 {
        self.retired_total
    }

    pub fn clear(&mut self) {
        self.ridges.clear();
    }
}
