// history.rs - Detects generations that repeat recent ones

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::Grid;

/// How many generations are remembered by default.
pub const DEFAULT_DEPTH: usize = 10;

/// Hashes of the most recent generations.
///
/// A repeat means the grid has settled into a still life or an oscillator
/// whose period is no longer than the depth.
#[derive(Clone, Debug)]
pub struct History {
    recent: VecDeque<u64>,
    depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

impl History {
    pub fn with_depth(depth: usize) -> Self {
        let depth = depth.max(1);
        Self {
            recent: VecDeque::with_capacity(depth),
            depth,
        }
    }

    /// Returns true if `grid` matches a remembered generation; otherwise
    /// remembers it, forgetting the oldest one when full.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = fingerprint(grid);
        if self.recent.contains(&hash) {
            return true;
        }
        if self.recent.len() == self.depth {
            self.recent.pop_front();
        }
        self.recent.push_back(hash);
        false
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

fn fingerprint(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}
