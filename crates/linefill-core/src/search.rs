use std::collections::{HashSet, VecDeque};

use crate::grid::PixelGrid;
use crate::visibility::{alpha_exceeds, VISIBILITY_THRESHOLD};

/// Maximum number of dequeues before a search gives up.
pub const DEFAULT_SEARCH_BUDGET: usize = 500;

/// Neighbor steps, in expansion order.
///
/// Diagonals only. Cardinal neighbors are never expanded, so from a start
/// at `(x, y)` the search only ever reaches cells where `x + y` has the same
/// parity.
pub const DIAGONAL_STEPS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Bounded breadth-first search for the nearest visible pixel.
///
/// Queue and visited storage are kept between calls so a full-image pass does
/// not allocate per pixel once warmed. Each [`find`](Self::find) starts from
/// cleared storage.
#[derive(Debug, Clone)]
pub struct NearestSearch {
    budget: usize,
    visibility_threshold: u8,
    queue: VecDeque<usize>,
    visited: HashSet<usize>,
}

impl Default for NearestSearch {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_BUDGET, VISIBILITY_THRESHOLD)
    }
}

impl NearestSearch {
    pub fn new(budget: usize, visibility_threshold: u8) -> Self {
        Self {
            budget,
            visibility_threshold,
            queue: VecDeque::new(),
            visited: HashSet::new(),
        }
    }

    /// Whether a color-grid pixel counts as fill under this search's threshold.
    #[inline]
    pub fn is_visible(&self, pixel: &[u8]) -> bool {
        alpha_exceeds(pixel, self.visibility_threshold)
    }

    /// Offset of the first visible pixel reached from `start`, or `None` if the
    /// reachable region or the budget runs out first.
    ///
    /// Every dequeue counts toward the budget, including ones skipped because
    /// the offset was already visited.
    pub fn find(&mut self, grid: &PixelGrid, start: usize) -> Option<usize> {
        self.queue.clear();
        self.visited.clear();
        self.queue.push_back(start);

        let mut iterations = 0;
        while iterations < self.budget {
            let Some(offset) = self.queue.pop_front() else {
                break;
            };
            iterations += 1;

            if !self.visited.insert(offset) {
                continue;
            }
            if self.is_visible(grid.pixel_at(offset)) {
                return Some(offset);
            }
            for (dx, dy) in DIAGONAL_STEPS {
                if let Some(next) = grid.translate(offset, dx, dy) {
                    self.queue.push_back(next);
                }
            }
        }
        None
    }
}

/// One-off search with the default visibility threshold.
pub fn nearest_visible(grid: &PixelGrid, start: usize, budget: usize) -> Option<usize> {
    NearestSearch::new(budget, VISIBILITY_THRESHOLD).find(grid, start)
}
