//! Cell classification. Benefit fills from the front of the active range,
//! harm from its tail, everything between is unharmed.

use crate::{GRID_CELLS, Status};

/// Status of cell `index` given already-clamped counts.
#[inline]
pub fn status(index: usize, total: f64, benefit: f64, harm: f64) -> Status {
    let i = index as f64;
    if i >= total {
        Status::Default
    } else if i < benefit {
        Status::Benefit
    } else if i >= total - harm {
        Status::Harm
    } else {
        Status::Unharmed
    }
}

/// Classify the whole grid.
pub fn cells(total: f64, benefit: f64, harm: f64) -> [Status; GRID_CELLS] {
    std::array::from_fn(|i| status(i, total, benefit, harm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_total_is_default() {
        assert_eq!(status(10, 10.0, 3.0, 2.0), Status::Default);
        assert_eq!(status(99, 10.0, 3.0, 2.0), Status::Default);
    }

    #[test]
    fn benefit_wins_over_harm_at_the_front() {
        // legacy overlap: benefit 10 and harm 5 over a total of 10
        for i in 0..10 {
            assert_eq!(status(i, 10.0, 10.0, 5.0), Status::Benefit);
        }
    }

    #[test]
    fn harm_is_drawn_from_the_tail() {
        assert_eq!(status(7, 10.0, 3.0, 2.0), Status::Unharmed);
        assert_eq!(status(8, 10.0, 3.0, 2.0), Status::Harm);
        assert_eq!(status(9, 10.0, 3.0, 2.0), Status::Harm);
    }

    #[test]
    fn fractional_counts_round_up_to_whole_cells() {
        // 2.5 benefit covers cells 0, 1 and 2
        let grid = cells(10.0, 2.5, 0.0);
        assert_eq!(grid[2], Status::Benefit);
        assert_eq!(grid[3], Status::Unharmed);
    }
}
