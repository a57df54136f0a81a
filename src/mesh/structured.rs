use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Default)]
/// A part stored as an `i x j x k` block of points that it owns
///
/// Points are ordered with `i` varying fastest, then `j`, then `k`. Cells are implicit, one
/// per grid interval.
pub struct StructuredPart {
    pub description: String,
    pub dimensions: [usize; 3],
    /// whether the part carried an iblank mask
    pub iblanked: bool,
    /// indices into `points` whose iblank flag was zero
    pub blanked_points: BTreeSet<usize>,
    pub points: Vec<[f64; 3]>,
}

impl StructuredPart {
    pub fn point_count(&self) -> usize {
        self.dimensions.iter().product()
    }

    /// Number of grid cells. A dimension of 1 collapses that direction instead of
    /// removing the cells, so a `4 x 3 x 1` block has 6 cells.
    pub fn cell_count(&self) -> usize {
        if self.dimensions.contains(&0) {
            return 0;
        }

        self.dimensions
            .iter()
            .map(|d| if *d > 1 { d - 1 } else { 1 })
            .product()
    }

    pub fn is_blanked(&self, point: usize) -> bool {
        self.blanked_points.contains(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(dimensions: [usize; 3]) -> StructuredPart {
        StructuredPart {
            dimensions,
            ..Default::default()
        }
    }

    #[test]
    fn cell_counts() {
        assert_eq!(part([2, 2, 2]).cell_count(), 1);
        assert_eq!(part([4, 3, 1]).cell_count(), 6);
        assert_eq!(part([5, 1, 1]).cell_count(), 4);
        assert_eq!(part([1, 1, 1]).cell_count(), 1);
        assert_eq!(part([3, 0, 2]).cell_count(), 0);
    }

    #[test]
    fn point_counts() {
        assert_eq!(part([4, 3, 2]).point_count(), 24);
        assert_eq!(part([4, 0, 2]).point_count(), 0);
    }
}
