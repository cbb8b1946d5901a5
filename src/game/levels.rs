use std::collections::HashSet;
use rand::Rng;

use crate::game::board::{ColorId, Grid};

/// Picks the target height of every column.
///
/// Draws `num_colors - 1` colors with replacement, then counts, per column, the
/// cells whose color is among them. Expects a freshly filled grid; liveness is
/// ignored. A color drawn twice counts once.
pub fn pick_levels<R: Rng + ?Sized>(grid: &Grid, num_colors: usize, rng: &mut R) -> Vec<usize> {
    let target_colors: HashSet<ColorId> = (0..num_colors.saturating_sub(1))
        .map(|_| rng.gen_range(0..num_colors))
        .collect();

    levels_for_colors(grid, &target_colors)
}

pub fn levels_for_colors(grid: &Grid, target_colors: &HashSet<ColorId>) -> Vec<usize> {
    let num_cols = grid.first().map_or(0, |row| row.len());
    (0..num_cols)
        .map(|col| {
            grid.iter()
                .filter(|row| target_colors.contains(&row[col].color()))
                .count()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::grid_from_colors;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn counts_matching_cells_per_column() {
        let grid = grid_from_colors(&[
            vec![0, 1, 2],
            vec![1, 1, 0],
            vec![2, 0, 0],
        ]);
        let targets: HashSet<ColorId> = [0, 2].into_iter().collect();
        assert_eq!(levels_for_colors(&grid, &targets), vec![2, 1, 3]);
    }

    #[test]
    fn counts_dead_cells_too() {
        let mut grid = grid_from_colors(&[vec![0], vec![0]]);
        grid[0][0].kill();
        let targets: HashSet<ColorId> = [0].into_iter().collect();
        assert_eq!(levels_for_colors(&grid, &targets), vec![2]);
    }

    #[test]
    fn single_color_gives_zero_levels() {
        let grid = grid_from_colors(&[vec![0, 0], vec![0, 0]]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_levels(&grid, 1, &mut rng), vec![0, 0]);
    }

    #[test]
    fn levels_never_exceed_rows() {
        let grid = grid_from_colors(&[
            vec![0, 1, 2, 3],
            vec![3, 2, 1, 0],
            vec![1, 1, 2, 2],
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let levels = pick_levels(&grid, 4, &mut rng);
            assert_eq!(levels.len(), 4);
            assert!(levels.iter().all(|&level| level <= 3));
        }
    }

    #[test]
    fn levels_come_from_a_union_of_at_most_n_minus_one_colors() {
        // Column c holds only color c, so each level is 0 or the full height.
        let grid = grid_from_colors(&[vec![0, 1, 2], vec![0, 1, 2]]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let levels = pick_levels(&grid, 3, &mut rng);
            assert!(levels.iter().all(|&level| level == 0 || level == 2));
            assert!(levels.iter().filter(|&&level| level == 2).count() <= 2);
        }
    }
}
