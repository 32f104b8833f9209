use log::debug;

use crate::{grid::Grid, path::{Path, StepDirection}, solver::Solver};

/// Memo table of the best path ending at each cell, filled in row-major order
/// so the cell above and the cell to the left are always resolved first.
pub struct DynamicSolver;

impl DynamicSolver {
    pub fn new() -> Self { Self }
}

impl Default for DynamicSolver {
    fn default() -> Self { Self::new() }
}

impl Solver for DynamicSolver {
    fn name(&self) -> &str { "Dynamic programming" }

    fn solve<'g>(&self, grid: &'g Grid) -> Path<'g> {
        assert!(grid.rows() > 0 && grid.columns() > 0, "grid must be non-empty");
        let (rows, cols) = (grid.rows(), grid.columns());
        let idx = |r: usize, c: usize| r * cols + c;

        // None = unreachable
        let mut table: Vec<Option<Path<'g>>> = (0..rows * cols).map(|_| None).collect();
        for r in 0..rows {
            for c in 0..cols {
                if grid.get(r, c).is_building() { continue; }
                if r == 0 && c == 0 {
                    table[0] = Some(Path::new(grid));
                    continue;
                }
                let from_above = if r > 0 { extend(table[idx(r - 1, c)].as_ref(), StepDirection::South) } else { None };
                let from_left = if c > 0 { extend(table[idx(r, c - 1)].as_ref(), StepDirection::East) } else { None };
                table[idx(r, c)] = match (from_above, from_left) {
                    // ties go to the path arriving from above
                    (Some(above), Some(left)) => Some(if left.total_cranes() > above.total_cranes() { left } else { above }),
                    (above, left) => above.or(left),
                };
            }
        }
        debug!("dynamic: {} of {} cells reachable", table.iter().flatten().count(), rows * cols);

        table.into_iter().flatten().fold(Path::new(grid), |best, p| {
            if p.total_cranes() > best.total_cranes() { p } else { best }
        })
    }
}

pub fn solve(grid: &Grid) -> Path<'_> { DynamicSolver::new().solve(grid) }

fn extend<'g>(source: Option<&Path<'g>>, dir: StepDirection) -> Option<Path<'g>> {
    let source = source?;
    if !source.is_step_valid(dir) { return None; }
    let mut next = source.clone();
    next.add_step(dir);
    Some(next)
}
