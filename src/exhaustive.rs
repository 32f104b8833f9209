use log::debug;

use crate::{grid::Grid, path::{Path, StepDirection}, solver::Solver};

/// Default size guard: grids whose longest path has this many steps or more
/// are rejected.
pub const STEP_LIMIT: usize = 64;

/// Brute force over every South/East step sequence up to `rows + columns - 2`
/// steps. Exponential; only meant for small grids and as an oracle.
pub struct ExhaustiveSolver { step_limit: usize }

impl ExhaustiveSolver {
    pub fn new() -> Self { Self { step_limit: STEP_LIMIT } }
    pub fn with_step_limit(step_limit: usize) -> Self { Self { step_limit } }
    pub fn step_limit(&self) -> usize { self.step_limit }
}

impl Default for ExhaustiveSolver {
    fn default() -> Self { Self::new() }
}

impl Solver for ExhaustiveSolver {
    fn name(&self) -> &str { "Exhaustive" }

    fn solve<'g>(&self, grid: &'g Grid) -> Path<'g> {
        assert!(grid.rows() > 0 && grid.columns() > 0, "grid must be non-empty");
        let max_steps = grid.max_steps();
        debug!("exhaustive: {}x{} grid, max_steps {}", grid.rows(), grid.columns(), max_steps);
        assert!(max_steps < self.step_limit, "max_steps {max_steps} exceeds step limit {}", self.step_limit);

        let mut search = Search { best: Path::new(grid), candidates: 0 };
        let mut current = Path::new(grid);
        search.explore(&mut current, max_steps);
        debug!("exhaustive: {} candidates, best total {}", search.candidates, search.best.total_cranes());
        search.best
    }
}

pub fn solve(grid: &Grid) -> Path<'_> { ExhaustiveSolver::new().solve(grid) }

struct Search<'g> {
    best: Path<'g>,
    candidates: u64,
}

impl<'g> Search<'g> {
    // Depth-first over the choice tree. Each valid prefix is a candidate; an
    // invalid step prunes the whole subtree below it.
    fn explore(&mut self, current: &mut Path<'g>, remaining: usize) {
        self.candidates += 1;
        // strict: the first path found with a given total is kept
        if current.total_cranes() > self.best.total_cranes() { self.best = current.clone(); }
        if remaining == 0 { return; }
        for dir in StepDirection::ALL {
            if !current.is_step_valid(dir) { continue; }
            current.add_step(dir);
            self.explore(current, remaining - 1);
            current.pop_step();
        }
    }
}
