use crate::{dynamic::DynamicSolver, exhaustive::ExhaustiveSolver, grid::Grid, path::Path};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm { Exhaustive, Dynamic }

impl Algorithm {
    pub fn solver(self) -> Box<dyn Solver> {
        match self {
            Algorithm::Exhaustive => Box::new(ExhaustiveSolver::new()),
            Algorithm::Dynamic => Box::new(DynamicSolver::new()),
        }
    }
}

/// Finds a South/East path from the top-left cell collecting the most cranes.
///
/// Implementations panic on an empty grid; they never fail otherwise and fall
/// back to the zero-step path when nothing better is reachable.
pub trait Solver {
    fn name(&self) -> &str;
    fn solve<'g>(&self, grid: &'g Grid) -> Path<'g>;
}
