pub mod dynamic;
pub mod exhaustive;
pub mod generator;
pub mod grid;
pub mod logger;
pub mod path;
pub mod solver;

pub use dynamic::DynamicSolver;
pub use exhaustive::ExhaustiveSolver;
pub use grid::{Cell, Grid, GridError, Pos};
pub use path::{Path, StepDirection};
pub use solver::{Algorithm, Solver};
