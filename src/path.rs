use colored::*;
use itertools::Itertools;

use crate::grid::{symbol, Grid, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepDirection { South, East }

impl StepDirection {
    /// Order in which branches are explored by the exhaustive search.
    pub const ALL: [StepDirection; 2] = [StepDirection::South, StepDirection::East];
}

/// A monotone walk anchored at the grid's top-left cell.
///
/// Every step is checked with [`Path::is_step_valid`] before it is appended, so
/// every prefix of a path is itself a valid path and `total_cranes` never
/// decreases as steps are added.
#[derive(Clone, Debug)]
pub struct Path<'g> {
    grid: &'g Grid,
    steps: Vec<StepDirection>,
    end: Pos,
    total_cranes: u64,
}

impl<'g> Path<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        let total_cranes = u64::from(grid.get_pos(Pos::ORIGIN).cranes());
        Self { grid, steps: Vec::new(), end: Pos::ORIGIN, total_cranes }
    }

    pub fn grid(&self) -> &'g Grid { self.grid }
    pub fn steps(&self) -> &[StepDirection] { &self.steps }
    pub fn len(&self) -> usize { self.steps.len() }
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }
    pub fn end(&self) -> Pos { self.end }
    pub fn total_cranes(&self) -> u64 { self.total_cranes }

    pub fn is_step_valid(&self, dir: StepDirection) -> bool {
        // a path stranded on a building start cell goes nowhere
        if self.grid.get_pos(self.end).is_building() { return false; }
        match self.end.step(dir) {
            Some(next) => self.grid.contains(next) && !self.grid.get_pos(next).is_building(),
            None => false,
        }
    }

    pub fn add_step(&mut self, dir: StepDirection) {
        debug_assert!(self.is_step_valid(dir), "invalid step {dir:?} from {:?}", self.end);
        let Some(next) = self.end.step(dir) else { return };
        self.steps.push(dir);
        self.end = next;
        self.total_cranes += u64::from(self.grid.get_pos(next).cranes());
    }

    pub fn pop_step(&mut self) -> Option<StepDirection> {
        let dir = self.steps.pop()?;
        self.total_cranes -= u64::from(self.grid.get_pos(self.end).cranes());
        self.end = match dir {
            StepDirection::South => Pos { r: self.end.r - 1, c: self.end.c },
            StepDirection::East => Pos { r: self.end.r, c: self.end.c - 1 },
        };
        Some(dir)
    }

    /// Every cell on the path in visiting order, start cell included.
    pub fn visited(&self) -> Vec<Pos> {
        let mut cells = Vec::with_capacity(self.steps.len() + 1);
        let mut p = Pos::ORIGIN;
        cells.push(p);
        for &dir in &self.steps {
            if let Some(next) = p.step(dir) { p = next; cells.push(p); }
        }
        cells
    }

    pub fn render(&self, color: bool) -> String {
        let visited = self.visited();
        let w = self.grid.cell_width();
        let mut s = String::new();
        for r in 0..self.grid.rows() {
            let line = (0..self.grid.columns()).map(|c| {
                let sym = format!("{:>w$}", symbol(self.grid.get(r, c)));
                let on_path = visited.contains(&Pos { r, c });
                match (on_path, color) {
                    (true, true) => format!(" {} ", sym.green().bold()),
                    (true, false) => format!("[{}]", sym),
                    (false, true) if self.grid.get(r, c).is_building() => format!(" {} ", sym.red()),
                    (false, _) => format!(" {} ", sym),
                }
            }).join("");
            s.push_str(&line);
            s.push('\n');
        }
        s
    }

    pub fn steps_string(&self) -> String {
        if self.steps.is_empty() { return "(stay at start)".to_string(); }
        self.steps.iter().map(|d| match d { StepDirection::South => "S", StepDirection::East => "E" }).join(" ")
    }
}
