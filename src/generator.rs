use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Grid, GridError};

/// Random problem instances. A fixed seed always yields the same grids.
pub struct GridGenerator {
    rng: rand::rngs::StdRng,
}

impl GridGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => rand::rngs::StdRng::seed_from_u64(s),
            None => rand::rngs::StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn generate(&mut self, rows: usize, columns: usize, building_ratio: f64, max_cranes: u32) -> Result<Grid, GridError> {
        if rows == 0 || columns == 0 { return Err(GridError::Empty); }
        if !(0.0..=1.0).contains(&building_ratio) {
            return Err(GridError::InvalidParameter(format!("building ratio {building_ratio} not in [0, 1]")));
        }
        let mut cells = Vec::with_capacity(rows);
        for r in 0..rows {
            let mut row = Vec::with_capacity(columns);
            for c in 0..columns {
                // the start cell is always open
                let building = (r, c) != (0, 0) && self.rng.gen_bool(building_ratio);
                row.push(if building { Cell::Building } else { Cell::Opening(self.rng.gen_range(0..=max_cranes)) });
            }
            cells.push(row);
        }
        Grid::from_rows(cells)
    }
}
