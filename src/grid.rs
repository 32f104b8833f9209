use itertools::Itertools;
use thiserror::Error;

use crate::path::StepDirection;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("invalid char {ch:?} on line {line}")]
    InvalidChar { ch: char, line: usize },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Building,
    // crane count, collected once when visited
    Opening(u32),
}

impl Cell {
    pub fn is_building(self) -> bool { matches!(self, Cell::Building) }
    pub fn cranes(self) -> u32 { match self { Cell::Building => 0, Cell::Opening(n) => n } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos {
    pub const ORIGIN: Pos = Pos { r: 0, c: 0 };

    pub fn step(self, dir: StepDirection) -> Option<Pos> {
        match dir {
            StepDirection::South => self.r.checked_add(1).map(|r| Pos { r, c: self.c }),
            StepDirection::East => self.c.checked_add(1).map(|c| Pos { r: self.r, c }),
        }
    }
}

/// Rectangular, immutable matrix of buildings and crane openings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>"))]
pub struct Grid {
    rows: usize,
    columns: usize,
    // row-major
    cells: Vec<Cell>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || columns == 0 { return Err(GridError::Empty); }
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != columns) {
            return Err(GridError::Ragged { row, expected: columns, found: r.len() });
        }
        let n = rows.len();
        Ok(Self { rows: n, columns, cells: rows.into_iter().flatten().collect() })
    }

    /// Parses one row per line: `X` or `#` for a building, `.` for an empty
    /// opening and `0`..`9` for an opening holding that many cranes.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|ch| !matches!(ch, ' ' | '\t' | '\r')) {
                let cell = match ch {
                    'X' | 'x' | '#' => Cell::Building,
                    '.' => Cell::Opening(0),
                    '0'..='9' => Cell::Opening(ch as u32 - '0' as u32),
                    _ => return Err(GridError::InvalidChar { ch, line: line_no + 1 }),
                };
                row.push(cell);
            }
            if !row.is_empty() { rows.push(row); }
        }
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn columns(&self) -> usize { self.columns }

    /// Callers guarantee `r < rows` and `c < columns`.
    pub fn get(&self, r: usize, c: usize) -> Cell { self.cells[r * self.columns + c] }
    pub fn get_pos(&self, p: Pos) -> Cell { self.get(p.r, p.c) }
    pub fn contains(&self, p: Pos) -> bool { p.r < self.rows && p.c < self.columns }

    /// Length of the longest monotone path, corner to corner.
    pub fn max_steps(&self) -> usize { self.rows + self.columns - 2 }

    pub fn total_cranes(&self) -> u64 { self.cells.iter().map(|&c| u64::from(c.cranes())).sum() }

    pub fn iterate_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).cartesian_product(0..self.columns).map(|(r, c)| Pos { r, c })
    }

    pub(crate) fn cell_width(&self) -> usize {
        self.cells.iter().map(|c| c.cranes().to_string().len()).max().unwrap_or(1)
    }

    pub fn to_pretty_string(&self) -> String {
        let w = self.cell_width();
        let border = format!("+{}+\n", "-".repeat(self.columns * (w + 1) + 1));
        let mut s = border.clone();
        for r in 0..self.rows {
            let line = (0..self.columns).map(|c| format!("{:>w$}", symbol(self.get(r, c)))).join(" ");
            s.push_str(&format!("| {} |\n", line));
        }
        s.push_str(&border);
        s
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridError;
    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> { Grid::from_rows(rows) }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(g: Grid) -> Self { g.cells.chunks(g.columns).map(<[Cell]>::to_vec).collect() }
}

pub(crate) fn symbol(cell: Cell) -> String {
    match cell {
        Cell::Building => "X".to_string(),
        Cell::Opening(0) => ".".to_string(),
        Cell::Opening(n) => n.to_string(),
    }
}
