use anyhow::Result;
use chrono::Local;
use colored::*;
use std::{fs::{self, File}, io::Write, path::PathBuf, time::Duration};

use crate::{grid::Grid, path::Path};

/// Writes each run report to its own numbered `devlog(N).txt` file and echoes
/// it to the console.
pub struct DevLogger {
    dir: PathBuf,
    color: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, color, max_logs, counter: 0 })
    }

    pub fn written(&self) -> usize { self.counter }

    pub fn log_grid(&mut self, grid: &Grid) -> Result<()> {
        let details = format!(
            "{}x{} grid, {} cranes in total, longest path {} steps\n{}",
            grid.rows(), grid.columns(), grid.total_cranes(), grid.max_steps(), grid.to_pretty_string(),
        );
        self.log("Initialization", &details)
    }

    /// Report for one solver run. The file copy is never colored.
    pub fn log_solution(&mut self, solver: &str, path: &Path, elapsed: Duration) -> Result<()> {
        let summary = format!(
            "total cranes: {}\nsteps ({}): {}\nelapsed: {:.3} ms",
            path.total_cranes(), path.len(), path.steps_string(), elapsed.as_secs_f64() * 1e3,
        );
        let title = format!("{solver} solution");
        self.write_file(&title, &format!("{summary}\n\n{}", path.render(false)))?;
        self.echo(&title, &format!("{summary}\n\n{}", path.render(self.color)));
        Ok(())
    }

    pub fn log(&mut self, title: &str, details: &str) -> Result<()> {
        self.write_file(title, details)?;
        self.echo(title, details);
        Ok(())
    }

    fn write_file(&mut self, title: &str, details: &str) -> Result<()> {
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(()); }
        self.counter += 1;
        let path = self.dir.join(format!("devlog({}).txt", self.counter));

        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = File::create(&path)?;
        writeln!(f, "[{}] {}\n\n{}", ts, title, details)?;
        Ok(())
    }

    fn echo(&self, title: &str, details: &str) {
        if self.color {
            println!("{} {}\n{}", "➤".blue().bold(), title.bold(), details);
        } else {
            println!("➤ {}\n{}", title, details);
        }
    }
}
