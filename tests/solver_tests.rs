use cranes::{
    dynamic, exhaustive, generator::GridGenerator, Algorithm, DynamicSolver, ExhaustiveSolver, Grid, Path,
    Solver, StepDirection::{East, South},
};
use pretty_assertions::assert_eq;

// Rebuilds the path step by step, checking every step was valid when appended
// and that the running total never drops.
fn replay(path: &Path) {
    let grid = path.grid();
    let mut fresh = Path::new(grid);
    let mut last = fresh.total_cranes();
    for &dir in path.steps() {
        assert!(fresh.is_step_valid(dir), "step {dir:?} from {:?} is invalid", fresh.end());
        fresh.add_step(dir);
        assert!(fresh.total_cranes() >= last);
        last = fresh.total_cranes();
    }
    assert_eq!(fresh.total_cranes(), path.total_cranes());
    assert!(path.visited().iter().all(|&p| grid.contains(p)));
    assert!(path.visited().iter().skip(1).all(|&p| !grid.get_pos(p).is_building()));
}

#[test]
fn single_building_cell() {
    let g = Grid::parse("X").unwrap();
    for solver in [Algorithm::Exhaustive.solver(), Algorithm::Dynamic.solver()] {
        let p = solver.solve(&g);
        assert!(p.is_empty(), "{}", solver.name());
        assert_eq!(p.total_cranes(), 0);
    }
}

#[test]
fn single_opening_cell() {
    let g = Grid::parse("5").unwrap();
    for solver in [Algorithm::Exhaustive.solver(), Algorithm::Dynamic.solver()] {
        let p = solver.solve(&g);
        assert!(p.is_empty(), "{}", solver.name());
        assert_eq!(p.total_cranes(), 5);
    }
}

#[test]
fn two_by_two_scenario() {
    let g = Grid::parse("12\n34").unwrap();
    let brute = exhaustive::solve(&g);
    assert_eq!(brute.total_cranes(), 8);
    assert_eq!(brute.steps(), &[South, East]);
    let dp = dynamic::solve(&g);
    assert_eq!(dp.total_cranes(), 8);
    assert_eq!(dp.steps(), &[South, East]);
}

#[test]
fn buildings_block_the_way() {
    let g = Grid::parse("1X9\n1X9\n111").unwrap();
    let brute = exhaustive::solve(&g);
    let dp = dynamic::solve(&g);
    assert_eq!(brute.total_cranes(), 5);
    assert_eq!(dp.total_cranes(), 5);
    replay(&brute);
    replay(&dp);
}

#[test]
fn path_may_stop_early() {
    let g = Grid::parse("19X\n.X.\n...").unwrap();
    let p = dynamic::solve(&g);
    assert_eq!(p.total_cranes(), 10);
    assert_eq!(p.steps(), &[East]);
    assert_eq!(exhaustive::solve(&g).total_cranes(), 10);
}

#[test]
fn building_start_yields_trivial_path() {
    let g = Grid::parse("X9\n99").unwrap();
    assert!(exhaustive::solve(&g).is_empty());
    assert!(dynamic::solve(&g).is_empty());
    assert_eq!(dynamic::solve(&g).total_cranes(), 0);
}

#[test]
fn exhaustive_keeps_first_found_on_ties() {
    let g = Grid::parse("35\n53").unwrap();
    let p = exhaustive::solve(&g);
    assert_eq!(p.total_cranes(), 11);
    assert_eq!(p.steps(), &[South, East]);

    let zeros = Grid::parse("00\n00").unwrap();
    assert!(exhaustive::solve(&zeros).is_empty());
}

#[test]
fn dynamic_prefers_above_on_ties() {
    let g = Grid::parse("35\n53").unwrap();
    let p = dynamic::solve(&g);
    assert_eq!(p.total_cranes(), 11);
    assert_eq!(p.steps(), &[East, South]);

    let zeros = Grid::parse("00\n00").unwrap();
    assert!(dynamic::solve(&zeros).is_empty());
}

#[test]
#[should_panic(expected = "exceeds step limit")]
fn exhaustive_rejects_oversized_grid() {
    let g = Grid::parse("1111\n1111\n1111").unwrap();
    ExhaustiveSolver::with_step_limit(4).solve(&g);
}

#[test]
fn exhaustive_accepts_grid_just_under_limit() {
    let g = Grid::parse("1111\n1111\n1111").unwrap();
    let p = ExhaustiveSolver::with_step_limit(6).solve(&g);
    assert_eq!(p.total_cranes(), 6);
    assert_eq!(p.len(), 5);
}

#[test]
fn solvers_agree_on_random_grids() {
    for seed in 0..60u64 {
        let rows = 1 + (seed % 5) as usize;
        let columns = 1 + (seed % 7) as usize;
        let g = GridGenerator::new(Some(seed)).generate(rows, columns, 0.25, 9).unwrap();
        let brute = ExhaustiveSolver::new().solve(&g);
        let dp = DynamicSolver::new().solve(&g);
        assert_eq!(brute.total_cranes(), dp.total_cranes(), "seed {seed}\n{}", g.to_pretty_string());
        replay(&brute);
        replay(&dp);
    }
}

#[test]
fn solvers_are_idempotent() {
    let g = GridGenerator::new(Some(42)).generate(5, 5, 0.2, 9).unwrap();
    for solver in [Algorithm::Exhaustive.solver(), Algorithm::Dynamic.solver()] {
        let a = solver.solve(&g);
        let b = solver.solve(&g);
        assert_eq!(a.total_cranes(), b.total_cranes());
        assert_eq!(a.steps(), b.steps());
    }
}

#[test]
fn dynamic_handles_large_grids() {
    let ones = Grid::parse(&vec!["1".repeat(60); 50].join("\n")).unwrap();
    let p = dynamic::solve(&ones);
    assert_eq!(p.total_cranes(), 109);
    assert_eq!(p.len(), ones.max_steps());

    let g = GridGenerator::new(Some(3)).generate(40, 40, 0.3, 9).unwrap();
    replay(&dynamic::solve(&g));
}

#[test]
fn solver_names() {
    assert_eq!(Algorithm::Exhaustive.solver().name(), "Exhaustive");
    assert_eq!(Algorithm::Dynamic.solver().name(), "Dynamic programming");
}
