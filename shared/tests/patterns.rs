use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{Grid, RuleTable};

fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    for &(col, row) in alive {
        grid.set_at(col, row, true).unwrap();
    }
    grid
}

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    (0..grid.size())
        .filter(|&idx| grid.get(idx).unwrap())
        .map(|idx| grid.coords_of(idx).unwrap())
        .collect()
}

fn assert_alive(grid: &Grid, cells: &[(usize, usize)]) {
    for &(col, row) in cells {
        assert!(grid.get_at(col, row).unwrap(), "expected alive at ({col},{row})");
    }
}

fn assert_dead(grid: &Grid, cells: &[(usize, usize)]) {
    for &(col, row) in cells {
        assert!(!grid.get_at(col, row).unwrap(), "expected dead at ({col},{row})");
    }
}

#[test]
fn block_is_stable() {
    let block = [(2, 2), (3, 2), (2, 3), (3, 3)];
    let mut grid = grid_with(6, 6, &block);
    let start = grid.snapshot();
    for _ in 0..10 {
        grid.advance();
        assert_eq!(grid.snapshot(), start);
    }
}

#[test]
fn blinker_has_period_two() {
    let horizontal = [(1, 2), (2, 2), (3, 2)];
    let vertical = [(2, 1), (2, 2), (2, 3)];
    let mut grid = grid_with(5, 5, &horizontal);
    let start = grid.snapshot();

    grid.advance();
    assert_eq!(live_cells(&grid), vertical);

    grid.advance();
    assert_eq!(live_cells(&grid), horizontal);
    assert_eq!(grid.snapshot(), start);
}

#[test]
fn isolated_cells_die() {
    let mut lonely = grid_with(5, 5, &[(2, 2)]);
    lonely.advance();
    assert_eq!(lonely.population(), 0);

    let mut pair = grid_with(5, 5, &[(1, 1), (2, 1)]);
    pair.advance();
    assert_eq!(pair.population(), 0);
}

#[test]
fn crowded_cell_dies() {
    let square: Vec<_> = (1..4).flat_map(|r| (1..4).map(move |c| (c, r))).collect();
    let mut grid = grid_with(5, 5, &square);
    assert_eq!(grid.neighbour_count(grid.index_of(2, 2).unwrap()).unwrap(), 8);
    grid.advance();
    assert_dead(&grid, &[(2, 2)]);
}

#[test]
fn dead_cell_with_three_neighbours_is_born() {
    let mut grid = grid_with(5, 5, &[(1, 1), (3, 1), (2, 3)]);
    assert_eq!(grid.neighbour_count(grid.index_of(2, 2).unwrap()).unwrap(), 3);
    grid.advance();
    assert_alive(&grid, &[(2, 2)]);
}

#[test]
fn left_edge_ignores_right_edge() {
    // Wrapped, (0,2) would see (4,2) as a second neighbour and survive.
    let cells = [(0, 2), (1, 2), (4, 2)];
    let mut bounded = grid_with(5, 5, &cells);
    bounded.advance();
    assert_dead(&bounded, &[(0, 2)]);

    let mut wrapped = grid_with(5, 5, &cells).with_wrap(true);
    wrapped.advance();
    assert_alive(&wrapped, &[(0, 2)]);
}

#[test]
fn top_edge_ignores_bottom_edge() {
    // Wrapped, (2,0) would gain a third neighbour from row 4 and be born.
    let cells = [(1, 1), (3, 1), (2, 4)];
    let mut bounded = grid_with(5, 5, &cells);
    bounded.advance();
    assert_dead(&bounded, &[(2, 0)]);

    let mut wrapped = grid_with(5, 5, &cells).with_wrap(true);
    wrapped.advance();
    assert_alive(&wrapped, &[(2, 0)]);
}

#[test]
fn right_and_bottom_edges_ignore_opposite_edges() {
    let cells = [(4, 2), (3, 2), (0, 2)];
    let mut grid = grid_with(5, 5, &cells);
    grid.advance();
    assert_dead(&grid, &[(4, 2)]);

    let cells = [(1, 3), (3, 3), (2, 0)];
    let mut grid = grid_with(5, 5, &cells);
    grid.advance();
    assert_dead(&grid, &[(2, 4)]);
}

#[test]
fn glider_circles_a_torus() {
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut grid = grid_with(8, 8, &glider).with_wrap(true);
    let start = grid.snapshot();
    grid.advance_by(32);
    assert_eq!(grid.snapshot(), start);
    assert_eq!(grid.generation(), 32);
}

#[test]
fn addressing_round_trips() {
    for (width, height) in [(1, 1), (1, 9), (9, 1), (80, 25)] {
        let grid = Grid::new(width, height).unwrap();
        for idx in 0..grid.size() {
            let (col, row) = grid.coords_of(idx).unwrap();
            assert_eq!(grid.index_of(col, row).unwrap(), idx);
        }
    }
}

#[test]
fn snapshots_are_point_in_time() {
    let mut grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    grid.advance();
    let frame = grid.snapshot();
    let copy = frame.clone();

    grid.set_at(0, 0, true).unwrap();
    grid.set_at(2, 2, false).unwrap();
    grid.advance();

    assert_eq!(frame, copy);
    assert_eq!(frame.get(0, 0), Some(false));
    assert_eq!(frame.get(2, 2), Some(true));
    assert_eq!(frame.population(), 3);
}

#[test]
fn rows_scan_in_row_major_order() {
    let grid = grid_with(3, 2, &[(2, 0), (0, 1)]);
    let rows: Vec<Vec<bool>> = grid.rows().map(<[bool]>::to_vec).collect();
    assert_eq!(rows, vec![vec![false, false, true], vec![true, false, false]]);
    let snapshot_rows: Vec<Vec<bool>> = grid.snapshot().rows().map(<[bool]>::to_vec).collect();
    assert_eq!(rows, snapshot_rows);
}

#[test]
fn equivalent_rule_tables_evolve_identically() {
    let mut default = Grid::new(40, 20).unwrap();
    default.randomize(&mut StdRng::seed_from_u64(3), 0.3).unwrap();
    let mut parsed = default
        .clone()
        .with_rules("B3/S23".parse::<RuleTable>().unwrap());

    for _ in 0..25 {
        default.advance();
        parsed.advance();
        assert_eq!(default.snapshot(), parsed.snapshot());
    }
}
