use conway::{Dimensions, Game, Grid, patterns};
use rand::SeedableRng;

const SEED: u64 = 42;

fn random_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    Grid::random_with(Dimensions::new(rows, cols).unwrap(), 0.3, &mut rng)
}

/// Copy of `grid` moved by (`dr`, `dc`) with wraparound.
fn shifted(grid: &Grid, dr: usize, dc: usize) -> Grid {
    let mut out = Grid::empty(grid.dimensions());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.set(row + dr, col + dc, grid.get(row, col));
        }
    }
    out
}

#[test]
fn dead_grid_stays_dead() {
    let grid = Grid::empty(Dimensions::DEFAULT);
    assert!(grid.next_generation().is_empty());
}

#[test]
fn lone_cell_dies() {
    let mut grid = Grid::empty(Dimensions::DEFAULT);
    grid.set(10, 10, true);
    assert!(grid.next_generation().is_empty());
}

#[test]
fn three_neighbors_always_give_a_live_cell() {
    let dead_center = Grid::parse(&[
        ".....",
        ".#.#.",
        ".....",
        "..#..",
        ".....",
    ])
    .unwrap();
    let live_center = Grid::parse(&[
        ".....",
        ".#.#.",
        "..#..",
        "..#..",
        ".....",
    ])
    .unwrap();
    assert_eq!(dead_center.live_neighbors(2, 2), 3);
    assert_eq!(live_center.live_neighbors(2, 2), 3);
    assert!(dead_center.next_generation().get(2, 2));
    assert!(live_center.next_generation().get(2, 2));
}

#[test]
fn two_or_three_neighbors_keep_a_cell_alive() {
    // Block: every cell has three neighbors.
    let block = Grid::parse(&[
        "....",
        ".##.",
        ".##.",
        "....",
    ])
    .unwrap();
    assert_eq!(block.next_generation(), block);

    // Middle of a blinker has two neighbors.
    let blinker = Grid::parse(&[
        ".....",
        ".....",
        ".###.",
        ".....",
        ".....",
    ])
    .unwrap();
    assert_eq!(blinker.live_neighbors(2, 2), 2);
    assert!(blinker.next_generation().get(2, 2));
}

#[test]
fn crowded_cells_die() {
    let plus = Grid::parse(&[
        ".....",
        "..#..",
        ".###.",
        "..#..",
        ".....",
    ])
    .unwrap();
    assert_eq!(plus.live_neighbors(2, 2), 4);
    assert!(!plus.next_generation().get(2, 2));
}

#[test]
fn stepping_is_deterministic() {
    let grid = random_grid(30, 40, SEED);
    let a = grid.next_generation();
    let b = grid.next_generation();
    assert_eq!(a, b);

    let mut buffer = Grid::empty(grid.dimensions());
    grid.step_into(&mut buffer);
    assert_eq!(buffer, a);
}

#[test]
fn neighbor_count_never_leaves_the_grid() {
    for rows in 1..=4 {
        for cols in 1..=4 {
            let grid = random_grid(rows, cols, SEED + (rows * 10 + cols) as u64);
            for row in 0..rows {
                for col in 0..cols {
                    assert!(grid.live_neighbors(row, col) <= 8);
                }
            }
            assert_eq!(grid.next_generation().dimensions(), grid.dimensions());
        }
    }
}

#[test]
fn full_row_on_three_by_three_torus() {
    // Every cell of a 3x3 torus neighbors all eight others.
    let grid = Grid::parse(&[
        "###",
        "...",
        "...",
    ])
    .unwrap();
    for col in 0..3 {
        assert_eq!(grid.live_neighbors(0, col), 2);
        assert_eq!(grid.live_neighbors(1, col), 3);
        assert_eq!(grid.live_neighbors(2, col), 3);
    }

    let next = grid.next_generation();
    assert_eq!(
        next,
        Grid::parse(&[
            "###",
            "###",
            "###",
        ])
        .unwrap()
    );
    assert!(next.next_generation().is_empty());
}

#[test]
fn glider_crosses_the_edges() {
    let dims = Dimensions::new(8, 8).unwrap();
    let mut grid = Grid::empty(dims);
    for (row, col) in patterns::find("Glider").unwrap().cells() {
        grid.set(row, col, true);
    }
    let start = grid.clone();

    for _ in 0..4 {
        grid = grid.next_generation();
    }
    assert_eq!(grid, shifted(&start, 1, 1));

    for _ in 4..32 {
        grid = grid.next_generation();
    }
    assert_eq!(grid, start);
}

#[test]
fn session_lifecycle() {
    let mut game = Game::default();
    game.apply_pattern(patterns::find("Pulsar").unwrap());
    let pulsar = game.grid().clone();

    for _ in 0..3 {
        game.step();
    }
    assert_eq!(game.generation(), 3);
    assert_eq!(game.grid(), &pulsar);

    game.toggle_cell(0, 0);
    assert_eq!(game.generation(), 3);
    assert_eq!(game.population(), pulsar.population() + 1);

    game.clear();
    assert_eq!(game.generation(), 0);
    assert!(game.grid().is_empty());
}
