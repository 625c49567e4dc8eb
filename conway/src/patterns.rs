// patterns.rs - Well-known starting patterns

use crate::Grid;

/// A named pattern drawn as text rows, `O` for a live cell.
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

impl Pattern {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Live cells as (row, col) offsets from the pattern's top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, marker)| marker == b'O')
                .map(move |(col, _)| (row, col))
        })
    }

    /// Draws the pattern centred on `grid`, wrapping past the edges.
    pub fn stamp(&self, grid: &mut Grid) {
        let top = grid.rows().saturating_sub(self.height()) / 2;
        let left = grid.cols().saturating_sub(self.width()) / 2;
        for (row, col) in self.cells() {
            grid.set(top + row, left + col, true);
        }
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        rows: &[
            ".O.",
            "..O",
            "OOO",
        ],
    },
    Pattern {
        name: "Blinker",
        rows: &["OOO"],
    },
    Pattern {
        name: "Toad",
        rows: &[
            ".OOO",
            "OOO.",
        ],
    },
    Pattern {
        name: "Beacon",
        rows: &[
            "OO..",
            "OO..",
            "..OO",
            "..OO",
        ],
    },
    Pattern {
        name: "Pulsar",
        rows: &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    },
    Pattern {
        name: "R-pentomino",
        rows: &[
            ".OO",
            "OO.",
            ".O.",
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        rows: &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}
