use crate::next_state;
use anyhow::{anyhow, Result};
use std::{fmt, str::FromStr};

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    pub const DEAD_GLYPH: char = ' ';
    pub const ALIVE_GLYPH: char = 'x';

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn glyph(self) -> char {
        match self {
            CellState::Dead => Self::DEAD_GLYPH,
            CellState::Alive => Self::ALIVE_GLYPH,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            Self::DEAD_GLYPH => Some(CellState::Dead),
            Self::ALIVE_GLYPH => Some(CellState::Alive),
            _ => None,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// One generation of the automaton: exactly `N` cells, `N >= 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [CellState; N],
}

impl<const N: usize> Board<N> {
    /// Board with every cell dead.
    pub fn blank() -> Self {
        const { assert!(N >= 1, "board must contain at least one cell") };
        Self {
            cells: [CellState::Dead; N],
        }
    }

    /// Initial generation: every cell dead except the rightmost one.
    pub fn seeded() -> Self {
        let mut board = Self::blank();
        board.cells[N - 1] = CellState::Alive;
        board
    }

    /// Create a board with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// `fill_rate` - probability of a cell being alive, clamped to `[0, 1]`
    ///
    /// # Panics
    ///
    /// Panics if `fill_rate` is NaN.
    pub fn random(seed: Option<u64>, fill_rate: f64) -> Self {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        assert!(!fill_rate.is_nan(), "fill rate must be a number");
        let fill_rate = fill_rate.clamp(0., 1.);
        let mut board = Self::blank();
        for cell in board.cells.iter_mut() {
            *cell = CellState::from(rng.gen_bool(fill_rate));
        }
        board
    }

    pub fn from_cells(cells: [CellState; N]) -> Self {
        const { assert!(N >= 1, "board must contain at least one cell") };
        Self { cells }
    }

    pub fn cells(&self) -> &[CellState; N] {
        &self.cells
    }

    pub fn get(&self, i: usize) -> CellState {
        self.cells[i]
    }

    pub fn set(&mut self, i: usize, state: CellState) {
        self.cells[i] = state;
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

/// Derives the next generation.
///
/// Interior cells follow the rule; the leftmost cell is always dead and the
/// rightmost always alive (for `N == 1` the single cell ends up alive).
pub fn advance<const N: usize>(board: &Board<N>) -> Board<N> {
    let cells = &board.cells;
    let mut next = Board::blank();
    for i in 1..N.saturating_sub(1) {
        next.cells[i] = next_state(cells[i - 1], cells[i], cells[i + 1]);
    }
    next.cells[0] = CellState::Dead;
    next.cells[N - 1] = CellState::Alive;
    next
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line: String = self.cells.iter().map(|c| c.glyph()).collect();
        f.write_str(&line)
    }
}

impl<const N: usize> FromStr for Board<N> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != N {
            return Err(anyhow!("expected a line of {} cells, got {}", N, len));
        }
        let mut board = Self::blank();
        for (i, glyph) in s.chars().enumerate() {
            board.cells[i] = CellState::from_glyph(glyph)
                .ok_or_else(|| anyhow!("unexpected glyph {:?} at position {}", glyph, i))?;
        }
        Ok(board)
    }
}
