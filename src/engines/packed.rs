use crate::{Board, CellState, Engine};

/// Bit-parallel engine that updates 64 cells per machine word.
///
/// Cell `i` is stored in bit `i % 64` of `data[i / 64]`; bits past the
/// end of the board are always zero.
///
/// # Example
///
/// ```rust
/// use rule110::{Board, Engine, PackedEngine};
///
/// let mut engine = PackedEngine::<100>::seeded();
/// engine.update();
/// assert_eq!(engine.population(), 2);
/// assert_eq!(engine.current_state(), rule110::advance(&Board::seeded()));
/// ```
pub struct PackedEngine<const N: usize> {
    data: Vec<u64>,
    generation: u64,
}

impl<const N: usize> PackedEngine<N> {
    const CELLS_IN_CHUNK: usize = 64;
    const CHUNKS: usize = N.div_ceil(Self::CELLS_IN_CHUNK);

    /// Mask of the bits of the last word that belong to the board.
    fn tail_mask() -> u64 {
        match N % Self::CELLS_IN_CHUNK {
            0 => u64::MAX,
            rem => (1 << rem) - 1,
        }
    }

    fn update_inner(&mut self) {
        let shift = Self::CELLS_IN_CHUNK - 1;
        let w = self.data.len();
        // original value of the previous word, already overwritten in `data`
        let mut prev = 0u64;
        for x in 0..w {
            let c = self.data[x];
            let next = if x + 1 < w { self.data[x + 1] } else { 0 };
            let l = (c << 1) | (prev >> shift);
            let r = (c >> 1) | (next << shift);
            self.data[x] = (c ^ r) | (c & !l);
            prev = c;
        }

        self.data[0] &= !1;
        self.data[w - 1] &= Self::tail_mask();
        let last = N - 1;
        self.data[last / Self::CELLS_IN_CHUNK] |= 1 << (last % Self::CELLS_IN_CHUNK);
    }
}

impl<const N: usize> Engine<N> for PackedEngine<N> {
    fn from_board(board: &Board<N>) -> Self {
        let mut data = vec![0u64; Self::CHUNKS];
        for (i, cell) in board.cells().iter().enumerate() {
            if cell.is_alive() {
                data[i / Self::CELLS_IN_CHUNK] |= 1 << (i % Self::CELLS_IN_CHUNK);
            }
        }
        Self {
            data,
            generation: 0,
        }
    }

    fn current_state(&self) -> Board<N> {
        let mut board = Board::blank();
        for i in 0..N {
            let bit = self.data[i / Self::CELLS_IN_CHUNK] >> (i % Self::CELLS_IN_CHUNK) & 1;
            board.set(i, CellState::from(bit == 1));
        }
        board
    }

    fn update(&mut self) {
        self.update_inner();
        self.generation += 1;
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> usize {
        self.data.iter().map(|x| x.count_ones() as usize).sum()
    }

    fn bytes_total(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<u64>()
    }

    fn statistics(&self) -> String {
        super::format_statistics("packed", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{advance, CellState::Alive as A, CellState::Dead as D};

    #[test]
    fn test_word_boundaries() {
        // an alive cell on each side of a word boundary
        let mut board = Board::<130>::blank();
        board.set(63, A);
        board.set(64, A);
        board.set(128, A);
        let mut engine = PackedEngine::from_board(&board);
        assert_eq!(engine.current_state(), board);
        for _ in 0..50 {
            board = advance(&board);
            engine.update();
            assert_eq!(engine.current_state(), board);
        }
    }

    #[test]
    fn test_padding_stays_clear() {
        let mut engine = PackedEngine::<70>::from_board(&Board::from_cells([A; 70]));
        for _ in 0..10 {
            engine.update();
            assert_eq!(engine.data[1] & !PackedEngine::<70>::tail_mask(), 0);
        }
    }

    #[test]
    fn test_exact_word_width() {
        let board = Board::<64>::random(Some(7), 0.5);
        let mut engine = PackedEngine::from_board(&board);
        engine.update();
        assert_eq!(engine.current_state(), advance(&board));
        assert!(engine.bytes_total() >= 8);
    }

    #[test]
    fn test_single_cell() {
        let mut engine = PackedEngine::<1>::from_board(&Board::from_cells([D]));
        engine.update();
        assert_eq!(engine.current_state(), Board::from_cells([A]));
        assert_eq!(engine.generation(), 1);
    }
}
