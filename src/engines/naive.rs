use crate::{advance, Board, Engine};

/// Cell-by-cell engine: applies [`advance`] to a [`Board`] of cell states.
pub struct NaiveEngine<const N: usize> {
    board: Board<N>,
    generation: u64,
}

impl<const N: usize> Engine<N> for NaiveEngine<N> {
    fn from_board(board: &Board<N>) -> Self {
        Self {
            board: board.clone(),
            generation: 0,
        }
    }

    fn current_state(&self) -> Board<N> {
        self.board.clone()
    }

    fn update(&mut self) {
        self.board = advance(&self.board);
        self.generation += 1;
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> usize {
        self.board.population()
    }

    fn bytes_total(&self) -> usize {
        std::mem::size_of::<Board<N>>()
    }

    fn statistics(&self) -> String {
        super::format_statistics("naive", self)
    }
}
