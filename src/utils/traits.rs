use crate::Board;

/// Rule 110 engine over a board of `N` cells
pub trait Engine<const N: usize> {
    /// Create an engine holding the given generation.
    fn from_board(board: &Board<N>) -> Self
    where
        Self: Sized;

    /// Create an engine holding the initial generation (single alive cell on the right).
    fn seeded() -> Self
    where
        Self: Sized,
    {
        Self::from_board(&Board::seeded())
    }

    /// Get the current generation.
    fn current_state(&self) -> Board<N>;

    /// Advance the board by one generation.
    ///
    /// Interior cells follow the rule, the leftmost cell becomes dead
    /// and the rightmost cell becomes alive.
    fn update(&mut self);

    /// Number of generations produced since the engine was created.
    fn generation(&self) -> u64;

    /// Total number of alive cells on the board.
    fn population(&self) -> usize;

    /// Memory used by the cell storage of the engine, in bytes.
    fn bytes_total(&self) -> usize;

    /// Returns multiline string reporting engine stats.
    fn statistics(&self) -> String;
}
