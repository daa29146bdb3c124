use crate::CellState;

/// Wolfram code of the automaton: bit `p` is the next state of neighborhood pattern `p`.
pub const RULE_NUMBER: u8 = 110;

/// Next state of the center cell given its 3-cell neighborhood.
///
/// The neighborhood is read as a 3-bit pattern (left is the high bit),
/// and the result is the corresponding bit of [`RULE_NUMBER`].
pub fn next_state(left: CellState, center: CellState, right: CellState) -> CellState {
    let pattern = ((left as u8) << 2) | ((center as u8) << 1) | right as u8;
    CellState::from((RULE_NUMBER >> pattern) & 1 == 1)
}
