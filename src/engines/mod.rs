mod naive;
mod packed;

pub use naive::NaiveEngine;
pub use packed::PackedEngine;

use crate::Engine;

/// Statistics block shared by the engines; `name` identifies the engine.
fn format_statistics<const N: usize>(name: &str, engine: &impl Engine<N>) -> String {
    let population = engine.population();
    format!(
        "Engine: {}\nGeneration: {}\nAlive cells: {} / {} ({:.1}%)\nMemory: {} bytes",
        name,
        engine.generation(),
        population,
        N,
        100. * population as f64 / N as f64,
        engine.bytes_total(),
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        Board, CellState::Alive as A, CellState::Dead as D, Engine, NaiveEngine, PackedEngine,
    };

    #[test]
    fn test_statistics() {
        let mut engine = PackedEngine::from_board(&Board::from_cells([D, D, D, A]));
        engine.update();
        let stats = engine.statistics();
        assert!(stats.starts_with("Engine: packed\nGeneration: 1\n"));
        assert!(stats.contains("Alive cells: 2 / 4 (50.0%)"));
        assert!(stats.ends_with(" bytes"));
    }

    #[test]
    fn test_naive_statistics() {
        let engine = NaiveEngine::<4>::seeded();
        assert_eq!(
            engine.statistics(),
            "Engine: naive\nGeneration: 0\nAlive cells: 1 / 4 (25.0%)\nMemory: 4 bytes"
        );
    }
}
