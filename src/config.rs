use crate::GENERATIONS;

/// Engine used to produce the generations of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EngineKind {
    /// Cell-by-cell update, see [`crate::NaiveEngine`].
    #[default]
    Naive,
    /// 64 cells per word, see [`crate::PackedEngine`].
    Packed,
}

/// Parameters of a run. The board width is the const parameter of [`crate::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub generations: u64,
    pub engine: EngineKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generations: GENERATIONS,
            engine: EngineKind::default(),
        }
    }
}

impl Config {
    pub fn with_generations(mut self, generations: u64) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }
}
