use crate::{Board, Config, Engine, EngineKind, NaiveEngine, PackedEngine};
use anyhow::{Context, Result};
use std::{
    io::Write,
    time::{Duration, Instant},
};
use tracing::{debug, info, trace};

/// Line written after the last generation, followed by the elapsed seconds.
pub const TIMING_LABEL: &str = "110 rule took the following seconds";

/// Outcome of [`run`].
#[derive(Clone, Debug)]
pub struct RunReport<const N: usize> {
    pub generations: u64,
    /// Wall-clock time of the whole generation loop, output included.
    pub elapsed: Duration,
    pub final_board: Board<N>,
}

/// Runs the automaton from the seeded board of `N` cells.
///
/// Every produced generation is written to `out` as one line of glyphs as
/// soon as it is computed (the seed itself is not written). The loop is
/// followed by [`TIMING_LABEL`] and the elapsed time in seconds.
pub fn run<const N: usize>(config: &Config, out: &mut impl Write) -> Result<RunReport<N>> {
    info!(
        board_size = N,
        generations = config.generations,
        engine = ?config.engine,
        "starting run"
    );
    let (elapsed, final_board) = match config.engine {
        EngineKind::Naive => run_engine(NaiveEngine::<N>::seeded(), config.generations, out)?,
        EngineKind::Packed => run_engine(PackedEngine::<N>::seeded(), config.generations, out)?,
    };

    writeln!(out, "{}", TIMING_LABEL).context("failed to write timing label")?;
    writeln!(out, "{}", format_seconds(elapsed)).context("failed to write elapsed time")?;
    out.flush().context("failed to flush output")?;

    info!(
        elapsed = ?elapsed,
        population = final_board.population(),
        "run finished"
    );
    Ok(RunReport {
        generations: config.generations,
        elapsed,
        final_board,
    })
}

/// Seconds as a float literal, `0.0` rather than `0` for a zero duration.
fn format_seconds(elapsed: Duration) -> String {
    format!("{:?}", elapsed.as_secs_f64())
}

fn run_engine<const N: usize, E: Engine<N>>(
    mut engine: E,
    generations: u64,
    out: &mut impl Write,
) -> Result<(Duration, Board<N>)> {
    let timer = Instant::now();
    for _ in 0..generations {
        engine.update();
        let board = engine.current_state();
        writeln!(out, "{}", board)
            .with_context(|| format!("failed to write generation {}", engine.generation()))?;
        trace!(generation = engine.generation(), population = board.population());
    }
    let elapsed = timer.elapsed();
    debug!("{}", engine.statistics());
    Ok((elapsed, engine.current_state()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of<const N: usize>(config: &Config) -> (Vec<String>, RunReport<N>) {
        let mut out = Vec::new();
        let report = run::<N>(config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        (text.lines().map(str::to_owned).collect(), report)
    }

    #[test]
    fn test_zero_generations() {
        let (lines, report) = output_of::<10>(&Config::default().with_generations(0));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], TIMING_LABEL);
        assert!(lines[1].parse::<f64>().unwrap() >= 0.);
        assert_eq!(report.final_board, Board::seeded());
    }

    #[test]
    fn test_first_generations() {
        let (lines, report) = output_of::<5>(&Config::default().with_generations(3));
        assert_eq!(&lines[..3], ["   xx", "  xxx", " xx x"]);
        assert_eq!(report.generations, 3);
        assert_eq!(report.final_board.to_string(), lines[2]);
    }

    #[test]
    fn test_seconds_always_have_fraction() {
        assert_eq!(format_seconds(Duration::ZERO), "0.0");
        assert_eq!(format_seconds(Duration::from_secs(2)), "2.0");
        assert_eq!(format_seconds(Duration::from_millis(1500)), "1.5");
    }

    #[test]
    fn test_write_error_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let err = run::<8>(&Config::default(), &mut Broken).unwrap_err();
        assert!(err.to_string().contains("generation 1"));
    }
}
