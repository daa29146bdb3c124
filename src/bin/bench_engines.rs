use rule110::{Board, Engine, NaiveEngine, PackedEngine};
use std::time::Instant;

const N: usize = 1 << 12;
const GENERATIONS: u64 = 100_000;

fn bench<E: Engine<N>>(board: &Board<N>) -> Board<N> {
    let timer = Instant::now();
    let mut engine = E::from_board(board);
    for _ in 0..GENERATIONS {
        engine.update();
    }
    println!("Time on {} generations: {:?}", GENERATIONS, timer.elapsed());
    println!("{}", engine.statistics());
    engine.current_state()
}

fn main() {
    let board = Board::<N>::random(Some(42), 0.5);
    let naive = bench::<NaiveEngine<N>>(&board);
    let packed = bench::<PackedEngine<N>>(&board);
    assert_eq!(naive, packed, "engines diverged");
}
