use std::time::{Duration, Instant};

use quantum::QuantumResult;
use statevec::QubitRegister;
use tracing::info;

mod output;
pub mod shots;

pub use output::write_counts_csv;
pub use shots::{
    deutsch_jozsa_shots, gate_shots, grover_shots, Counts, DeutschJozsaRun, GroverRun, Tally,
};

/// Times `depth` single-qubit Hadamards over an `n`-qubit register, with a
/// full QFT after every sweep across the register.
pub fn benchmark(n: usize, depth: usize) -> QuantumResult<Duration> {
    let mut reg = QubitRegister::new(n)?;

    let start = Instant::now();
    for t in 0..depth {
        quantum::hadamard(&mut reg, Some(t % n + 1))?;
        if t % n == n - 1 {
            quantum::qft(&mut reg);
        }
    }
    let elapsed = start.elapsed();

    info!(
        n,
        depth,
        secs = elapsed.as_secs_f64(),
        "benchmark finished"
    );
    Ok(elapsed)
}
