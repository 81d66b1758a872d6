//! Repeated runs of an algorithm on fresh registers.
//!
//! Each shot gets its own register and its own RNG stream forked from the
//! seed, so shots run in parallel and a tally depends only on the seed.

use std::collections::BTreeMap;

use quantum::{
    deutsch_jozsa, grover_search, measurement::{sample_counts, to_bitstring}, QuantumResult,
    Step, Verdict,
};
use rayon::prelude::*;
use rng::ShakeRng;
use statevec::{QubitRegister, Transform};

/// Measured bitstring to number of occurrences.
pub type Counts = BTreeMap<String, usize>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub counts: Counts,
    pub shots: usize,
}

impl Tally {
    fn record(&mut self, bits: String) {
        *self.counts.entry(bits).or_insert(0) += 1;
        self.shots += 1;
    }

    pub fn frequency(&self, bits: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        *self.counts.get(bits).unwrap_or(&0) as f64 / self.shots as f64
    }

    /// Most frequent bitstring; ties go to the smallest string.
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&str, usize)>, (bits, &n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((bits.as_str(), n)),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeutschJozsaRun {
    pub tally: Tally,
    pub constant: usize,
    pub balanced: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroverRun {
    pub tally: Tally,
    /// Input value to the number of shots that returned it.
    pub inputs: BTreeMap<usize, usize>,
    pub iterations: usize,
}

impl GroverRun {
    /// Fraction of shots that returned `marked`.
    pub fn success_rate(&self, marked: usize) -> f64 {
        if self.tally.shots == 0 {
            return 0.0;
        }
        *self.inputs.get(&marked).unwrap_or(&0) as f64 / self.tally.shots as f64
    }
}

pub(crate) fn shot_rng(seed: &str, label: &str, shot: usize) -> ShakeRng {
    ShakeRng::new(seed.as_bytes()).fork(format!("{}-shot-{}", label, shot).as_bytes())
}

pub fn deutsch_jozsa_shots<O>(
    qubits: usize,
    oracle: &O,
    shots: usize,
    seed: &str,
) -> QuantumResult<DeutschJozsaRun>
where
    O: Transform + Sync + ?Sized,
{
    let outcomes: Vec<_> = (0..shots)
        .into_par_iter()
        .map(|t| {
            let mut rng = shot_rng(seed, "dj", t);
            let mut reg = QubitRegister::new(qubits)?;
            deutsch_jozsa(&mut reg, oracle, &mut rng)
        })
        .collect::<QuantumResult<_>>()?;

    let mut run = DeutschJozsaRun::default();
    for out in outcomes {
        match out.verdict {
            Verdict::Constant => run.constant += 1,
            Verdict::Balanced => run.balanced += 1,
        }
        run.tally.record(out.bits);
    }
    Ok(run)
}

pub fn grover_shots<O>(
    qubits: usize,
    oracle: &O,
    shots: usize,
    seed: &str,
) -> QuantumResult<GroverRun>
where
    O: Transform + Sync + ?Sized,
{
    let outcomes: Vec<_> = (0..shots)
        .into_par_iter()
        .map(|t| {
            let mut rng = shot_rng(seed, "grover", t);
            let mut reg = QubitRegister::new(qubits)?;
            grover_search(&mut reg, oracle, &mut rng)
        })
        .collect::<QuantumResult<_>>()?;

    let mut run = GroverRun {
        iterations: quantum::grover_iterations(qubits),
        ..GroverRun::default()
    };
    for out in outcomes {
        *run.inputs.entry(out.input).or_insert(0) += 1;
        run.tally.record(out.bits);
    }
    Ok(run)
}

/// Runs a gate program once and samples the resulting state `shots` times
/// without collapsing it. The prepared register is returned with the tally.
pub fn gate_shots(
    qubits: usize,
    steps: &[Step],
    shots: usize,
    seed: &str,
) -> QuantumResult<(QubitRegister, Tally)> {
    let mut reg = QubitRegister::new(qubits)?;
    for step in steps {
        step.run(&mut reg)?;
    }

    let mut rng = shot_rng(seed, "gates", 0);
    let mut tally = Tally::default();
    for (index, n) in sample_counts(&reg, &mut rng, shots) {
        tally.counts.insert(to_bitstring(index, qubits), n);
        tally.shots += n;
    }
    Ok((reg, tally))
}
