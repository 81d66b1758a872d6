use std::f64::consts::FRAC_PI_4;

use rng::UniformSource;
use statevec::{QubitRegister, Transform, C64};
use tracing::debug;

use super::{hadamard_inputs, prepare, require_ancilla};
use crate::error::QuantumResult;
use crate::measurement::{measure_to_int, to_bitstring};

/// Number of diffusion rounds for an `n`-qubit register:
/// `floor(sqrt(2^n) · π/4) - 1`, never below zero.
///
/// One less than the usual bound. With the single oracle query made before
/// the loop, each round is a reflection, so for `n = 3` the one round this
/// yields concentrates the full probability on the marked input while a
/// second round would undo it.
pub fn grover_iterations(qubits: usize) -> usize {
    let bound = ((qubits as f64).exp2().sqrt() * FRAC_PI_4).floor() as usize;
    bound.saturating_sub(1)
}

/// Phase flip about the all-zero input: indices 0 and 1 (input zero with
/// either ancilla value) keep their sign, all others are negated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diffusion;

impl Transform for Diffusion {
    fn transform(&self, amplitudes: &[C64]) -> Vec<C64> {
        amplitudes
            .iter()
            .enumerate()
            .map(|(i, &a)| if i < 2 { a } else { -a })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroverOutcome {
    /// Measured register, position `n` first and the ancilla last.
    pub bits: String,
    /// Measured basis index.
    pub index: usize,
    /// Input value `x` read from the index, ancilla dropped.
    pub input: usize,
    pub iterations: usize,
}

/// Runs everything up to measurement: state preparation, one oracle query
/// and the diffusion rounds. Returns the number of rounds.
pub fn amplify<O>(reg: &mut QubitRegister, oracle: &O) -> QuantumResult<usize>
where
    O: Transform + ?Sized,
{
    require_ancilla(reg)?;

    prepare(reg)?;
    if !reg.apply(oracle).is_committed() {
        debug!("oracle output was not normalized and has been ignored");
    }

    let iterations = grover_iterations(reg.size());
    for round in 0..iterations {
        hadamard_inputs(reg)?;
        reg.apply(&Diffusion);
        hadamard_inputs(reg)?;
        debug!(round, "diffusion round applied");
    }
    Ok(iterations)
}

/// Searches for the single input accepted by `oracle` and measures.
pub fn grover_search<O, R>(
    reg: &mut QubitRegister,
    oracle: &O,
    rng: &mut R,
) -> QuantumResult<GroverOutcome>
where
    O: Transform + ?Sized,
    R: UniformSource + ?Sized,
{
    let iterations = amplify(reg, oracle)?;

    let index = measure_to_int(reg, rng);
    let bits = to_bitstring(index, reg.size());
    debug!(%bits, iterations, "grover search finished");

    Ok(GroverOutcome {
        bits,
        index,
        input: index >> 1,
        iterations,
    })
}

/// Probability of reading input `x` regardless of the ancilla.
pub fn input_probability(reg: &QubitRegister, input: usize) -> f64 {
    reg.probability(input << 1) + reg.probability((input << 1) | 1)
}

#[cfg(test)]
mod tests {
    use super::{grover_iterations, Diffusion};
    use statevec::{Transform, C64};

    #[test]
    fn iteration_counts() {
        assert_eq!(grover_iterations(1), 0);
        assert_eq!(grover_iterations(2), 0);
        assert_eq!(grover_iterations(3), 1);
        assert_eq!(grover_iterations(4), 2);
        assert_eq!(grover_iterations(5), 3);
        assert_eq!(grover_iterations(6), 5);
    }

    #[test]
    fn diffusion_keeps_first_pair() {
        let a: Vec<C64> = (0..4).map(|i| C64::new(i as f64, 0.0)).collect();
        let out = Diffusion.transform(&a);
        assert_eq!(out[0], C64::new(0.0, 0.0));
        assert_eq!(out[1], C64::new(1.0, 0.0));
        assert_eq!(out[2], C64::new(-2.0, 0.0));
        assert_eq!(out[3], C64::new(-3.0, 0.0));
    }
}
