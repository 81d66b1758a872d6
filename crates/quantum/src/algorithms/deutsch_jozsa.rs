use std::fmt;

use rng::UniformSource;
use statevec::{QubitRegister, Transform};
use tracing::debug;

use super::{hadamard_inputs, prepare, require_ancilla};
use crate::error::QuantumResult;
use crate::measurement::measure_to_bitstring;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Constant,
    Balanced,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Constant => f.write_str("constant"),
            Verdict::Balanced => f.write_str("balanced"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeutschJozsaOutcome {
    /// Measured register, position `n` first and the ancilla last.
    pub bits: String,
    pub verdict: Verdict,
}

/// Decides whether the function hidden in `oracle` is constant or balanced
/// with a single oracle query.
///
/// The oracle must implement `|x, y> -> |x, y ⊕ f(x)>` with the ancilla `y`
/// at position 1 and `f` promised to be constant or balanced.
pub fn deutsch_jozsa<O, R>(
    reg: &mut QubitRegister,
    oracle: &O,
    rng: &mut R,
) -> QuantumResult<DeutschJozsaOutcome>
where
    O: Transform + ?Sized,
    R: UniformSource + ?Sized,
{
    require_ancilla(reg)?;

    prepare(reg)?;
    if !reg.apply(oracle).is_committed() {
        debug!("oracle output was not normalized and has been ignored");
    }
    hadamard_inputs(reg)?;

    let bits = measure_to_bitstring(reg, rng);
    let verdict = verdict_for(&bits);
    debug!(%bits, %verdict, "deutsch-jozsa finished");

    Ok(DeutschJozsaOutcome { bits, verdict })
}

/// Any `1` among the input bits (everything but the trailing ancilla bit)
/// means balanced.
pub fn verdict_for(bits: &str) -> Verdict {
    let inputs = &bits[..bits.len().saturating_sub(1)];
    if inputs.contains('1') {
        Verdict::Balanced
    } else {
        Verdict::Constant
    }
}
