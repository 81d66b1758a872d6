use std::collections::BTreeMap;

use rng::UniformSource;
use statevec::{QubitRegister, Transform, C64};
use tracing::debug;

/// Draws one basis index with probability `|a_i|²` by walking the
/// cumulative distribution. Falls back to the last index when rounding
/// leaves the running total short of the draw. The register is not touched.
pub fn sample<R>(reg: &QubitRegister, rng: &mut R) -> usize
where
    R: UniformSource + ?Sized,
{
    let r = rng.next_unit();

    let mut total = 0.0;
    for (idx, p) in reg.probabilities().enumerate() {
        total += p;
        if total > r {
            return idx;
        }
    }
    reg.dimension() - 1
}

/// Samples an outcome and collapses the register onto it.
///
/// Afterwards the amplitude at the returned index is exactly `1` (phase
/// dropped) and every other amplitude is `0`, so measuring again returns the
/// same index.
pub fn measure_to_int<R>(reg: &mut QubitRegister, rng: &mut R) -> usize
where
    R: UniformSource + ?Sized,
{
    let outcome = sample(reg, rng);
    let applied = reg.apply(&Collapse { index: outcome });
    debug_assert!(applied.is_committed());

    debug!(outcome, state = %reg.basis_label(outcome), "register measured");
    outcome
}

/// [`measure_to_int`] rendered as `n` binary digits, position `n` first.
pub fn measure_to_bitstring<R>(reg: &mut QubitRegister, rng: &mut R) -> String
where
    R: UniformSource + ?Sized,
{
    let width = reg.size();
    to_bitstring(measure_to_int(reg, rng), width)
}

/// Zero-padded binary rendering, most significant bit first.
pub fn to_bitstring(value: usize, width: usize) -> String {
    format!("{:0width$b}", value, width = width)
}

/// Tallies `shots` independent samples without collapsing the register.
pub fn sample_counts<R>(reg: &QubitRegister, rng: &mut R, shots: usize) -> BTreeMap<usize, usize>
where
    R: UniformSource + ?Sized,
{
    let mut counts = BTreeMap::new();
    for _ in 0..shots {
        *counts.entry(sample(reg, rng)).or_insert(0) += 1;
    }
    counts
}

/// Projects onto a single basis state.
struct Collapse {
    index: usize,
}

impl Transform for Collapse {
    fn transform(&self, amplitudes: &[C64]) -> Vec<C64> {
        let mut out = vec![C64::new(0.0, 0.0); amplitudes.len()];
        out[self.index] = C64::new(1.0, 0.0);
        out
    }
}
