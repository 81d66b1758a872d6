use crate::C64;

/// A pure map from the full amplitude vector to a new vector of the same
/// length.
///
/// Gates, oracles and diffusion steps all implement this one trait; the
/// register does not care which kind it is handed. Implementations must
/// return exactly `amplitudes.len()` entries and should be unitary. A result
/// that is not normalized is dropped by the register without an error.
pub trait Transform {
    fn transform(&self, amplitudes: &[C64]) -> Vec<C64>;
}

impl<F> Transform for F
where
    F: Fn(&[C64]) -> Vec<C64>,
{
    fn transform(&self, amplitudes: &[C64]) -> Vec<C64> {
        self(amplitudes)
    }
}
