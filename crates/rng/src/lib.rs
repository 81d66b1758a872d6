//! Reproducible uniform draws for measurement sampling.
//!
//! Measurement never reaches for ambient randomness: every sampling routine
//! takes a [`UniformSource`], so a run can be replayed from its seed.

use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// A generator of uniform draws in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

/// Scripted draws, mostly useful in tests.
impl<F> UniformSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// SHAKE256 keyed stream. Two instances built from the same seed produce
/// the same sequence of draws.
#[derive(Clone, Debug)]
pub struct ShakeRng {
    state: [u8; 32],
    step: u64,
}

impl ShakeRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"QSIM_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Derives an independent stream, e.g. one per measurement shot.
    pub fn fork(&self, tag: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[&self.state, b"FORK", tag], &mut state);
        Self { state, step: 0 }
    }

    pub fn next_u64(&mut self, ctx: &[u8]) -> u64 {
        self.step += 1;

        let state = self.state;
        let mut next_state = self.state;
        shake(&[&state, &self.step.to_be_bytes(), b"STEP"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);
        u64::from_be_bytes(out)
    }

    /// Uniform draw in `[0, 1)` built from the top 53 bits of the stream.
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        (self.next_u64(ctx) >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    pub fn steps(&self) -> u64 {
        self.step
    }
}

impl UniformSource for ShakeRng {
    fn next_unit(&mut self) -> f64 {
        self.next_f64(b"SAMPLE")
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
