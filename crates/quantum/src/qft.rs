//! Discrete Fourier transform over the full amplitude vector.

use std::f64::consts::PI;

use rayon::prelude::*;
use statevec::C64;

/// Output indices handed to one rayon task at a time.
const MIN_CHUNK: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// `out[k] = 1/√N · Σ_j a[j] · exp(∓2πi·k·j / N)`, with `-` for
/// [`Direction::Forward`].
///
/// `N` must be a power of two. Every output entry is computed from the full
/// input slice and written once, so output indices are split across the
/// rayon pool with no shared writes.
pub fn dft(amplitudes: &[C64], direction: Direction) -> Vec<C64> {
    let n = amplitudes.len();
    debug_assert!(n.is_power_of_two());

    let sign = match direction {
        Direction::Forward => -1.0,
        Direction::Inverse => 1.0,
    };
    let twiddles: Vec<C64> = (0..n)
        .map(|k| C64::from_polar(1.0, sign * 2.0 * PI * k as f64 / n as f64))
        .collect();
    let scale = 1.0 / (n as f64).sqrt();
    let mask = n - 1;

    (0..n)
        .into_par_iter()
        .with_min_len(MIN_CHUNK)
        .map(|k| {
            let mut acc = C64::new(0.0, 0.0);
            for (j, &a) in amplitudes.iter().enumerate() {
                acc += a * twiddles[(k * j) & mask];
            }
            acc * scale
        })
        .collect()
}
