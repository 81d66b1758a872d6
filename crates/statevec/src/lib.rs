//! Dense state-vector storage for an `n`-qubit register.
//!
//! Basis index `i` is read as an `n`-bit unsigned integer: bit `p - 1` of
//! `i` holds the value of qubit position `p` (positions are 1-indexed).
//! Every change of state goes through [`QubitRegister::apply`], which only
//! commits a candidate vector whose total probability is within
//! [`NORM_TOLERANCE`] of one.

mod error;
pub mod register;
pub mod transform;

use num_complex::Complex64;

pub use error::{StateError, StateResult};
pub use register::{Applied, QubitRegister};
pub use transform::Transform;

pub type C64 = Complex64;

/// Accepted deviation of `Σ|a_i|²` from 1.
pub const NORM_TOLERANCE: f64 = 1e-3;

/// Largest register the dense representation will allocate (2^30 amplitudes).
pub const MAX_QUBITS: usize = 30;
