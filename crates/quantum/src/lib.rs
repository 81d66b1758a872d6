//! Gates, measurement and textbook algorithms over a dense
//! [`QubitRegister`](statevec::QubitRegister).
//!
//! Positions are 1-indexed; position 1 is the least significant bit of a
//! basis index and doubles as the ancilla in the algorithms.

pub mod algorithms;
mod error;
pub mod gates;
pub mod measurement;
pub mod oracle;
pub mod qft;

pub use algorithms::deutsch_jozsa::{deutsch_jozsa, DeutschJozsaOutcome, Verdict};
pub use algorithms::grover::{grover_iterations, grover_search, GroverOutcome};
pub use error::{QuantumError, QuantumResult};
pub use gates::{Gate, GateKind, Step};
pub use oracle::Oracle;

use statevec::QubitRegister;

pub fn hadamard(reg: &mut QubitRegister, position: Option<usize>) -> QuantumResult<()> {
    gates::apply_gate(reg, GateKind::Hadamard, position)
}

pub fn pauli_x(reg: &mut QubitRegister, position: Option<usize>) -> QuantumResult<()> {
    gates::apply_gate(reg, GateKind::PauliX, position)
}

pub fn pauli_y(reg: &mut QubitRegister, position: Option<usize>) -> QuantumResult<()> {
    gates::apply_gate(reg, GateKind::PauliY, position)
}

pub fn pauli_z(reg: &mut QubitRegister, position: Option<usize>) -> QuantumResult<()> {
    gates::apply_gate(reg, GateKind::PauliZ, position)
}

/// Quantum Fourier transform of the whole register.
pub fn qft(reg: &mut QubitRegister) {
    reg.apply(&Gate::Qft);
}

pub fn inverse_qft(reg: &mut QubitRegister) {
    reg.apply(&Gate::InverseQft);
}
