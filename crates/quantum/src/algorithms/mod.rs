//! Fixed gate/oracle scripts over a register whose position 1 is the
//! ancilla and positions `2..=n` hold the input.

pub mod deutsch_jozsa;
pub mod grover;

use statevec::QubitRegister;

use crate::error::{QuantumError, QuantumResult};
use crate::gates::{apply_gate, GateKind};

/// Qubit position of the ancilla.
pub const ANCILLA: usize = 1;

fn require_ancilla(reg: &QubitRegister) -> QuantumResult<()> {
    if reg.size() < 2 {
        return Err(QuantumError::RegisterTooSmall {
            required: 2,
            actual: reg.size(),
        });
    }
    Ok(())
}

/// Flip the ancilla, then Hadamard every qubit.
fn prepare(reg: &mut QubitRegister) -> QuantumResult<()> {
    apply_gate(reg, GateKind::PauliX, Some(ANCILLA))?;
    apply_gate(reg, GateKind::Hadamard, None)
}

/// Hadamard on input qubits, highest position first.
fn hadamard_inputs(reg: &mut QubitRegister) -> QuantumResult<()> {
    for p in (ANCILLA + 1..=reg.size()).rev() {
        apply_gate(reg, GateKind::Hadamard, Some(p))?;
    }
    Ok(())
}
