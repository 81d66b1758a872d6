//! Oracles for Deutsch–Jozsa and Grover.
//!
//! An oracle is any [`Transform`]: it receives the full amplitude vector and
//! returns a same-length vector, and should be unitary (the register silently
//! drops anything else). The algorithms accept arbitrary transforms; the
//! [`Oracle`] type below builds the common `|x, y> -> |x, y ⊕ f(x)>` family
//! over the register layout used there, where the ancilla `y` is qubit
//! position 1 (index bit 0) and the input `x` sits in the remaining bits, so
//! basis index `i = 2x + y`.

use statevec::{StateError, Transform, C64, MAX_QUBITS};

use crate::error::{QuantumError, QuantumResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Oracle {
    Identity,
    /// Exchanges the amplitudes of each index pair, in order.
    Swap(Vec<(usize, usize)>),
    /// Negates the amplitudes of the listed indices.
    PhaseFlip(Vec<usize>),
}

impl Oracle {
    /// `|x, y> -> |x, y ⊕ f(x)>` for the classical function given as a
    /// truth table with one entry per input `x` (`2^(qubits-1)` entries).
    pub fn from_truth_table(qubits: usize, table: &[bool]) -> QuantumResult<Self> {
        let inputs = input_space(qubits)?;
        if table.len() != inputs {
            return Err(QuantumError::TruthTableLength {
                expected: inputs,
                actual: table.len(),
            });
        }

        let pairs: Vec<(usize, usize)> = table
            .iter()
            .enumerate()
            .filter(|(_, fx)| **fx)
            .map(|(x, _)| (x << 1, (x << 1) | 1))
            .collect();

        if pairs.is_empty() {
            Ok(Oracle::Identity)
        } else {
            Ok(Oracle::Swap(pairs))
        }
    }

    /// `f(x) = value` for every input.
    pub fn constant(qubits: usize, value: bool) -> QuantumResult<Self> {
        let inputs = input_space(qubits)?;
        Self::from_truth_table(qubits, &vec![value; inputs])
    }

    /// `f(x)` = most significant input bit, which is one for exactly half of
    /// the inputs.
    pub fn balanced(qubits: usize) -> QuantumResult<Self> {
        let inputs = input_space(qubits)?;
        let table: Vec<bool> = (0..inputs).map(|x| x >= inputs / 2).collect();
        Self::from_truth_table(qubits, &table)
    }

    /// `f(x) = [x == marked]`, the single-solution oracle for Grover search.
    pub fn marking(qubits: usize, marked: usize) -> QuantumResult<Self> {
        let inputs = input_space(qubits)?;
        if marked >= inputs {
            return Err(QuantumError::MarkedOutOfRange {
                marked,
                space: inputs,
            });
        }
        let mut table = vec![false; inputs];
        table[marked] = true;
        Self::from_truth_table(qubits, &table)
    }

    /// Negates the listed basis indices of a `qubits`-qubit register.
    pub fn phase_flip(qubits: usize, indices: Vec<usize>) -> QuantumResult<Self> {
        let dimension = basis_dimension(qubits)?;
        if let Some(&index) = indices.iter().find(|&&i| i >= dimension) {
            return Err(QuantumError::IndexOutOfRange { index, dimension });
        }
        Ok(Oracle::PhaseFlip(indices))
    }

    /// Exchanges the listed basis index pairs of a `qubits`-qubit register.
    pub fn swap(qubits: usize, pairs: Vec<(usize, usize)>) -> QuantumResult<Self> {
        let dimension = basis_dimension(qubits)?;
        if let Some(index) = pairs
            .iter()
            .flat_map(|&(i, j)| [i, j])
            .find(|&i| i >= dimension)
        {
            return Err(QuantumError::IndexOutOfRange { index, dimension });
        }
        Ok(Oracle::Swap(pairs))
    }
}

/// Indices past the end of the vector are skipped.
impl Transform for Oracle {
    fn transform(&self, amplitudes: &[C64]) -> Vec<C64> {
        let mut out = amplitudes.to_vec();
        let len = out.len();
        match self {
            Oracle::Identity => {}
            Oracle::Swap(pairs) => {
                for &(i, j) in pairs.iter().filter(|&&(i, j)| i < len && j < len) {
                    out.swap(i, j);
                }
            }
            Oracle::PhaseFlip(indices) => {
                for &i in indices.iter().filter(|&&i| i < len) {
                    out[i] = -out[i];
                }
            }
        }
        out
    }
}

fn basis_dimension(qubits: usize) -> QuantumResult<usize> {
    if qubits == 0 {
        return Err(QuantumError::State(StateError::NoQubits));
    }
    if qubits > MAX_QUBITS {
        return Err(QuantumError::State(StateError::TooManyQubits {
            requested: qubits,
            max: MAX_QUBITS,
        }));
    }
    Ok(1usize << qubits)
}

/// Number of inputs `x` addressed by a register with one ancilla.
fn input_space(qubits: usize) -> QuantumResult<usize> {
    if qubits < 2 {
        return Err(QuantumError::RegisterTooSmall {
            required: 2,
            actual: qubits,
        });
    }
    Ok(1usize << (qubits - 1))
}
