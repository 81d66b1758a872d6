use std::fmt;
use std::str::FromStr;

use statevec::{Applied, QubitRegister, Transform, C64};

use crate::error::{QuantumError, QuantumResult};
use crate::qft::{dft, Direction};

pub type Matrix2 = [[C64; 2]; 2];

/// The single-qubit gates of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
}

impl GateKind {
    /// The 2×2 unitary `[[a, b], [c, d]]` acting on `(|0>, |1>)`.
    pub fn matrix(self) -> Matrix2 {
        let zero = C64::new(0.0, 0.0);
        let one = C64::new(1.0, 0.0);
        match self {
            GateKind::Hadamard => {
                let s = C64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
                [[s, s], [s, -s]]
            }
            GateKind::PauliX => [[zero, one], [one, zero]],
            GateKind::PauliY => [[zero, -C64::i()], [C64::i(), zero]],
            GateKind::PauliZ => [[one, zero], [zero, -one]],
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            GateKind::Hadamard => "h",
            GateKind::PauliX => "x",
            GateKind::PauliY => "y",
            GateKind::PauliZ => "z",
        }
    }
}

/// A gate bound to its parameters, usable as a [`Transform`] on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Single { kind: GateKind, position: usize },
    Qft,
    InverseQft,
}

impl Gate {
    pub fn single(kind: GateKind, position: usize) -> Self {
        Gate::Single { kind, position }
    }

    pub fn hadamard(position: usize) -> Self {
        Self::single(GateKind::Hadamard, position)
    }

    pub fn pauli_x(position: usize) -> Self {
        Self::single(GateKind::PauliX, position)
    }

    pub fn pauli_y(position: usize) -> Self {
        Self::single(GateKind::PauliY, position)
    }

    pub fn pauli_z(position: usize) -> Self {
        Self::single(GateKind::PauliZ, position)
    }

    /// Checks that the gate addresses a qubit of a register with `size` qubits.
    pub fn check(&self, size: usize) -> QuantumResult<()> {
        match *self {
            Gate::Single { position, .. } if position < 1 || position > size => {
                Err(QuantumError::InvalidPosition { position, size })
            }
            _ => Ok(()),
        }
    }

    /// Validates the gate against `reg` and applies it. An invalid position
    /// is reported and the register is left as it was.
    pub fn apply_to(&self, reg: &mut QubitRegister) -> QuantumResult<Applied> {
        self.check(reg.size())?;
        Ok(reg.apply(self))
    }
}

/// A single-qubit gate whose position lies outside the vector leaves the
/// amplitudes unchanged; [`Gate::apply_to`] reports that case as an error.
impl Transform for Gate {
    fn transform(&self, amplitudes: &[C64]) -> Vec<C64> {
        match *self {
            Gate::Single { position, .. }
                if position < 1 || position > amplitudes.len().trailing_zeros() as usize =>
            {
                amplitudes.to_vec()
            }
            Gate::Single { kind, position } => pair_recombine(amplitudes, position, &kind.matrix()),
            Gate::Qft => dft(amplitudes, Direction::Forward),
            Gate::InverseQft => dft(amplitudes, Direction::Inverse),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Single { kind, position } => write!(f, "{}{}", kind.mnemonic(), position),
            Gate::Qft => f.write_str("qft"),
            Gate::InverseQft => f.write_str("iqft"),
        }
    }
}

/// Applies `m` to every amplitude pair whose indices differ only in the bit
/// of qubit `position`.
///
/// With `stride = 2^(position-1)`, index `i` with that bit clear pairs with
/// `i + stride`; the pair `(a0, a1)` becomes
/// `(m00·a0 + m01·a1, m10·a0 + m11·a1)`.
///
/// # Panics
///
/// If `position` does not address a qubit of a vector of this length.
pub fn pair_recombine(amplitudes: &[C64], position: usize, m: &Matrix2) -> Vec<C64> {
    let qubits = amplitudes.len().trailing_zeros() as usize;
    assert!(
        position >= 1 && position <= qubits,
        "qubit position {} out of range for {} amplitudes",
        position,
        amplitudes.len()
    );

    let stride = 1usize << (position - 1);
    let mut out = vec![C64::new(0.0, 0.0); amplitudes.len()];
    for i in 0..amplitudes.len() {
        if i & stride != 0 {
            continue;
        }
        let j = i + stride;
        let (a0, a1) = (amplitudes[i], amplitudes[j]);
        out[i] = m[0][0] * a0 + m[0][1] * a1;
        out[j] = m[1][0] * a0 + m[1][1] * a1;
    }
    out
}

/// Applies `kind` to `position`, or to every qubit in ascending order when
/// no position is given. An invalid position leaves the register untouched.
pub fn apply_gate(
    reg: &mut QubitRegister,
    kind: GateKind,
    position: Option<usize>,
) -> QuantumResult<()> {
    match position {
        Some(p) => {
            Gate::single(kind, p).apply_to(reg)?;
        }
        None => {
            for p in 1..=reg.size() {
                Gate::single(kind, p).apply_to(reg)?;
            }
        }
    }
    Ok(())
}

/// One instruction of a textual gate program such as `"x1, h, qft"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Gate applied to every qubit.
    Broadcast(GateKind),
    Apply(Gate),
}

impl Step {
    pub fn run(&self, reg: &mut QubitRegister) -> QuantumResult<()> {
        match *self {
            Step::Broadcast(kind) => apply_gate(reg, kind, None),
            Step::Apply(gate) => gate.apply_to(reg).map(|_| ()),
        }
    }
}

impl FromStr for Step {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        match token.as_str() {
            "qft" => return Ok(Step::Apply(Gate::Qft)),
            "iqft" => return Ok(Step::Apply(Gate::InverseQft)),
            _ => {}
        }

        let mut chars = token.chars();
        let kind = match chars.next() {
            Some('h') => GateKind::Hadamard,
            Some('x') => GateKind::PauliX,
            Some('y') => GateKind::PauliY,
            Some('z') => GateKind::PauliZ,
            _ => return Err(QuantumError::UnknownGate(s.trim().to_string())),
        };

        let rest = chars.as_str();
        if rest.is_empty() {
            return Ok(Step::Broadcast(kind));
        }
        rest.parse::<usize>()
            .map(|position| Step::Apply(Gate::single(kind, position)))
            .map_err(|_| QuantumError::UnknownGate(s.trim().to_string()))
    }
}

/// Parses a comma or whitespace separated list of steps.
pub fn parse_steps(program: &str) -> QuantumResult<Vec<Step>> {
    program
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse::<Step>)
        .collect()
}
