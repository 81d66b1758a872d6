use statevec::StateError;
use thiserror::Error;

pub type QuantumResult<T> = Result<T, QuantumError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    #[error("invalid position ({position}) for register of size {size}")]
    InvalidPosition { position: usize, size: usize },

    #[error("register of size {actual} is too small, at least {required} qubits are needed")]
    RegisterTooSmall { required: usize, actual: usize },

    #[error("marked input {marked} is outside a search space of {space} inputs")]
    MarkedOutOfRange { marked: usize, space: usize },

    #[error("truth table has {actual} entries, expected {expected}")]
    TruthTableLength { expected: usize, actual: usize },

    #[error("basis index {index} is outside a register of dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    #[error("unknown gate `{0}`")]
    UnknownGate(String),

    #[error(transparent)]
    State(#[from] StateError),
}
