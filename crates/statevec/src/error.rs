use thiserror::Error;

pub type StateResult<T> = Result<T, StateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("a register needs at least one qubit")]
    NoQubits,

    #[error("{requested} qubits requested, at most {max} are supported")]
    TooManyQubits { requested: usize, max: usize },
}
