use thiserror::Error;

/// Errors raised by state construction, gate application and post-processing.
///
/// Every variant is a precondition failure detected before any amplitude is
/// touched; a failing operation leaves its input state unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid dimension for a register of {0} qubits")]
    InvalidDimension(usize),

    #[error("two-qubit operation requires at least 2 qubits, register has {0}")]
    InsufficientQubits(usize),

    #[error("control and target must differ, both are qubit {0}")]
    InvalidOperands(usize),

    #[error("qubit {qubit} is out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("operator is {rows}x{cols}, expected {dim}x{dim}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        dim: usize,
    },

    #[error("probability mass sums to {0}, expected 1 within tolerance")]
    InvalidDistribution(f64),
}

pub type Result<T> = std::result::Result<T, SimError>;
