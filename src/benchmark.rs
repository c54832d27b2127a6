//! Wall-clock scaling comparison of the two gate application backends.
//!
//! Runs a fixed instruction pattern over an increasing qubit count and
//! records the duration of a full circuit run per backend. The harness only
//! measures; interpreting or plotting the curve is a reporting concern
//! outside this crate.

use std::time::{Duration, Instant};

use crate::circuit::{cnot, put, Instruction};
use crate::error::Result;
use crate::executor::{run_tensor, run_vector};
use crate::gate::Gate;

/// The fixed pattern timed at every qubit count: Hadamard on qubit 0,
/// Pauli-X on qubit 1, CNOT(control 0, target 1), Hadamard on qubit 0.
pub fn standard_pattern() -> Vec<Instruction> {
    vec![
        put(Gate::H, 0),
        put(Gate::X, 1),
        cnot(0, 1),
        put(Gate::H, 0),
    ]
}

/// Qubit-count bounds for a scaling run.
///
/// `max_qubits` directly bounds memory: the state takes 2^n amplitudes and
/// the vector backend additionally builds 4^n-entry operators, so the ceiling
/// must be chosen for the host machine rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub min_qubits: usize,
    pub max_qubits: usize,
}

impl BenchmarkConfig {
    /// Bounds starting at 2 qubits (the pattern touches qubits 0 and 1).
    pub fn up_to(max_qubits: usize) -> Self {
        BenchmarkConfig {
            min_qubits: 2,
            max_qubits,
        }
    }
}

/// Ordered (qubit_count, duration) pairs per backend.
#[derive(Debug, Clone, Default)]
pub struct ScalingReport {
    pub vector: Vec<(usize, Duration)>,
    pub tensor: Vec<(usize, Duration)>,
}

/// Time a full circuit run of the standard pattern for each backend at every
/// qubit count in the configured range.
///
/// The backends are timed one after the other, never concurrently, so the
/// wall-clock readings are not skewed by contention.
pub fn run_scaling(config: &BenchmarkConfig) -> Result<ScalingReport> {
    let pattern = standard_pattern();
    let mut report = ScalingReport::default();

    for n_qubits in config.min_qubits..=config.max_qubits {
        let start = Instant::now();
        run_vector(n_qubits, &pattern)?;
        report.vector.push((n_qubits, start.elapsed()));

        let start = Instant::now();
        run_tensor(n_qubits, &pattern)?;
        report.tensor.push((n_qubits, start.elapsed()));
    }

    Ok(report)
}
