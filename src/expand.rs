//! Vector backend: gate application by full-operator expansion.
//!
//! Every single-qubit gate is blown up to the full 2^n x 2^n operator with
//! repeated Kronecker products and applied by matrix-vector multiplication.
//! Cost and memory are exponential in the full operator size by construction;
//! the backend exists to contrast against the local contractions in
//! [`crate::contract`].

use ndarray::linalg::kron;
use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::circuit::Instruction;
use crate::error::{Result, SimError};
use crate::gate::Gate;
use crate::state::Statevector;

/// Embed a single-qubit gate into the full 2^n x 2^n operator.
///
/// The operator is the Kronecker product of identities with the gate in the
/// `target` slot. Basis indices are little-endian (bit i = qubit i), so the
/// factor for the highest qubit comes first and the factor for qubit 0 last.
pub fn expanded_operator(
    gate_matrix: &Array2<Complex64>,
    target: usize,
    n_qubits: usize,
) -> Array2<Complex64> {
    let eye: Array2<Complex64> = Array2::eye(2);
    let mut full: Array2<Complex64> = Array2::eye(1);
    for qubit in (0..n_qubits).rev() {
        full = if qubit == target {
            kron(&full, gate_matrix)
        } else {
            kron(&full, &eye)
        };
    }
    full
}

/// Apply a single-qubit gate by expanding it to the full operator and
/// left-multiplying the amplitude vector.
pub fn apply_single_qubit(
    state: &Statevector,
    gate: &Gate,
    target: usize,
) -> Result<Statevector> {
    let n_qubits = state.n_qubits;
    if target >= n_qubits {
        return Err(SimError::QubitOutOfRange {
            qubit: target,
            num_qubits: n_qubits,
        });
    }
    let gate_matrix = gate.matrix();
    if gate_matrix.nrows() != 2 || gate_matrix.ncols() != 2 {
        return Err(SimError::DimensionMismatch {
            rows: gate_matrix.nrows(),
            cols: gate_matrix.ncols(),
            dim: 2,
        });
    }

    let full = expanded_operator(&gate_matrix, target, n_qubits);

    // Left-multiply: out[row] = sum over col of full[row, col] * amp[col]
    let amps = state.amplitudes();
    let data: Array1<Complex64> = (0..amps.len())
        .map(|row| {
            amps.iter()
                .enumerate()
                .map(|(col, amp)| full[[row, col]] * amp)
                .sum()
        })
        .collect();

    Ok(Statevector { n_qubits, data })
}

/// Apply a controlled-NOT as an amplitude permutation.
///
/// The full 2^n x 2^n operator is never built: for every basis index with the
/// control bit set and the target bit clear, the amplitudes at the index and
/// its target-flipped partner are swapped. Visiting only target-clear indices
/// touches each pair exactly once.
pub fn apply_cnot(state: &Statevector, control: usize, target: usize) -> Result<Statevector> {
    let n_qubits = state.n_qubits;
    if n_qubits < 2 {
        return Err(SimError::InsufficientQubits(n_qubits));
    }
    if control == target {
        return Err(SimError::InvalidOperands(control));
    }
    for qubit in [control, target] {
        if qubit >= n_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit,
                num_qubits: n_qubits,
            });
        }
    }

    let control_mask = 1usize << control;
    let target_mask = 1usize << target;

    let mut data = state.data.clone();
    for i in 0..data.len() {
        if i & control_mask != 0 && i & target_mask == 0 {
            data.swap(i, i | target_mask);
        }
    }

    Ok(Statevector { n_qubits, data })
}

/// Apply one instruction, dispatching on whether a control qubit is supplied.
pub fn apply_gate(state: &Statevector, instruction: &Instruction) -> Result<Statevector> {
    match instruction.control {
        Some(control) => apply_cnot(state, control, instruction.target),
        None => apply_single_qubit(state, &instruction.gate, instruction.target),
    }
}
