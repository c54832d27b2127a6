use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use qontra::circuit::{cnot, put};
use qontra::error::SimError;
use qontra::expand::{apply_cnot, apply_gate, apply_single_qubit, expanded_operator};
use qontra::gate::Gate;
use qontra::state::Statevector;

const ATOL: f64 = 1e-10;

fn assert_state_approx(result: &Statevector, expected: &[Complex64]) {
    assert_eq!(result.total_dim(), expected.len());
    for (i, (r, e)) in result.amplitudes().iter().zip(expected.iter()).enumerate() {
        assert!(
            (r - e).norm() < ATOL,
            "state mismatch at index {}: got {:?}, expected {:?}",
            i,
            r,
            e
        );
    }
}

#[test]
fn test_x_gate_on_zero() {
    // X|0> = |1>
    let state = Statevector::zero(1).unwrap();
    let result = apply_single_qubit(&state, &Gate::X, 0).unwrap();
    let expected = vec![Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)];
    assert_state_approx(&result, &expected);
}

#[test]
fn test_h_gate_on_zero() {
    // H|0> = (|0> + |1>) / sqrt(2)
    let state = Statevector::zero(1).unwrap();
    let result = apply_single_qubit(&state, &Gate::H, 0).unwrap();
    let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
    assert_state_approx(&result, &[s, s]);
}

#[test]
fn test_x_on_second_qubit() {
    // X on qubit 1 of |00> sets bit 1: index 0 -> index 2
    let state = Statevector::zero(2).unwrap();
    let result = apply_single_qubit(&state, &Gate::X, 1).unwrap();
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    assert_state_approx(&result, &[zero, zero, one, zero]);
}

#[test]
fn test_identity_leaves_state_alone() {
    let state = Statevector::basis(2, 3).unwrap();
    let result = apply_single_qubit(&state, &Gate::I, 0).unwrap();
    assert_state_approx(&result, state.amplitudes());
}

#[test]
fn test_cnot_truth_table() {
    // Control qubit 0 set (index 1): target qubit 1 flips, index 1 -> 3
    let state = Statevector::basis(2, 1).unwrap();
    let result = apply_cnot(&state, 0, 1).unwrap();
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    assert_state_approx(&result, &[zero, zero, zero, one]);

    // Control clear: |00> unchanged
    let state = Statevector::zero(2).unwrap();
    let result = apply_cnot(&state, 0, 1).unwrap();
    assert_state_approx(&result, &[one, zero, zero, zero]);
}

#[test]
fn test_cnot_pairs_swapped_once() {
    // A superposition over all 4 basis states with distinct amplitudes:
    // CNOT(0, 1) must exchange indices 1 and 3 exactly.
    let mut state = Statevector::zero(2).unwrap();
    for i in 0..4 {
        state.data[i] = Complex64::new((i + 1) as f64 * 0.1, 0.0);
    }
    let result = apply_cnot(&state, 0, 1).unwrap();
    assert!((result.amplitudes()[0].re - 0.1).abs() < ATOL);
    assert!((result.amplitudes()[1].re - 0.4).abs() < ATOL);
    assert!((result.amplitudes()[2].re - 0.3).abs() < ATOL);
    assert!((result.amplitudes()[3].re - 0.2).abs() < ATOL);
}

#[test]
fn test_cnot_requires_two_qubits() {
    let state = Statevector::zero(1).unwrap();
    assert_eq!(
        apply_cnot(&state, 0, 1).unwrap_err(),
        SimError::InsufficientQubits(1)
    );
}

#[test]
fn test_cnot_rejects_equal_control_and_target() {
    let state = Statevector::zero(2).unwrap();
    assert_eq!(
        apply_cnot(&state, 1, 1).unwrap_err(),
        SimError::InvalidOperands(1)
    );
}

#[test]
fn test_target_out_of_range() {
    let state = Statevector::zero(2).unwrap();
    assert_eq!(
        apply_single_qubit(&state, &Gate::X, 2).unwrap_err(),
        SimError::QubitOutOfRange {
            qubit: 2,
            num_qubits: 2
        }
    );
}

#[test]
fn test_four_by_four_gate_rejected_on_single_target() {
    let state = Statevector::zero(2).unwrap();
    let err = apply_single_qubit(&state, &Gate::Cnot, 0).unwrap_err();
    assert!(matches!(err, SimError::DimensionMismatch { rows: 4, cols: 4, .. }));
}

#[test]
fn test_apply_gate_dispatches_on_control() {
    let state = Statevector::basis(2, 1).unwrap();
    let controlled = apply_gate(&state, &cnot(0, 1)).unwrap();
    assert!((controlled.amplitudes()[3].re - 1.0).abs() < ATOL);

    let single = apply_gate(&state, &put(Gate::X, 0)).unwrap();
    assert!((single.amplitudes()[0].re - 1.0).abs() < ATOL);
}

#[test]
fn test_expanded_operator_embeds_at_target_stride() {
    // H expanded at target 1 of 2 qubits: rows pair indices 2^1 apart.
    let full = expanded_operator(&Gate::H.matrix(), 1, 2);
    assert_eq!(full.nrows(), 4);
    assert!((full[[0, 2]].re - FRAC_1_SQRT_2).abs() < ATOL);
    assert!((full[[2, 0]].re - FRAC_1_SQRT_2).abs() < ATOL);
    assert!((full[[2, 2]].re + FRAC_1_SQRT_2).abs() < ATOL);
    assert!(full[[0, 1]].norm() < ATOL);
}

#[test]
fn test_norm_preserved_over_sequence() {
    let mut state = Statevector::zero(3).unwrap();
    for instruction in [put(Gate::H, 0), put(Gate::X, 2), cnot(0, 2), put(Gate::H, 1)] {
        state = apply_gate(&state, &instruction).unwrap();
    }
    assert!((state.norm() - 1.0).abs() < 1e-9);
}
