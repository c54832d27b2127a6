use ndarray::{Array2, Array4};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Gate catalog: the fixed unitaries the simulator backends understand.
///
/// `I`, `X` and `H` are single-qubit gates; `Cnot` is the two-qubit
/// controlled-NOT. `Custom` carries an arbitrary caller-supplied matrix,
/// treated as an opaque unitary (unitarity is the caller's responsibility).
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    I,
    X,
    H,
    Cnot,
    Custom { matrix: Array2<Complex64>, label: String },
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::I => write!(f, "I"),
            Gate::X => write!(f, "X"),
            Gate::H => write!(f, "H"),
            Gate::Cnot => write!(f, "CNOT"),
            Gate::Custom { label, .. } => write!(f, "{}", label),
        }
    }
}

impl Gate {
    /// Returns the matrix representation of the gate: 2x2 for single-qubit
    /// gates, 4x4 for `Cnot`, whatever was supplied for `Custom`.
    pub fn matrix(&self) -> Array2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);

        match self {
            Gate::I => Array2::from_shape_vec((2, 2), vec![one, zero, zero, one]).unwrap(),
            Gate::X => Array2::from_shape_vec((2, 2), vec![zero, one, one, zero]).unwrap(),
            Gate::H => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                let neg_s = Complex64::new(-FRAC_1_SQRT_2, 0.0);
                Array2::from_shape_vec((2, 2), vec![s, s, s, neg_s]).unwrap()
            }
            Gate::Cnot => cnot_matrix(),
            Gate::Custom { matrix, .. } => matrix.clone(),
        }
    }

    /// Returns the number of qubits the gate acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            Gate::Cnot => 2,
            Gate::Custom { matrix, .. } => {
                // dim = 2^n, solve for n
                let dim = matrix.nrows();
                let mut n = 0usize;
                let mut power = 1usize;
                while power < dim {
                    power *= 2;
                    n += 1;
                }
                n
            }
            _ => 1,
        }
    }
}

/// The controlled-NOT as a 4x4 matrix.
///
/// The local two-qubit basis is ordered |c t> with the control in the high
/// bit: rows/columns 0..4 are |00>, |01>, |10>, |11>. The gate swaps the
/// |10> and |11> components.
pub fn cnot_matrix() -> Array2<Complex64> {
    let one = Complex64::new(1.0, 0.0);
    let mut m = Array2::zeros((4, 4));
    m[[0, 0]] = one;
    m[[1, 1]] = one;
    m[[2, 3]] = one;
    m[[3, 2]] = one;
    m
}

/// The controlled-NOT reshaped to a rank-4 tensor with axes
/// (control-out, target-out, control-in, target-in).
pub fn cnot_tensor() -> Array4<Complex64> {
    cnot_matrix().into_shape((2, 2, 2, 2)).unwrap()
}
