use ndarray::{Array1, ArrayD, IxDyn, ShapeBuilder};
use num_complex::Complex64;

use crate::error::{Result, SimError};

/// An n-qubit state as a flat amplitude vector of length 2^n.
///
/// Basis states are indexed little-endian: bit `i` of an amplitude index is
/// the value of qubit `i`.
#[derive(Debug, Clone)]
pub struct Statevector {
    pub n_qubits: usize,
    pub data: Array1<Complex64>,
}

impl Statevector {
    /// Creates |0...0>: amplitude 1 at index 0, 0 elsewhere.
    ///
    /// Memory grows as O(2^n); around 30 qubits the vector alone takes 16 GiB,
    /// so callers wanting bounded execution must cap `n_qubits` themselves.
    pub fn zero(n_qubits: usize) -> Result<Self> {
        Self::basis(n_qubits, 0)
    }

    /// Creates the computational basis state with the given index.
    ///
    /// Fails with `InvalidDimension` when `n_qubits` is zero or `index` is
    /// not below 2^n.
    pub fn basis(n_qubits: usize, index: usize) -> Result<Self> {
        if n_qubits < 1 {
            return Err(SimError::InvalidDimension(n_qubits));
        }
        let total = 1usize << n_qubits;
        if index >= total {
            return Err(SimError::InvalidDimension(n_qubits));
        }
        let mut data = Array1::zeros(total);
        data[index] = Complex64::new(1.0, 0.0);
        Ok(Statevector { n_qubits, data })
    }

    /// L2 norm of the amplitude vector.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Length of the amplitude vector (2^n).
    pub fn total_dim(&self) -> usize {
        self.data.len()
    }

    /// The amplitudes as a slice, ordered by basis index.
    pub fn amplitudes(&self) -> &[Complex64] {
        self.data.as_slice().expect("1-d storage is contiguous")
    }

    /// Reshapes into the rank-n tensor form. The amplitude buffer is moved,
    /// not copied; element (b_0, ..., b_{n-1}) of the tensor is the amplitude
    /// at index sum(b_i * 2^i).
    pub fn into_tensor(self) -> StateTensor {
        let n_qubits = self.n_qubits;
        let shape: Vec<usize> = vec![2; n_qubits];
        // Column-major strides give axis i stride 2^i, so the existing
        // little-endian buffer already is the tensor's memory layout.
        let data = ArrayD::from_shape_vec(IxDyn(&shape).f(), self.data.into_raw_vec())
            .expect("vector length is 2^n");
        StateTensor { n_qubits, data }
    }
}

/// The same n-qubit state as a rank-n tensor of shape (2, ..., 2).
///
/// Axis `i` is co-indexed with qubit `i`. The tensor is stored column-major
/// (axis `i` has stride 2^i), so its memory order coincides with the
/// little-endian amplitude vector and conversion in either direction is a
/// pure reshape.
#[derive(Debug, Clone)]
pub struct StateTensor {
    pub n_qubits: usize,
    pub data: ArrayD<Complex64>,
}

impl StateTensor {
    /// Creates |0...0> in tensor form: 1 at multi-index (0, ..., 0).
    ///
    /// Total element count is 2^n, the same memory bound as the vector form.
    pub fn zero(n_qubits: usize) -> Result<Self> {
        Self::basis(n_qubits, 0)
    }

    /// Creates the computational basis state with the given (flat) index.
    ///
    /// Fails with `InvalidDimension` when `n_qubits` is zero or `index` is
    /// not below 2^n.
    pub fn basis(n_qubits: usize, index: usize) -> Result<Self> {
        Ok(Statevector::basis(n_qubits, index)?.into_tensor())
    }

    /// L2 norm over all tensor elements.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Total element count (2^n).
    pub fn total_dim(&self) -> usize {
        self.data.len()
    }

    /// The amplitudes flattened to little-endian basis order.
    pub fn amplitudes(&self) -> &[Complex64] {
        self.data
            .as_slice_memory_order()
            .expect("tensor storage is contiguous")
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        self.data
            .as_slice_memory_order_mut()
            .expect("tensor storage is contiguous")
    }

    /// Flattens back into vector form. Inverse of [`Statevector::into_tensor`];
    /// no data is moved.
    pub fn into_vector(self) -> Statevector {
        Statevector {
            n_qubits: self.n_qubits,
            data: Array1::from(self.data.into_raw_vec()),
        }
    }
}
