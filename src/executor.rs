use crate::circuit::Instruction;
use crate::error::Result;
use crate::state::{StateTensor, Statevector};
use crate::{contract, expand};

/// Run an instruction list through the vector backend.
///
/// Initializes |0...0>, applies each instruction in list order and returns
/// the final state. The first failing instruction aborts the run; there are
/// no retries and no partial results.
pub fn run_vector(n_qubits: usize, instructions: &[Instruction]) -> Result<Statevector> {
    let mut state = Statevector::zero(n_qubits)?;
    for instruction in instructions {
        state = expand::apply_gate(&state, instruction)?;
    }
    Ok(state)
}

/// Run an instruction list through the tensor backend.
///
/// Same replay semantics as [`run_vector`]; for any shared instruction list
/// the two backends agree on the final amplitudes up to floating tolerance.
pub fn run_tensor(n_qubits: usize, instructions: &[Instruction]) -> Result<StateTensor> {
    let mut state = StateTensor::zero(n_qubits)?;
    for instruction in instructions {
        contract::apply_gate(&mut state, instruction)?;
    }
    Ok(state)
}
