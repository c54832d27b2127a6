use qontra::benchmark::{run_scaling, standard_pattern, BenchmarkConfig};
use qontra::gate::Gate;

#[test]
fn test_standard_pattern_shape() {
    let pattern = standard_pattern();
    assert_eq!(pattern.len(), 4);
    assert_eq!(pattern[0].gate, Gate::H);
    assert_eq!(pattern[1].gate, Gate::X);
    assert_eq!(pattern[2].control, Some(0));
    assert_eq!(pattern[2].target, 1);
    assert_eq!(pattern[3].gate, Gate::H);
}

#[test]
fn test_report_covers_configured_range_in_order() {
    let report = run_scaling(&BenchmarkConfig::up_to(5)).unwrap();
    let counts: Vec<usize> = report.vector.iter().map(|&(n, _)| n).collect();
    assert_eq!(counts, vec![2, 3, 4, 5]);
    let counts: Vec<usize> = report.tensor.iter().map(|&(n, _)| n).collect();
    assert_eq!(counts, vec![2, 3, 4, 5]);
}

#[test]
fn test_explicit_min_bound_is_honored() {
    let config = BenchmarkConfig {
        min_qubits: 4,
        max_qubits: 6,
    };
    let report = run_scaling(&config).unwrap();
    assert_eq!(report.vector.first().unwrap().0, 4);
    assert_eq!(report.vector.last().unwrap().0, 6);
}

#[test]
fn test_vector_backend_scales_worse_than_tensor_backend() {
    // The vector backend builds full 2^n x 2^n operators while the tensor
    // backend runs constant-size local contractions; at 10 qubits the gap is
    // orders of magnitude.
    let report = run_scaling(&BenchmarkConfig::up_to(10)).unwrap();
    let (n, vector_duration) = *report.vector.last().unwrap();
    let (_, tensor_duration) = *report.tensor.last().unwrap();
    assert_eq!(n, 10);
    assert!(
        vector_duration > tensor_duration,
        "expected the expansion backend to be slower: vector {:?}, tensor {:?}",
        vector_duration,
        tensor_duration
    );
}
