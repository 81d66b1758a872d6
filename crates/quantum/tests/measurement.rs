use quantum::{
    hadamard,
    measurement::{measure_to_bitstring, measure_to_int, sample, sample_counts, to_bitstring},
    pauli_x,
};
use rng::ShakeRng;
use statevec::{QubitRegister, C64};

#[test]
fn collapse_is_idempotent() {
    for shot in 0..20 {
        let mut rng = ShakeRng::new(format!("collapse-{}", shot).as_bytes());
        let mut reg = QubitRegister::new(3).unwrap();
        hadamard(&mut reg, None).unwrap();

        let first = measure_to_int(&mut reg, &mut rng);

        assert_eq!(reg.amplitude(first), Some(C64::new(1.0, 0.0)));
        for i in (0..8).filter(|&i| i != first) {
            assert_eq!(reg.amplitude(i), Some(C64::new(0.0, 0.0)));
        }
        for _ in 0..5 {
            assert_eq!(measure_to_int(&mut reg, &mut rng), first);
        }
    }
}

#[test]
fn collapse_discards_phase() {
    let mut reg = QubitRegister::new(1).unwrap();
    quantum::pauli_y(&mut reg, Some(1)).unwrap();
    assert_eq!(reg.amplitude(1), Some(C64::new(0.0, 1.0)));

    let mut draw = || 0.5;
    assert_eq!(measure_to_int(&mut reg, &mut draw), 1);
    assert_eq!(reg.amplitude(1), Some(C64::new(1.0, 0.0)));
}

#[test]
fn sampling_walks_the_cumulative_distribution() {
    let mut reg = QubitRegister::new(2).unwrap();
    hadamard(&mut reg, Some(2)).unwrap();
    // p = [0.5, 0, 0.5, 0]

    let mut low = || 0.0;
    let mut mid = || 0.49;
    let mut high = || 0.51;
    let mut top = || 0.999_999;
    assert_eq!(sample(&reg, &mut low), 0);
    assert_eq!(sample(&reg, &mut mid), 0);
    assert_eq!(sample(&reg, &mut high), 2);
    assert_eq!(sample(&reg, &mut top), 2);
}

#[test]
fn zero_probability_prefix_is_skipped() {
    let mut reg = QubitRegister::new(2).unwrap();
    pauli_x(&mut reg, Some(2)).unwrap();

    let mut zero = || 0.0;
    assert_eq!(sample(&reg, &mut zero), 2);
}

#[test]
fn sample_frequencies_follow_born_rule() {
    let mut reg = QubitRegister::new(2).unwrap();
    hadamard(&mut reg, Some(1)).unwrap();
    quantum::qft(&mut reg);

    let shots = 20_000;
    let mut rng = ShakeRng::new(b"born-rule");
    let counts = sample_counts(&reg, &mut rng, shots);

    for i in 0..4 {
        let observed = *counts.get(&i).unwrap_or(&0) as f64 / shots as f64;
        let expected = reg.probability(i);
        assert!(
            (observed - expected).abs() < 0.02,
            "index {}: observed {}, expected {}",
            i,
            observed,
            expected
        );
    }
    // sampling alone never collapses
    assert!(reg.probability(0) < 1.0);
}

#[test]
fn bitstrings_are_msb_first() {
    assert_eq!(to_bitstring(1, 3), "001");
    assert_eq!(to_bitstring(6, 3), "110");
    assert_eq!(to_bitstring(0, 1), "0");

    let mut reg = QubitRegister::new(4).unwrap();
    pauli_x(&mut reg, Some(4)).unwrap();
    let mut rng = ShakeRng::new(b"bits");
    assert_eq!(measure_to_bitstring(&mut reg, &mut rng), "1000");
}
