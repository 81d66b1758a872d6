use quantum::{
    gates::{apply_gate, parse_steps},
    hadamard, inverse_qft, pauli_x, pauli_y, pauli_z, qft, GateKind, QuantumError,
};
use statevec::{QubitRegister, C64};

fn assert_state(reg: &QubitRegister, expected: &[C64]) {
    let got = reg.snapshot();
    assert_eq!(got.len(), expected.len());
    for (i, (g, e)) in got.iter().zip(expected).enumerate() {
        assert!((g - e).norm() < 1e-12, "amplitude {}: {} != {}", i, g, e);
    }
}

fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

#[test]
fn hadamard_on_zero() {
    let mut reg = QubitRegister::new(1).unwrap();
    hadamard(&mut reg, Some(1)).unwrap();

    let s = 1.0 / 2.0_f64.sqrt();
    assert_state(&reg, &[c(s, 0.0), c(s, 0.0)]);
}

#[test]
fn pauli_x_on_zero() {
    let mut reg = QubitRegister::new(1).unwrap();
    pauli_x(&mut reg, Some(1)).unwrap();

    assert_state(&reg, &[c(0.0, 0.0), c(1.0, 0.0)]);
}

#[test]
fn pauli_y_adds_phase() {
    let mut reg = QubitRegister::new(1).unwrap();
    pauli_y(&mut reg, Some(1)).unwrap();
    assert_state(&reg, &[c(0.0, 0.0), c(0.0, 1.0)]);

    pauli_y(&mut reg, Some(1)).unwrap();
    assert_state(&reg, &[c(1.0, 0.0), c(0.0, 0.0)]);
}

#[test]
fn pauli_z_flips_sign_of_one() {
    let mut reg = QubitRegister::new(1).unwrap();
    hadamard(&mut reg, None).unwrap();
    pauli_z(&mut reg, Some(1)).unwrap();

    let s = 1.0 / 2.0_f64.sqrt();
    assert_state(&reg, &[c(s, 0.0), c(-s, 0.0)]);
}

#[test]
fn gates_target_their_own_bit() {
    // X on position 2 of |000> gives index 0b010.
    let mut reg = QubitRegister::new(3).unwrap();
    pauli_x(&mut reg, Some(2)).unwrap();
    assert!((reg.probability(2) - 1.0).abs() < 1e-12);

    pauli_x(&mut reg, Some(3)).unwrap();
    assert!((reg.probability(6) - 1.0).abs() < 1e-12);
}

#[test]
fn broadcast_covers_every_qubit() {
    let mut reg = QubitRegister::new(3).unwrap();
    hadamard(&mut reg, None).unwrap();

    let amp = 1.0 / 8.0_f64.sqrt();
    assert_state(&reg, &[c(amp, 0.0); 8]);

    let mut reg = QubitRegister::new(3).unwrap();
    pauli_x(&mut reg, None).unwrap();
    assert!((reg.probability(7) - 1.0).abs() < 1e-12);
}

#[test]
fn involutions() {
    let kinds = [
        GateKind::Hadamard,
        GateKind::PauliX,
        GateKind::PauliY,
        GateKind::PauliZ,
    ];
    for kind in kinds {
        let mut reg = QubitRegister::new(3).unwrap();
        parse_steps("h, y2, x3").unwrap().iter().for_each(|s| s.run(&mut reg).unwrap());
        let before = reg.snapshot();

        apply_gate(&mut reg, kind, Some(2)).unwrap();
        apply_gate(&mut reg, kind, Some(2)).unwrap();

        assert_state(&reg, &before);
    }
}

#[test]
fn invalid_positions_are_reported() {
    let mut reg = QubitRegister::new(2).unwrap();
    hadamard(&mut reg, Some(1)).unwrap();
    let before = reg.snapshot();

    assert_eq!(
        hadamard(&mut reg, Some(3)).unwrap_err(),
        QuantumError::InvalidPosition {
            position: 3,
            size: 2
        }
    );
    assert_eq!(
        pauli_x(&mut reg, Some(0)).unwrap_err(),
        QuantumError::InvalidPosition {
            position: 0,
            size: 2
        }
    );
    assert_state(&reg, &before);
    assert_eq!(reg.rejected_transforms(), 0);
}

#[test]
fn qft_of_zero_state_is_flat() {
    let mut reg = QubitRegister::new(2).unwrap();
    qft(&mut reg);

    assert_state(&reg, &[c(0.5, 0.0); 4]);
}

#[test]
fn qft_round_trip() {
    let mut reg = QubitRegister::new(3).unwrap();
    parse_steps("h3 x1 y2 z3").unwrap().iter().for_each(|s| s.run(&mut reg).unwrap());
    let before = reg.snapshot();

    qft(&mut reg);
    assert!((reg.total_probability() - 1.0).abs() < 1e-9);
    inverse_qft(&mut reg);

    assert_state(&reg, &before);
}

#[test]
fn qft_matches_direct_sum() {
    let mut reg = QubitRegister::new(3).unwrap();
    parse_steps("h1 x3 h2 z1").unwrap().iter().for_each(|s| s.run(&mut reg).unwrap());
    let input = reg.snapshot();

    qft(&mut reg);

    let n = input.len();
    let expected: Vec<C64> = (0..n)
        .map(|k| {
            let mut acc = c(0.0, 0.0);
            for (j, a) in input.iter().enumerate() {
                let angle = -2.0 * std::f64::consts::PI * (k * j) as f64 / n as f64;
                acc += a * C64::from_polar(1.0, angle);
            }
            acc / (n as f64).sqrt()
        })
        .collect();
    assert_state(&reg, &expected);
}
