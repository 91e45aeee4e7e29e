use std::f64::consts::PI;

use ndarray::Array2;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use qpow::quantum::gate::{identity, matrices_approx_eq};
use qpow::quantum::{
    evolve, ising_gate, ising_hamiltonian, xy_gate, xy_hamiltonian, EigenGate, Param,
    ParamResolver, QuantumGate,
};
use qpow::GateError;

const ATOL: f64 = 1e-9;

/// Print both matrices when a comparison fails
fn assert_matrices_close(actual: &Array2<Complex64>, expected: &Array2<Complex64>, context: &str) {
    if !matrices_approx_eq(actual, expected, ATOL) {
        println!("Actual:\n{:?}", actual);
        println!("Expected:\n{:?}", expected);
        panic!("Matrices differ: {}", context);
    }
}

fn random_parameters(seed: u64, count: usize, upper: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-upper..upper)).collect()
}

#[cfg(test)]
mod ising_gate_tests {
    use super::*;

    #[test]
    fn test_exponent_and_shift_for_real_parameters() {
        for p in random_parameters(7, 32, 10.0) {
            let gate = ising_gate(p);
            assert_eq!(gate.exponent(), &Param::Float(p));
            assert_eq!(gate.global_shift(), -0.5);
        }
    }

    #[test]
    fn test_matches_hamiltonian_evolution() {
        let h = ising_hamiltonian().unwrap();
        for p in random_parameters(11, 16, 6.0) {
            let expected = evolve(&h, PI / 2.0 * p).unwrap();
            let actual = ising_gate(p).matrix().unwrap();
            assert_matrices_close(&actual, &expected, &format!("Ising({})", p));
        }
    }

    #[test]
    fn test_zero_is_identity_up_to_phase() {
        let gate = ising_gate(0.0);
        assert_eq!(gate.exponent(), &Param::Float(0.0));
        assert_eq!(gate.global_shift(), -0.5);
        // exp(0) = I exactly for the Ising convention
        assert_matrices_close(&gate.matrix().unwrap(), &identity(4), "Ising(0)");
    }

    #[test]
    fn test_one_is_maximally_entangling_zz() {
        let gate = ising_gate(1.0);
        assert_eq!(gate.exponent(), &Param::Float(1.0));
        assert_eq!(gate.global_shift(), -0.5);

        // exp(-iπ/2 Z⊗Z) = -i Z⊗Z
        let m = gate.matrix().unwrap();
        let minus_i = Complex64::new(0.0, -1.0);
        let diag = [minus_i, -minus_i, -minus_i, minus_i];
        for (k, d) in diag.iter().enumerate() {
            assert!((m[[k, k]] - d).norm() < ATOL, "entry {} was {:?}", k, m[[k, k]]);
        }
        assert_eq!(gate.trace_distance_bound(), Some(1.0));
    }

    #[test]
    fn test_period_four() {
        for p in random_parameters(13, 16, 4.0) {
            let a = ising_gate(p);
            let b = ising_gate(p + 4.0);
            assert!(a.approx_eq(&b, 1e-9), "Ising({}) ≠ Ising({} + 4)", p, p);
            assert_matrices_close(&a.matrix().unwrap(), &b.matrix().unwrap(), "Ising periodicity");
        }
        // Exactly representable exponents compare equal outright
        assert_eq!(ising_gate(0.5), ising_gate(4.5));
        assert_eq!(ising_gate(-1.0), ising_gate(3.0));
    }

    #[test]
    fn test_half_period_is_not_the_same_gate() {
        // Ising(p + 2) = -Ising(p): same up to global phase, different gate
        let a = ising_gate(0.3);
        let b = ising_gate(2.3);
        assert!(!a.approx_eq(&b, 1e-9));
        let neg_b = b.matrix().unwrap().mapv(|z| -z);
        assert_matrices_close(&a.matrix().unwrap(), &neg_b, "Ising half period");
    }

    #[test]
    fn test_symbolic_parameter() {
        let gate = ising_gate(Param::symbol("p"));
        assert_eq!(gate.exponent(), &Param::symbol("p"));
        assert_eq!(gate.exponent().to_string(), "p");
        assert_eq!(gate.global_shift(), -0.5);
        assert!(gate.is_parameterized());
        assert!(matches!(gate.matrix(), Err(GateError::ParameterizedGate { .. })));

        let bound = gate.resolve(&ParamResolver::new().with("p", 1.0));
        assert_eq!(bound, ising_gate(1.0));
    }
}

#[cfg(test)]
mod xy_gate_tests {
    use super::*;

    #[test]
    fn test_exponent_and_shift_for_real_parameters() {
        for p in random_parameters(17, 32, 10.0) {
            let gate = xy_gate(p);
            assert_eq!(gate.exponent(), &Param::Float(-2.0 * p));
            assert_eq!(gate.global_shift(), 0.0);
        }
    }

    #[test]
    fn test_matches_hamiltonian_evolution() {
        let h = xy_hamiltonian().unwrap();
        for p in random_parameters(19, 16, 4.0) {
            let expected = evolve(&h, PI / 2.0 * p).unwrap();
            let actual = xy_gate(p).matrix().unwrap();
            assert_matrices_close(&actual, &expected, &format!("XY({})", p));
        }
    }

    #[test]
    fn test_zero_is_identity() {
        let gate = xy_gate(0.0);
        assert_eq!(gate.exponent().value(), Some(0.0));
        assert_eq!(gate.global_shift(), 0.0);
        assert_matrices_close(&gate.matrix().unwrap(), &identity(4), "XY(0)");
    }

    #[test]
    fn test_one() {
        let gate = xy_gate(1.0);
        assert_eq!(gate.exponent(), &Param::Float(-2.0));
        assert_eq!(gate.global_shift(), 0.0);
        // exp(-iπ(|01⟩⟨10| + |10⟩⟨01|)) negates the odd-parity subspace
        let m = gate.matrix().unwrap();
        let mut expected = identity(4);
        expected[[1, 1]] = Complex64::new(-1.0, 0.0);
        expected[[2, 2]] = Complex64::new(-1.0, 0.0);
        assert_matrices_close(&m, &expected, "XY(1)");
    }

    #[test]
    fn test_half_is_inverse_iswap() {
        let m = xy_gate(0.5).matrix().unwrap();
        assert!((m[[1, 2]] - Complex64::new(0.0, -1.0)).norm() < ATOL);
        assert!((m[[2, 1]] - Complex64::new(0.0, -1.0)).norm() < ATOL);
        assert!(m[[1, 1]].norm() < ATOL);
    }

    #[test]
    fn test_period_two() {
        for p in random_parameters(23, 16, 2.0) {
            let a = xy_gate(p);
            let b = xy_gate(p + 2.0);
            assert!(a.approx_eq(&b, 1e-9), "XY({}) ≠ XY({} + 2)", p, p);
            assert_matrices_close(&a.matrix().unwrap(), &b.matrix().unwrap(), "XY periodicity");
        }
        assert_eq!(xy_gate(0.5), xy_gate(2.5));
    }

    #[test]
    fn test_symbolic_parameter() {
        let gate = xy_gate(Param::symbol("p"));
        assert_eq!(gate.exponent().to_string(), "-2*p");
        assert_eq!(gate.global_shift(), 0.0);
        let names: Vec<String> = gate.parameter_names().into_iter().collect();
        assert_eq!(names, vec!["p"]);
        assert!(gate.matrix().is_err());

        let bound = gate.resolve(&ParamResolver::new().with("p", 0.25));
        assert_eq!(bound.exponent(), &Param::Float(-0.5));
        assert_matrices_close(
            &bound.matrix().unwrap(),
            &xy_gate(0.25).matrix().unwrap(),
            "resolved XY",
        );
    }

    #[test]
    fn test_symbolic_expression_parameter() {
        // XY(theta + 1) keeps the whole expression under the factor
        let gate = xy_gate(Param::symbol("theta") + 1.0);
        assert_eq!(gate.exponent().to_string(), "-2*(theta + 1)");
        let value = gate
            .exponent()
            .evaluate(&ParamResolver::new().with("theta", 0.5))
            .unwrap();
        assert_eq!(value, -3.0);
    }
}

#[cfg(test)]
mod interaction_tests {
    use super::*;

    #[test]
    fn test_gates_and_inverses_are_unitary() {
        for p in random_parameters(29, 8, 3.0) {
            let gates: Vec<Box<dyn QuantumGate>> = vec![
                Box::new(ising_gate(p)),
                Box::new(xy_gate(p)),
            ];
            for gate in gates {
                let m = gate.matrix().unwrap();
                let inverse = gate.adjoint().unwrap().matrix().unwrap();
                assert_matrices_close(&m.dot(&inverse), &identity(4), &gate.name());
            }
        }
    }

    #[test]
    fn test_composition_adds_parameters() {
        let a = ising_gate(0.4).matrix().unwrap();
        let b = ising_gate(1.1).matrix().unwrap();
        assert_matrices_close(&a.dot(&b), &ising_gate(1.5).matrix().unwrap(), "Ising(0.4)·Ising(1.1)");

        let a = xy_gate(0.4).matrix().unwrap();
        let b = xy_gate(1.1).matrix().unwrap();
        assert_matrices_close(&a.dot(&b), &xy_gate(1.5).matrix().unwrap(), "XY(0.4)·XY(1.1)");
    }

    #[test]
    fn test_pow_scales_group_parameter() {
        let g = xy_gate(0.3).pow(2.0);
        assert!(g.approx_eq(&xy_gate(0.6), 1e-12));
        let g = ising_gate(0.3).pow(3.0);
        assert!(g.approx_eq(&ising_gate(0.9), 1e-12));
    }
}
