use qpow::prelude::*;
use qpow::quantum::gate::matrices_approx_eq;
use qpow::quantum::{resolve_sweep, unitaries_over_sweep};

#[test]
fn test_resolve_sweep_preserves_order() {
    let gate = xy_gate(Param::symbol("p"));
    let sweep = Sweep::linspace("p", 0.0, 1.0, 9);

    let resolved = resolve_sweep(&gate, &sweep);
    assert_eq!(resolved.len(), 9);
    for (i, g) in resolved.iter().enumerate() {
        let p = i as f64 / 8.0;
        assert!(!g.is_parameterized());
        assert!(g.approx_eq(&xy_gate(p), 1e-12), "point {} resolved to {}", i, g);
    }
}

#[test]
fn test_unitaries_match_direct_construction() {
    let gate = ising_gate(Param::symbol("theta"));
    let values = vec![0.0, 0.5, 1.0, 3.75, -2.0];
    let sweep = Sweep::points("theta", values.clone());

    let unitaries = unitaries_over_sweep(&gate, &sweep).unwrap();
    assert_eq!(unitaries.len(), values.len());
    for (u, p) in unitaries.iter().zip(values) {
        let direct = ising_gate(p).matrix().unwrap();
        assert!(matrices_approx_eq(u, &direct, 1e-12), "mismatch at theta = {}", p);
    }
}

#[test]
fn test_unbound_symbol_fails_over_sweep() {
    let gate = ZZPowGate::new(Param::symbol("a") + Param::symbol("b"));
    let sweep = Sweep::points("a", vec![0.1, 0.2]);

    // `b` is never bound, so the gate stays symbolic
    let resolved = resolve_sweep(&gate, &sweep);
    assert!(resolved.iter().all(|g| g.is_parameterized()));

    let err = unitaries_over_sweep(&gate, &sweep).unwrap_err();
    match err {
        GateError::ParameterizedGate { gate, parameters } => {
            assert_eq!(gate, "ZZ");
            assert_eq!(parameters, vec!["b".to_string()]);
        }
        other => panic!("Expected ParameterizedGate, got {:?}", other),
    }
}

#[test]
fn test_product_sweep_binds_both_symbols() {
    let gate = ZZPowGate::new(Param::symbol("a") + Param::symbol("b"));
    let sweep = Sweep::Product(vec![
        Sweep::points("a", vec![0.25, 0.5]),
        Sweep::points("b", vec![0.0, 1.0]),
    ]);

    let resolved = resolve_sweep(&gate, &sweep);
    let exponents: Vec<Option<f64>> = resolved.iter().map(|g| g.exponent().value()).collect();
    assert_eq!(exponents, vec![Some(0.25), Some(1.25), Some(0.5), Some(1.5)]);
}

#[test]
fn test_empty_sweep() {
    let gate = xy_gate(Param::symbol("p"));
    let sweep = Sweep::points("p", Vec::new());
    assert!(sweep.is_empty());
    assert!(resolve_sweep(&gate, &sweep).is_empty());
    assert!(unitaries_over_sweep(&gate, &sweep).unwrap().is_empty());
}

#[test]
fn test_gates_and_sweeps_serialize() {
    let gate = xy_gate(Param::symbol("p"));
    let json = serde_json::to_string(&gate).unwrap();
    let back: ISwapPowGate = serde_json::from_str(&json).unwrap();
    assert_eq!(back.exponent().to_string(), "-2*p");
    assert_eq!(back.global_shift(), 0.0);

    let ising = ising_gate(0.5);
    let value = serde_json::to_value(&ising).unwrap();
    assert_eq!(value["global_shift"], serde_json::json!(-0.5));
    assert_eq!(value["exponent"], serde_json::json!({ "Float": 0.5 }));

    let sweep = Sweep::linspace("p", 0.0, 2.0, 3);
    let back: Sweep = serde_json::from_str(&serde_json::to_string(&sweep).unwrap()).unwrap();
    assert_eq!(back, sweep);
}
