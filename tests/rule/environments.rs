//! Binding different environment shapes to rule variables.

use crate::common::*;
use serde::Serialize;
use std::collections::HashMap;
use stashkit::RuleError;

#[test]
fn struct_fields_become_variables() {
    let rule = RuleExpr::compile("amount >= 100 && currency == 'USD'").unwrap();

    assert!(rule.evaluate(&PaymentEnv::new(100, "USD", "US")).unwrap());
    assert!(!rule.evaluate(&PaymentEnv::new(99, "USD", "US")).unwrap());
    assert!(!rule.evaluate(&PaymentEnv::new(500, "EUR", "US")).unwrap());
}

#[test]
fn nested_fields_are_reachable() {
    #[derive(Serialize)]
    struct Customer {
        tier: String,
        age: i64,
    }

    #[derive(Serialize)]
    struct Env {
        customer: Customer,
    }

    let rule = RuleExpr::compile("customer.tier == 'gold' && customer.age > 18").unwrap();
    let env = Env {
        customer: Customer {
            tier: "gold".to_string(),
            age: 30,
        },
    };
    assert!(rule.evaluate(&env).unwrap());
}

#[test]
fn stash_serves_as_environment() {
    let merchant = configured_merchant();
    let rule = RuleExpr::compile("callback_counter < 5 && allowed_ip == '10.0.0.1'").unwrap();

    assert!(rule.evaluate(merchant.stash()).unwrap());
}

#[test]
fn private_stash_keys_are_not_bound() {
    let merchant = configured_merchant();
    let rule = RuleExpr::compile("_salt == 's3cr3t'").unwrap();

    assert!(matches!(
        rule.evaluate(merchant.stash()),
        Err(RuleError::Run(_))
    ));
}

#[test]
fn map_environment() {
    let mut env = HashMap::new();
    env.insert("limit", 10);
    env.insert("used", 4);

    let rule = RuleExpr::compile("limit - used > 5").unwrap();
    assert!(rule.evaluate(&env).unwrap());
}

#[test]
fn unknown_variable_is_a_run_error() {
    init_tracing();
    let rule = RuleExpr::compile("missing == 1").unwrap();

    let err = rule.evaluate(&PaymentEnv::new(1, "USD", "US")).unwrap_err();
    assert!(matches!(err, RuleError::Run(_)));
    assert!(!err.is_compile_error());
}

#[test]
fn non_boolean_result_is_rejected() {
    let rule = RuleExpr::compile("amount + 1").unwrap();

    match rule.evaluate(&PaymentEnv::new(1, "USD", "US")) {
        Err(RuleError::NotBoolean { expression, .. }) => assert_eq!(expression, "amount + 1"),
        other => panic!("expected NotBoolean, got {:?}", other),
    }
}

#[test]
fn scalar_environment_is_rejected() {
    let rule = RuleExpr::compile("true").unwrap();
    assert!(matches!(
        rule.evaluate(&42),
        Err(RuleError::Environment(_))
    ));
    assert!(matches!(
        rule.evaluate(&vec!["a"]),
        Err(RuleError::Environment(_))
    ));
}

#[test]
fn constant_rules_ignore_environment() {
    let always = RuleExpr::compile("1 == 1").unwrap();
    let never = RuleExpr::compile("1 == 2").unwrap();

    assert!(always.evaluate(&()).unwrap());
    assert!(!never.evaluate(&PaymentEnv::new(0, "", "")).unwrap());
}

// ============================================================================
// Arithmetic faults
// ============================================================================

#[test]
fn division_by_zero_is_a_run_error() {
    init_tracing();
    let rule = RuleExpr::compile("amount / retries > 1").unwrap();

    assert!(matches!(
        rule.evaluate(&PaymentEnv::new(10, "USD", "US")),
        Err(RuleError::Run(_))
    ));
}

#[test]
fn modulo_by_zero_is_a_run_error() {
    let rule = RuleExpr::compile("amount % retries == 0").unwrap();

    assert!(matches!(
        rule.evaluate(&PaymentEnv::new(10, "USD", "US")),
        Err(RuleError::Run(_))
    ));
}

#[test]
fn integer_overflow_is_a_run_error() {
    let rule = RuleExpr::compile("amount + 1 > 0").unwrap();

    assert!(matches!(
        rule.evaluate(&PaymentEnv::new(i64::MAX, "USD", "US")),
        Err(RuleError::Run(_))
    ));
    assert!(rule.evaluate(&PaymentEnv::new(1, "USD", "US")).unwrap());
}
