//! One compiled rule shared across threads.

use crate::common::*;
use std::sync::Arc;
use std::thread;

#[test]
fn shared_rule_evaluates_concurrently() {
    let rule = RuleExpr::compile("amount % 2 == 0").unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8i64)
            .map(|t| {
                let rule = &rule;
                s.spawn(move || {
                    (0..50i64)
                        .map(|i| {
                            let amount = t * 100 + i;
                            let got = rule.evaluate(&PaymentEnv::new(amount, "USD", "US")).unwrap();
                            assert_eq!(got, amount % 2 == 0);
                            got
                        })
                        .filter(|even| *even)
                        .count()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 25);
        }
    });
}

#[test]
fn cloned_rules_share_a_program() {
    let rule = Arc::new(RuleExpr::compile("retries < 3").unwrap());

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let rule = rule.clone();
            thread::spawn(move || {
                let copy = (*rule).clone();
                let mut env = PaymentEnv::new(1, "USD", "US");
                env.retries = 2;
                copy.evaluate(&env).unwrap()
            })
        })
        .collect();

    for worker in workers {
        assert!(worker.join().unwrap());
    }
}
