#![cfg(test)]

// Property tests for ProbeHashMap kept inside the crate so they can assert
// crate-internal invariants (prime capacity) alongside model equivalence.

use crate::prime::{is_prime, Primality};
use crate::ProbeHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
}

fn key_from(pool: &[String], i: usize) -> String {
    pool[i].clone()
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_scenario(mut sut: ProbeHashMap, pool: Vec<String>, ops: Vec<OpI>) -> Result<(), TestCaseError> {
    let floor = sut.capacity();
    let mut model: HashMap<String, String> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = key_from(&pool, i);
                let v = format!("{v}");
                sut.insert(k.clone(), v.clone());
                model.insert(k.clone(), v);
                prop_assert_eq!(sut.get(&k), model.get(&k).map(String::as_str));
                // The insert that crosses 70% resizes before placing, so
                // at most the newest entry sits past the bound.
                prop_assert!((sut.len() - 1) * 100 / sut.capacity() <= 70);
            }
            OpI::Remove(i) => {
                let k = key_from(&pool, i);
                prop_assert_eq!(sut.remove(&k), model.remove(&k));
                prop_assert!(sut.get(&k).is_none());
            }
            OpI::Get(i) => {
                let k = key_from(&pool, i);
                prop_assert_eq!(sut.get(&k), model.get(&k).map(String::as_str));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
        }

        // Post-conditions after each op
        // 1) Size parity with the model
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        // 2) Capacity stays prime and never undercuts the floor
        prop_assert_eq!(is_prime(sut.capacity()), Primality::Prime);
        prop_assert!(sut.capacity() >= floor);
    }

    // Every surviving model entry is still reachable at the end.
    for (k, v) in &model {
        prop_assert_eq!(sut.get(k), Some(v.as_str()));
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap at
// the default base size. Invariants exercised across random op sequences:
// - insert/overwrite, remove, get, contains_key parity with the model
// - len/is_empty parity after every operation
// - capacity prime and >= floor; load factor bounded after every insert
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(ProbeHashMap::new(), pool, ops)?;
    }
}

// Property: the same invariants on a deliberately tiny table (base size 2),
// where nearly every operation collides, resizes trigger constantly, and
// tombstones regularly saturate the floor-pinned capacity.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_tiny_table((pool, ops) in arb_scenario()) {
        run_scenario(ProbeHashMap::with_base_size(2), pool, ops)?;
    }
}
