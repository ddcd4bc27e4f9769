// ProbeHashMap property tests (consolidated), public API only.
//
// Property 1: model equivalence under random op streams.
//  - Model: std::collections::HashMap<String, String>.
//  - Invariant: get/contains_key/remove agree with the model after every
//    operation, and len() tracks the model's len.
//  - Operations: insert (also overwrites), remove, get.
//
// Property 2: round-trip across rebalancing.
//  - Invariant: inserting any set of distinct keys (sized to force
//    up-resizes) keeps every key retrievable with its latest value, and
//    removing any subset leaves exactly the complement retrievable.
use proptest::prelude::*;
use probe_hashmap::ProbeHashMap;
use std::collections::HashMap;

// Property 1: model equivalence.
proptest! {
    #[test]
    fn prop_matches_hashmap_model(
        keys in 1usize..=6,
        ops in proptest::collection::vec((0u8..=2u8, 0usize..100usize, any::<u16>()), 1..120)
    ) {
        let mut t = ProbeHashMap::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for (op, raw_k, v) in ops {
            let key = format!("k{}", raw_k % keys);
            match op {
                0 => {
                    let value = format!("v{v}");
                    t.insert(key.clone(), value.clone());
                    model.insert(key.clone(), value);
                }
                1 => {
                    prop_assert_eq!(t.remove(&key), model.remove(&key));
                }
                2 => {
                    prop_assert_eq!(t.get(&key), model.get(&key).map(String::as_str));
                }
                _ => unreachable!(),
            }

            // Invariant after each step: lookups and size agree with the model.
            prop_assert_eq!(t.get(&key), model.get(&key).map(String::as_str));
            prop_assert_eq!(t.contains_key(&key), model.contains_key(&key));
            prop_assert_eq!(t.len(), model.len());
        }
    }
}

// Property 2: round-trip across rebalancing.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_round_trip_survives_resizes(
        n in 60usize..200,
        remove_mask in proptest::collection::vec(any::<bool>(), 200)
    ) {
        // 60+ distinct keys guarantee at least one up-resize from 53 slots.
        let mut t = ProbeHashMap::new();
        for i in 0..n {
            t.insert(format!("key-{i}"), format!("value-{i}"));
        }
        prop_assert_eq!(t.len(), n);
        prop_assert!(t.capacity() > 53);
        for i in 0..n {
            prop_assert_eq!(
                t.get(&format!("key-{i}")).map(str::to_owned),
                Some(format!("value-{i}"))
            );
        }

        let mut expected = n;
        for i in 0..n {
            if remove_mask[i] {
                prop_assert_eq!(t.remove(&format!("key-{i}")), Some(format!("value-{i}")));
                expected -= 1;
            }
        }
        prop_assert_eq!(t.len(), expected);
        for i in 0..n {
            let got = t.get(&format!("key-{i}")).map(str::to_owned);
            if remove_mask[i] {
                prop_assert_eq!(got, None);
            } else {
                prop_assert_eq!(got, Some(format!("value-{i}")));
            }
        }
    }
}
