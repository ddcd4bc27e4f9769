//! String hashing and the double-hash probe sequence.
//!
//! `string_hash` treats a string as a base-`a` positional number modulo `m`.
//! It is accumulated left to right in Horner form, `hash = (hash * a + byte)
//! mod m`, which is equal to `Σ a^(len-1-i) * byte(i) mod m` without ever
//! materializing a power of `a`, so long keys and large multipliers cannot
//! overflow.
//!
//! [`ProbeSequence`] combines two such hashes under distinct prime
//! multipliers into the slot visit order for one key: attempt `k` lands on
//! `(h1 + k * step) mod num_slots`. The step is derived from the second hash
//! and kept in `1..num_slots`, so over a prime slot count the sequence is a
//! permutation of all slots.

/// Multiplier for the first hash of the pair.
const HASH_PRIME_1: u64 = 1019;
/// Multiplier for the second; coprime to the first and to any table size.
const HASH_PRIME_2: u64 = 2699;

/// Base-`a` positional hash of `s` modulo `m`. The result is `< m`.
pub(crate) fn string_hash(s: &str, a: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be positive");
    s.bytes().fold(0u64, |hash, b| {
        ((u128::from(hash) * u128::from(a) + u128::from(b)) % u128::from(m)) as u64
    })
}

/// Infinite iterator over the slot indices to probe for one key.
///
/// Hashes the key exactly twice at construction; advancing is a single
/// add-and-reduce per attempt.
pub(crate) struct ProbeSequence {
    index: u64,
    step: u64,
    num_slots: u64,
}

impl ProbeSequence {
    pub(crate) fn new(key: &str, num_slots: usize) -> Self {
        debug_assert!(num_slots >= 2, "table capacity is at least 2");
        let m = num_slots as u64;
        let h1 = string_hash(key, HASH_PRIME_1, m);
        let h2 = string_hash(key, HASH_PRIME_2, m);
        // Mapping h2 into 1..m (rather than taking h2 + 1, which can equal
        // m and collapse the whole sequence onto one slot) keeps the step
        // non-zero modulo the slot count for every key.
        let step = h2 % (m - 1) + 1;
        Self {
            index: h1,
            step,
            num_slots: m,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.index as usize;
        self.index = (self.index + self.step) % self.num_slots;
        Some(current)
    }
}
