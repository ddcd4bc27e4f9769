//! probe-hashmap: a single-threaded, string-keyed map built on open
//! addressing with double hashing, tombstone deletion, and automatic
//! capacity rebalancing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: implement the probing, deletion, and resize machinery itself in
//!   small, separately testable layers, rather than delegating storage to
//!   an existing table.
//! - Layers:
//!   - prime: capacity selection. Slot counts are always prime so the
//!     double-hash step is coprime to the capacity and each probe sequence
//!     is a permutation of all slots.
//!   - hash: the base-`a` positional string hash (Horner accumulation, no
//!     materialized powers) and ProbeSequence, the per-key slot visit
//!     order combining two hashes with distinct prime multipliers.
//!   - table: ProbeHashMap, the public map. Owns a `Vec` of tagged slots
//!     (Empty / Occupied / Tombstone), tracks the occupied count, and
//!     applies the load-factor policy: grow at >70% occupancy before
//!     placing, shrink at <10% before removing, never below the base size
//!     the table was created with.
//!
//! Constraints
//! - Single-threaded: operations run to completion and a resize replaces
//!   the entire backing store; concurrent callers must serialize every
//!   operation externally.
//! - Keys and values are owned `String`s; the table is their sole owner
//!   and everything is released together when the table drops.
//! - Exactly one slot is written per insert: the probe scan remembers the
//!   first reusable slot but keeps going until it has either found the key
//!   (overwrite in place) or proven it absent. Placing at the first
//!   tombstone unconditionally would duplicate keys that live further down
//!   the chain.
//! - Deletion tombstones the slot instead of emptying it, so probe chains
//!   running through it keep reaching their later entries. The occupied
//!   count only ever changes on an actual placement or an actual match.
//! - Every probe loop is bounded to one full pass. On a table pinned at
//!   its floor, tombstones can absorb every Empty slot, making a full
//!   pass a legitimate miss rather than a corruption.
//!
//! Notes and non-goals
//! - No iteration API and no generic key/value parameters; this is a
//!   string-to-string table.
//! - No persistence and no concurrency support.
//! - Resizing only doubles or halves the base size; the capacity is the
//!   next prime at or above it.

mod hash;
mod prime;
mod table;
mod table_proptest;

// Public surface
pub use table::ProbeHashMap;
