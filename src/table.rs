//! ProbeHashMap: the slot table with load-factor driven rebalancing.

use crate::hash::ProbeSequence;
use crate::prime::next_prime;
use core::fmt;
use std::mem;

/// Base size used by `new()`; also the floor below which that table never
/// shrinks.
const INITIAL_BASE_SIZE: usize = 50;

/// Load percentage above which an insert grows the table first.
const MAX_LOAD_PERCENT: usize = 70;
/// Load percentage below which a remove shrinks the table first.
const MIN_LOAD_PERCENT: usize = 10;

#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
}

/// One slot of the table.
///
/// `Tombstone` marks a formerly occupied slot: available for placement, but
/// probe chains continue through it, so entries placed beyond it stay
/// reachable. `Empty` ends a chain.
#[derive(Debug)]
enum Slot {
    Empty,
    Occupied(Entry),
    Tombstone,
}

/// A string-keyed map over open addressing with double hashing.
///
/// The slot count is always prime and at least the configured base size.
/// Inserting past 70% occupancy doubles the base size first; removing below
/// 10% halves it (never below the base size the table was created with).
/// Deleted entries leave tombstones that later insertions reclaim.
///
/// Single-threaded by design; callers that share a table across threads
/// must serialize every operation externally, since a resize replaces the
/// whole backing store.
pub struct ProbeHashMap {
    slots: Vec<Slot>,
    /// Occupied slots only; tombstones are not counted.
    count: usize,
    /// Requested size the current prime capacity was derived from.
    base_size: usize,
    /// Resizes never take `base_size` below this.
    floor: usize,
}

impl ProbeHashMap {
    /// Empty table at the default base size of 50 (53 slots).
    pub fn new() -> Self {
        Self::with_base_size(INITIAL_BASE_SIZE)
    }

    /// Empty table whose capacity is the smallest prime `>= base_size`.
    /// `base_size` is also the table's shrink floor.
    pub fn with_base_size(base_size: usize) -> Self {
        // Doubling from 0 or 1 never grows; 2 is the smallest workable base.
        let base_size = base_size.max(2);
        let size = next_prime(base_size);
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, || Slot::Empty);
        Self {
            slots,
            count: 0,
            base_size,
            floor: base_size,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Actual slot count. Always prime and `>=` the configured base size.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn load_percent(&self) -> usize {
        self.count * 100 / self.slots.len()
    }

    /// Insert or overwrite. Exactly one slot is written: an existing entry
    /// for `key` is updated in place, otherwise the new entry fills the
    /// first Empty or Tombstone slot along the key's probe chain.
    pub fn insert(&mut self, key: String, value: String) {
        if self.load_percent() > MAX_LOAD_PERCENT {
            self.resize_up();
        }
        self.place(key, value);
    }

    /// Look up the value stored for `key`.
    ///
    /// The probe skips tombstones, stops at the first Empty slot, and is
    /// bounded to one full pass over the table: a chain with no Empty slot
    /// left (possible once tombstones saturate a floor-pinned table) ends
    /// in a miss rather than a cycle.
    pub fn get(&self, key: &str) -> Option<&str> {
        let size = self.slots.len();
        for index in ProbeSequence::new(key, size).take(size) {
            match &self.slots[index] {
                Slot::Occupied(entry) if entry.key == key => {
                    return Some(entry.value.as_str());
                }
                Slot::Occupied(_) | Slot::Tombstone => {}
                Slot::Empty => return None,
            }
        }
        self.debug_check_saturated();
        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value. The slot becomes a tombstone so
    /// chains probing through it keep working. Absent keys are a no-op and
    /// leave the entry count untouched.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if self.load_percent() < MIN_LOAD_PERCENT {
            self.resize_down();
        }
        let size = self.slots.len();
        for index in ProbeSequence::new(key, size).take(size) {
            let hit = match &self.slots[index] {
                Slot::Occupied(entry) => entry.key == key,
                Slot::Tombstone => false,
                Slot::Empty => return None,
            };
            if hit {
                self.count -= 1;
                match mem::replace(&mut self.slots[index], Slot::Tombstone) {
                    Slot::Occupied(entry) => return Some(entry.value),
                    _ => unreachable!("hit slot was occupied"),
                }
            }
        }
        self.debug_check_saturated();
        None
    }

    /// Probe for `key` and write exactly one slot. Shared by `insert` and
    /// resize migration so rebuilt tables go through the same placement.
    fn place(&mut self, key: String, value: String) {
        let size = self.slots.len();
        let mut reusable: Option<usize> = None;

        for index in ProbeSequence::new(&key, size).take(size) {
            match &mut self.slots[index] {
                Slot::Occupied(entry) if entry.key == key => {
                    entry.value = value;
                    return;
                }
                Slot::Occupied(_) => continue,
                Slot::Tombstone => {
                    // Remember the earliest reusable slot, but keep
                    // scanning: the key may live further down the chain
                    // and must be overwritten, not duplicated.
                    if reusable.is_none() {
                        reusable = Some(index);
                    }
                    continue;
                }
                Slot::Empty => {}
            }
            // Empty slot: the key is nowhere in this chain.
            let target = reusable.unwrap_or(index);
            self.slots[target] = Slot::Occupied(Entry { key, value });
            self.count += 1;
            return;
        }

        // Full pass without an Empty slot or a key match. A tombstone must
        // have been seen: the load bound keeps count below capacity.
        let Some(target) = reusable else {
            unreachable!("probe sequence exhausted with every slot occupied");
        };
        log::trace!("tombstone-saturated table; placing in slot {target}");
        self.slots[target] = Slot::Occupied(Entry { key, value });
        self.count += 1;
    }

    fn resize_up(&mut self) {
        self.resize(self.base_size * 2);
    }

    fn resize_down(&mut self) {
        self.resize(self.base_size / 2);
    }

    /// Rebuild over `next_prime(new_base_size)` slots, re-placing every
    /// occupied entry through the normal placement path; tombstones are
    /// dropped. No-op when the target is below the floor. The swap of
    /// backing store, capacity, and count is a single assignment.
    fn resize(&mut self, new_base_size: usize) {
        if new_base_size < self.floor {
            return;
        }
        let mut next = Self::with_base_size(new_base_size);
        next.floor = self.floor;
        log::debug!(
            "resizing table: {} -> {} slots ({} live entries)",
            self.capacity(),
            next.capacity(),
            self.count
        );
        for slot in mem::take(&mut self.slots) {
            if let Slot::Occupied(entry) = slot {
                next.place(entry.key, entry.value);
            }
        }
        *self = next;
    }

    /// A probe that ran a full pass is legitimate only when tombstones have
    /// soaked up every Empty slot; anything else means broken invariants.
    fn debug_check_saturated(&self) {
        debug_assert!(
            !self.slots.iter().any(|s| matches!(s, Slot::Empty)),
            "full probe pass over a table that still has Empty slots"
        );
    }
}

impl Default for ProbeHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProbeHashMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeHashMap")
            .field("len", &self.count)
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
