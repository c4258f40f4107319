use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher, RandomState};
use std::mem;

const DEFAULT_CAPACITY: usize = 32;

const GROWTH_FACTOR: f64 = 2.0;

const MAX_LOAD_FACTOR: f64 = 0.9;

const EMPTY_SLOT: usize = usize::MAX;

/// A bidirectional map holding unique (left, right) value pairs.
///
/// The store keeps a bijection between its left and right values: associating
/// a pair whose left or right value is already present evicts the conflicting
/// pair(s), so no left value ever maps to two right values and vice versa.
/// Lookups are O(1) in either direction.
///
/// Pairs are stored once in a dense bucket vector; two open-addressing index
/// tables (one keyed by left values, one by right values) point into it. Both
/// tables are only ever written together, which is what keeps the two
/// directions consistent.
#[derive(Clone)]
pub struct DualIndexStore<L, R, H = RandomState, RH = RandomState>
    where L: Hash + Eq, R: Hash + Eq
{
    data: Vec<Bucket<L, R>>,
    left_index: Box<[usize]>,
    right_index: Box<[usize]>,
    hasher: H,
    reverse_hasher: RH,
    generation: u64,
}

#[derive(Clone)]
struct Bucket<L, R> {
    left: L,
    right: R,
}

/// An opaque token locating one pair inside a [`DualIndexStore`] for
/// positional traversal.
///
/// A position is only valid for the store state it was obtained from: any
/// mutation of the store invalidates all outstanding positions, and using a
/// stale position panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    slot: usize,
    generation: u64,
}

impl<L, R> Default for DualIndexStore<L, R>
    where L: Hash + Eq, R: Hash + Eq
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R> DualIndexStore<L, R>
    where L: Hash + Eq, R: Hash + Eq
{
    /// Create a new empty store with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new empty store that can hold `capacity` pairs without
    /// reallocating. The capacity is a performance hint only.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity_with_load = Self::apply_load_factor(capacity);
        Self::with_hashers(capacity_with_load, RandomState::default(), RandomState::default())
    }

    /// Create a store from a sequence of pairs.
    ///
    /// # Panics
    /// Panics if the sequence contains a duplicate left value or a duplicate
    /// right value. Such input is a programmer error; the store refuses it
    /// rather than silently dropping one of the conflicting pairs.
    pub fn from_unique_pairs<I>(pairs: I) -> Self
        where I: IntoIterator<Item = (L, R)>
    {
        let pairs = pairs.into_iter();
        let mut store = Self::with_capacity(pairs.size_hint().0);

        for (left, right) in pairs {
            assert!(
                store.try_associate(left, right).is_ok(),
                "pair sequence contains a duplicate left or right value",
            );
        }

        store
    }
}

impl<L, R, H, RH> DualIndexStore<L, R, H, RH>
    where L: Hash + Eq, R: Hash + Eq, H: BuildHasher, RH: BuildHasher
{
    /// Create a new empty store with the given index capacity and hashers.
    /// Unlike [`with_capacity`], the capacity is used for the index tables
    /// verbatim, without headroom for the load factor.
    ///
    /// [`with_capacity`]: #method.with_capacity
    pub fn with_hashers(capacity: usize, hasher: H, reverse_hasher: RH) -> Self {
        let capacity = capacity.max(1);
        let left_index = vec![EMPTY_SLOT; capacity].into_boxed_slice();
        let right_index = vec![EMPTY_SLOT; capacity].into_boxed_slice();
        DualIndexStore {
            data: Vec::new(),
            left_index,
            right_index,
            hasher,
            reverse_hasher,
            generation: 0,
        }
    }

    /// Increase a capacity so that holding that many pairs stays below the
    /// maximum load factor.
    fn apply_load_factor(capacity: usize) -> usize {
        (capacity as f64 / MAX_LOAD_FACTOR) as usize + 1
    }

    /// Convert an element into an index by hashing it and mapping the hash
    /// onto the given table capacity.
    fn hash_to_index<E, G>(hasher: &G, element: &E, capacity: usize) -> usize
        where E: Hash, G: BuildHasher
    {
        let mut hasher = hasher.build_hasher();
        element.hash(&mut hasher);
        hasher.finish() as usize % capacity
    }

    /// Run the Robin Hood probe for `element` over one index table. Shared
    /// by left and right lookups, which pass in their hasher and a projection
    /// from buckets to the probed side. Also used during rehashing, where the
    /// table being probed is not yet owned by the store.
    ///
    /// Returns `Ok(index)` with the table index holding the element, or
    /// `Err(index)` with the table index where it would be inserted (an empty
    /// slot, or an occupied slot with a lower probe distance).
    #[inline(always)]
    fn probe_index<E, G>(
        element: &E,
        table: &[usize],
        hasher: &G,
        lookup: fn(&Bucket<L, R>) -> &E,
        buckets: &[Bucket<L, R>],
        capacity: usize,
    ) -> Result<usize, usize>
        where E: Hash + Eq, G: BuildHasher
    {
        let ideal_index = Self::hash_to_index(hasher, element, capacity);
        let mut index = ideal_index;
        let mut dist = 0;
        while table[index] != EMPTY_SLOT {
            let bucket = &buckets[table[index]];
            if lookup(bucket) == element {
                return Ok(index);
            } else {
                let occupant_ideal = Self::hash_to_index(hasher, lookup(bucket), capacity);
                let occupant_dist = (index + capacity - occupant_ideal) % capacity;
                if dist > occupant_dist {
                    return Err(index);
                }
            }

            index = (index + 1) % capacity;
            dist += 1;
        }
        Err(index)
    }

    /// Probe one of the store's own index tables for an element.
    ///
    /// The probe does not terminate on a completely full table, which the
    /// load factor rules out.
    #[inline(always)]
    fn lookup_index<E, G>(
        &self,
        element: &E,
        table: &[usize],
        hasher: &G,
        lookup: fn(&Bucket<L, R>) -> &E,
    ) -> Result<usize, usize>
        where E: Hash + Eq, G: BuildHasher
    {
        Self::probe_index(element, table, hasher, lookup, &self.data, self.current_capacity())
    }

    /// Find the table index the left value is stored at, or `Err` with the
    /// table index it would be inserted at.
    fn lookup_index_left(&self, left: &L) -> Result<usize, usize> {
        self.lookup_index(left, &self.left_index, &self.hasher, |bucket: &Bucket<L, R>| &bucket.left)
    }

    /// Find the table index the right value is stored at, or `Err` with the
    /// table index it would be inserted at.
    fn lookup_index_right(&self, right: &R) -> Result<usize, usize> {
        self.lookup_index(right, &self.right_index, &self.reverse_hasher, |bucket: &Bucket<L, R>| &bucket.right)
    }

    /// Push a new bucket to the tail of the bucket store and register it in
    /// both index tables. Used when both the left and the right value are new.
    ///
    /// # Parameters
    /// * `left_index` - The table index in the left index to insert at.
    /// * `right_index` - The table index in the right index to insert at.
    fn push_new_bucket(&mut self, bucket: Bucket<L, R>, left_index: usize, right_index: usize) {
        self.data.push(bucket);
        self.insert_mapping_left(left_index, self.len() - 1);
        self.insert_mapping_right(right_index, self.len() - 1);
    }

    /// Delete the bucket at the given slot and unregister it from both index
    /// tables. The last bucket is swapped into the freed slot, so any
    /// temporaries holding the moved bucket's slot become invalid; this
    /// method fixes up the index tables for the moved bucket itself.
    ///
    /// # Parameters
    /// * `bucket_index` - The slot of the bucket to delete.
    /// * `left_table_index` - The left-table entry pointing at the bucket, if
    /// the caller already probed it. Looked up otherwise.
    /// * `right_table_index` - The right-table entry pointing at the bucket,
    /// if the caller already probed it. Looked up otherwise.
    fn delete_bucket(&mut self, bucket_index: usize, left_table_index: Option<usize>, right_table_index: Option<usize>) -> Bucket<L, R> {
        assert!(bucket_index < self.len(), "index out of bounds");

        if let Some(left_table_index) = left_table_index {
            self.delete_mapping_left(left_table_index);
        } else {
            let probed = self.lookup_index_left(&self.data[bucket_index].left)
                .unwrap_or_else(|_| unreachable!("stored left value must be indexed"));
            self.delete_mapping_left(probed);
        }

        if let Some(right_table_index) = right_table_index {
            self.delete_mapping_right(right_table_index);
        } else {
            let probed = self.lookup_index_right(&self.data[bucket_index].right)
                .unwrap_or_else(|_| unreachable!("stored right value must be indexed"));
            self.delete_mapping_right(probed);
        }

        // trivial case: delete and return the last bucket
        if bucket_index == self.len() - 1 {
            return self.data.pop().unwrap();
        }

        // probe the table entries of the bucket that is about to move
        let bucket_to_move = &self.data[self.len() - 1];
        let left_entry = self.lookup_index_left(&bucket_to_move.left);
        let right_entry = self.lookup_index_right(&bucket_to_move.right);
        debug_assert!(left_entry.is_ok());
        debug_assert!(right_entry.is_ok());

        let tail = self.len() - 1;
        let (lower, upper) = self.data.split_at_mut(tail);

        // swap with the last bucket
        mem::swap(&mut lower[bucket_index], &mut upper[0]);

        // repoint both tables at the moved bucket's new slot
        self.left_index[left_entry.unwrap()] = bucket_index;
        self.right_index[right_entry.unwrap()] = bucket_index;

        self.data.pop().unwrap()
    }

    /// Replace the bucket at the given slot with a new bucket and return the
    /// old one. The index tables are not touched.
    fn replace_bucket(&mut self, bucket_index: usize, bucket: Bucket<L, R>) -> Bucket<L, R> {
        assert!(bucket_index < self.len(), "index out of bounds");
        let mut old_bucket = bucket;
        mem::swap(&mut self.data[bucket_index], &mut old_bucket);
        old_bucket
    }

    /// Insert a bucket slot into an index table at the given table index,
    /// shifting occupants to the right until an empty slot absorbs the
    /// displacement. The table index must come from a failed probe, so it
    /// already respects the probe distance ordering.
    #[inline(always)]
    fn insert_mapping(table: &mut [usize], mut table_index: usize, bucket_index: usize) {
        let mut current_content = bucket_index;
        while table[table_index] != EMPTY_SLOT {
            mem::swap(&mut table[table_index], &mut current_content);
            table_index = (table_index + 1) % table.len();
        }
        table[table_index] = current_content;
    }

    /// Insert a bucket slot into the left index table. `table_index` must be
    /// the `Err` value of [`lookup_index_left`] for the bucket's left value.
    ///
    /// [`lookup_index_left`]: #method.lookup_index_left
    fn insert_mapping_left(&mut self, table_index: usize, bucket_index: usize) {
        Self::insert_mapping(&mut self.left_index, table_index, bucket_index)
    }

    /// Insert a bucket slot into the right index table. `table_index` must be
    /// the `Err` value of [`lookup_index_right`] for the bucket's right value.
    ///
    /// [`lookup_index_right`]: #method.lookup_index_right
    fn insert_mapping_right(&mut self, table_index: usize, bucket_index: usize) {
        Self::insert_mapping(&mut self.right_index, table_index, bucket_index)
    }

    /// Clear one table entry and backward-shift the following probe chain:
    /// every occupant that is not already at its ideal index moves one slot
    /// back into the vacancy.
    fn delete_mapping<E, G>(
        table: &mut [usize],
        buckets: &[Bucket<L, R>],
        hasher: &G,
        lookup: fn(&Bucket<L, R>) -> &E,
        table_index: usize,
    )
        where E: Hash, G: BuildHasher
    {
        let capacity = table.len();
        table[table_index] = EMPTY_SLOT;
        let mut current = (table_index + 1) % capacity;

        while table[current] != EMPTY_SLOT
            && Self::hash_to_index(hasher, lookup(&buckets[table[current]]), capacity) != current
        {
            table.swap((current + capacity - 1) % capacity, current);
            current = (current + 1) % capacity;
        }
    }

    /// Delete an entry from the left index table.
    fn delete_mapping_left(&mut self, table_index: usize) {
        Self::delete_mapping(
            &mut self.left_index,
            &self.data,
            &self.hasher,
            |bucket: &Bucket<L, R>| &bucket.left,
            table_index,
        )
    }

    /// Delete an entry from the right index table.
    fn delete_mapping_right(&mut self, table_index: usize) {
        Self::delete_mapping(
            &mut self.right_index,
            &self.data,
            &self.reverse_hasher,
            |bucket: &Bucket<L, R>| &bucket.right,
            table_index,
        )
    }

    /// Get the current capacity of both index tables.
    fn current_capacity(&self) -> usize {
        self.left_index.len()
    }

    /// Returns whether the store can take `num` additional pairs without
    /// exceeding the maximum load.
    fn can_fit(&self, num: usize) -> bool {
        ((self.len() + num) as f64) < (self.current_capacity() as f64 * MAX_LOAD_FACTOR)
    }

    /// Rebuild both index tables at the given capacity. The bucket store is
    /// untouched, so outstanding positions stay valid.
    fn resize(&mut self, new_capacity: usize) {
        assert!(new_capacity >= self.len(), "new capacity must be at least the current length");

        let mut new_left_index = vec![EMPTY_SLOT; new_capacity].into_boxed_slice();
        let mut new_right_index = vec![EMPTY_SLOT; new_capacity].into_boxed_slice();

        for (bucket_index, bucket) in self.data.iter().enumerate() {
            let left_slot = Self::probe_index(&bucket.left, &new_left_index, &self.hasher, |bucket: &Bucket<L, R>| &bucket.left, &self.data[..bucket_index], new_left_index.len()).unwrap_err();
            let right_slot = Self::probe_index(&bucket.right, &new_right_index, &self.reverse_hasher, |bucket: &Bucket<L, R>| &bucket.right, &self.data[..bucket_index], new_right_index.len()).unwrap_err();

            Self::insert_mapping(&mut new_left_index, left_slot, bucket_index);
            Self::insert_mapping(&mut new_right_index, right_slot, bucket_index);
        }

        self.left_index = new_left_index;
        self.right_index = new_right_index;
    }

    /// Grow the index tables according to the growth factor.
    fn grow(&mut self) {
        self.resize((self.current_capacity() as f64 * GROWTH_FACTOR).ceil() as usize)
    }

    /// Get the right value associated with the given left value, or `None`
    /// if the left value is not in the store.
    #[must_use]
    pub fn get_right(&self, left: &L) -> Option<&R> {
        self.lookup_index_left(left)
            .ok()
            .map(|index| &self.data[self.left_index[index]].right)
    }

    /// Get the left value associated with the given right value, or `None`
    /// if the right value is not in the store.
    #[must_use]
    pub fn get_left(&self, right: &R) -> Option<&L> {
        self.lookup_index_right(right)
            .ok()
            .map(|index| &self.data[self.right_index[index]].left)
    }

    /// Check if the store contains a pair with the given left value.
    #[must_use]
    pub fn contains_left(&self, left: &L) -> bool {
        self.lookup_index_left(left).is_ok()
    }

    /// Check if the store contains a pair with the given right value.
    #[must_use]
    pub fn contains_right(&self, right: &R) -> bool {
        self.lookup_index_right(right).is_ok()
    }

    /// Associate `left` with `right`, evicting any pairs that conflict with
    /// either value, and return the displaced counterparts as
    /// `(previous_right, previous_left)`.
    ///
    /// The eviction is evaluated as two removals in a fixed order: first the
    /// pair keyed by `left` is removed (its right value becomes
    /// `previous_right`), then the pair keyed by `right` is removed from the
    /// resulting state (its left value becomes `previous_left`). If `left`
    /// and `right` conflict with two different pairs, both are evicted and
    /// the pair count shrinks by one. If the exact pair being associated is
    /// already present, the first removal consumes it, so the result is
    /// `(Some(previous_right), None)`.
    ///
    /// The store assumes that values never compare equal (`==`) without
    /// being interchangeable; it is a logical error to associate a value
    /// that is equal to a stored one but hashes differently.
    ///
    /// If the store is near full, it resizes itself. The store never shrinks
    /// on its own.
    pub fn associate(&mut self, left: L, right: R) -> (Option<R>, Option<L>) {
        if !self.can_fit(1) {
            self.grow();
        }

        self.generation += 1;

        let left_entry = self.lookup_index_left(&left);
        let right_entry = self.lookup_index_right(&right);

        let mut previous_right = None;
        let mut previous_left = None;

        if let Ok(left_table_index) = left_entry {
            // the bucket currently holding the left value, henceforth "the
            // left bucket"
            let mut left_bucket = self.left_index[left_table_index];

            if let Ok(right_table_index) = right_entry {
                let right_bucket = self.right_index[right_table_index];

                if left_bucket != right_bucket {
                    // the right value belongs to a second pair; evict it and
                    // report its left value
                    let bucket = self.delete_bucket(right_bucket, None, right_entry.ok());

                    // the left bucket may have been the tail that was swapped
                    // into the freed slot
                    if left_bucket == self.len() {
                        left_bucket = right_bucket;
                    }

                    previous_left = Some(bucket.left);
                } else {
                    // the stored pair equals the new pair. The removal keyed
                    // by left consumes it, so the removal keyed by right
                    // finds nothing and only the right side is reported.
                    let bucket = self.replace_bucket(left_bucket, Bucket { left, right });
                    return (Some(bucket.right), None);
                }
            }

            // the left bucket gets a new right value: retire its old right
            // table entry and register the new one
            let old_right_entry = self.lookup_index_right(&self.data[left_bucket].right)
                .unwrap_or_else(|_| unreachable!("stored right value must be indexed"));
            self.delete_mapping_right(old_right_entry);
            self.insert_mapping_right(self.lookup_index_right(&right).unwrap_err(), left_bucket);

            // the left table entry already points at this bucket
            let bucket = self.replace_bucket(left_bucket, Bucket { left, right });
            previous_right = Some(bucket.right);
        } else if let Ok(right_table_index) = right_entry {
            let right_bucket = self.right_index[right_table_index];

            // the right bucket gets a new left value: retire its old left
            // table entry and register the new one
            let old_left_entry = self.lookup_index_left(&self.data[right_bucket].left)
                .unwrap_or_else(|_| unreachable!("stored left value must be indexed"));
            self.delete_mapping_left(old_left_entry);
            self.insert_mapping_left(left_entry.unwrap_err(), right_bucket);

            let bucket = self.replace_bucket(right_bucket, Bucket { left, right });
            previous_left = Some(bucket.left);
        } else {
            self.push_new_bucket(Bucket { left, right }, left_entry.unwrap_err(), right_entry.unwrap_err());
        }

        (previous_right, previous_left)
    }

    /// Associate `left` with `right` only if neither value is present yet.
    /// If one of them already is, nothing is changed and the conflicting
    /// counterparts are returned: the first error value is the right value
    /// currently paired with `left`, the second the left value currently
    /// paired with `right`.
    ///
    /// If the store is near full, it resizes itself.
    pub fn try_associate(&mut self, left: L, right: R) -> Result<(), (Option<&R>, Option<&L>)> {
        if !self.can_fit(1) {
            self.grow();
        }

        let left_entry = self.lookup_index_left(&left);
        let right_entry = self.lookup_index_right(&right);

        if left_entry.is_err() && right_entry.is_err() {
            self.generation += 1;
            self.push_new_bucket(Bucket { left, right }, left_entry.unwrap_err(), right_entry.unwrap_err());
            Ok(())
        } else {
            Err((
                left_entry.ok().map(|index| &self.data[self.left_index[index]].right),
                right_entry.ok().map(|index| &self.data[self.right_index[index]].left),
            ))
        }
    }

    /// Remove the pair keyed by the given left value from both directions and
    /// return its right value. Returns `None` and leaves the store untouched
    /// if the left value is not present.
    pub fn disassociate_left(&mut self, left: &L) -> Option<R> {
        let left_entry = self.lookup_index_left(left);
        if let Ok(left_table_index) = left_entry {
            self.generation += 1;
            let bucket_index = self.left_index[left_table_index];
            let bucket = self.delete_bucket(bucket_index, left_entry.ok(), None);
            Some(bucket.right)
        } else {
            None
        }
    }

    /// Remove the pair keyed by the given right value from both directions
    /// and return its left value. Returns `None` and leaves the store
    /// untouched if the right value is not present.
    pub fn disassociate_right(&mut self, right: &R) -> Option<L> {
        let right_entry = self.lookup_index_right(right);
        if let Ok(right_table_index) = right_entry {
            self.generation += 1;
            let bucket_index = self.right_index[right_table_index];
            let bucket = self.delete_bucket(bucket_index, None, right_entry.ok());
            Some(bucket.left)
        } else {
            None
        }
    }

    /// Remove all pairs. With `keep_capacity` the allocations are kept for
    /// reuse, otherwise the store drops back to its default footprint. The
    /// flag is a performance hint with no observable effect beyond that.
    pub fn disassociate_all(&mut self, keep_capacity: bool) {
        self.generation += 1;
        self.data.clear();

        if keep_capacity {
            self.left_index.fill(EMPTY_SLOT);
            self.right_index.fill(EMPTY_SLOT);
        } else {
            self.data.shrink_to_fit();
            let footprint = Self::apply_load_factor(DEFAULT_CAPACITY);
            self.left_index = vec![EMPTY_SLOT; footprint].into_boxed_slice();
            self.right_index = vec![EMPTY_SLOT; footprint].into_boxed_slice();
        }
    }

    /// Reserves capacity for at least `additional` more pairs. The store may
    /// reserve more space to speculatively avoid frequent reallocations.
    /// Does nothing if the capacity is already sufficient. Outstanding
    /// positions stay valid.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize, or if the allocation fails.
    pub fn reserve(&mut self, additional: usize) {
        if !self.can_fit(additional) {
            if usize::MAX - self.current_capacity() < additional {
                panic!("capacity overflow");
            }

            let new_capacity = Self::apply_load_factor(self.len() + additional);
            self.resize(new_capacity);
        }
    }

    /// Shrinks the capacity of the store as much as possible while keeping
    /// the index tables below the maximum load factor.
    pub fn shrink_to_fit(&mut self) {
        let new_capacity = Self::apply_load_factor(self.len());
        self.resize(new_capacity);
        self.data.shrink_to_fit();
    }

    /// Returns a new store with the left and right roles swapped. The result
    /// is fully independent of this store; mutating one never affects the
    /// other. Runs in O(n) since every pair is duplicated.
    #[must_use]
    pub fn inverse(&self) -> DualIndexStore<R, L, RH, H>
        where L: Clone, R: Clone, H: Clone, RH: Clone
    {
        DualIndexStore {
            data: self
                .data
                .iter()
                .map(|bucket| Bucket { left: bucket.right.clone(), right: bucket.left.clone() })
                .collect(),
            left_index: self.right_index.clone(),
            right_index: self.left_index.clone(),
            hasher: self.reverse_hasher.clone(),
            reverse_hasher: self.hasher.clone(),
            generation: 0,
        }
    }

    /// Returns the position traversal starts at, or `None` if the store is
    /// empty.
    #[must_use]
    pub fn first_position(&self) -> Option<Position> {
        (!self.is_empty()).then(|| Position { slot: 0, generation: self.generation })
    }

    /// Advances a position to the next pair in traversal order, or `None` if
    /// the given position was the last one.
    ///
    /// # Panics
    /// Panics if the position is stale, i.e. the store was mutated after the
    /// position was obtained.
    #[must_use]
    pub fn position_after(&self, position: Position) -> Option<Position> {
        self.check_position(position);
        let next = position.slot + 1;
        (next < self.len()).then(|| Position { slot: next, generation: self.generation })
    }

    /// Returns the pair at the given position.
    ///
    /// # Panics
    /// Panics if the position is stale, i.e. the store was mutated after the
    /// position was obtained.
    #[must_use]
    pub fn pair_at(&self, position: Position) -> (&L, &R) {
        self.check_position(position);
        let bucket = &self.data[position.slot];
        (&bucket.left, &bucket.right)
    }

    fn check_position(&self, position: Position) {
        assert_eq!(
            position.generation, self.generation,
            "position was invalidated by a mutation of the store",
        );
        assert!(position.slot < self.len(), "position out of bounds");
    }

    /// Returns the position of the pair keyed by the given left value, or
    /// `None` if the left value is not present.
    #[must_use]
    pub fn index_for_left(&self, left: &L) -> Option<Position> {
        self.lookup_index_left(left)
            .ok()
            .map(|index| Position { slot: self.left_index[index], generation: self.generation })
    }

    /// Returns the position of the pair owning the given right value, or
    /// `None` if the right value is not present. For an associated pair this
    /// is the same position [`index_for_left`] returns for its left value.
    ///
    /// [`index_for_left`]: #method.index_for_left
    #[must_use]
    pub fn index_for_right(&self, right: &R) -> Option<Position> {
        self.lookup_index_right(right)
            .ok()
            .map(|index| Position { slot: self.right_index[index], generation: self.generation })
    }

    /// Returns an iterator over the pairs in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, &R)> {
        self.data.iter().map(|bucket| (&bucket.left, &bucket.right))
    }

    /// Returns an iterator over the left values in traversal order.
    pub fn left_values(&self) -> impl Iterator<Item = &L> {
        self.data.iter().map(|bucket| &bucket.left)
    }

    /// Returns an iterator over the right values in traversal order.
    pub fn right_values(&self) -> impl Iterator<Item = &R> {
        self.data.iter().map(|bucket| &bucket.right)
    }

    /// Returns the number of pairs in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the store's `BuildHasher` for left values.
    pub fn hasher_left(&self) -> &H {
        &self.hasher
    }

    /// Returns a reference to the store's `BuildHasher` for right values.
    pub fn hasher_right(&self) -> &RH {
        &self.reverse_hasher
    }
}

impl<L, R> FromIterator<(L, R)> for DualIndexStore<L, R>
    where L: Hash + Eq, R: Hash + Eq
{
    /// Collect a sequence of pairs into a store. Panics on duplicate left or
    /// right values, like [`DualIndexStore::from_unique_pairs`].
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        Self::from_unique_pairs(iter)
    }
}

/// Two stores are equal iff they contain the same set of pairs, regardless
/// of the order they were associated in.
impl<L, R, H, RH> PartialEq for DualIndexStore<L, R, H, RH>
    where L: Hash + Eq, R: Hash + Eq, H: BuildHasher, RH: BuildHasher
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(left, right)| other.get_right(left) == Some(right))
    }
}

impl<L, R, H, RH> Eq for DualIndexStore<L, R, H, RH>
    where L: Hash + Eq, R: Hash + Eq, H: BuildHasher, RH: BuildHasher
{
}

/// Renders the left-to-right direction of the store in map notation.
impl<L, R, H, RH> fmt::Debug for DualIndexStore<L, R, H, RH>
    where L: Hash + Eq + fmt::Debug, R: Hash + Eq + fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.data.iter().map(|bucket| (&bucket.left, &bucket.right)))
            .finish()
    }
}

#[cfg(feature = "serde")]
mod serde;
