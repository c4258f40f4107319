//! Serialization of the store as one flat sequence alternating left and
//! right values: `[l0, r0, l1, r1, ...]`. A pair contributes exactly two
//! consecutive elements; there is no nesting and no per-pair grouping.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{DualIndexStore, DEFAULT_CAPACITY};

impl<L, R, H, RH> Serialize for DualIndexStore<L, R, H, RH>
    where L: Hash + Eq + Serialize, R: Hash + Eq + Serialize, H: BuildHasher, RH: BuildHasher
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut seq = serializer.serialize_seq(Some(self.len() * 2))?;
        for (left, right) in self.iter() {
            seq.serialize_element(left)?;
            seq.serialize_element(right)?;
        }
        seq.end()
    }
}

impl<'de, L, R, H, RH> Deserialize<'de> for DualIndexStore<L, R, H, RH>
    where
        L: Hash + Eq + Deserialize<'de>,
        R: Hash + Eq + Deserialize<'de>,
        H: BuildHasher + Default,
        RH: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        deserializer.deserialize_seq(StoreVisitor { marker: PhantomData })
    }
}

struct StoreVisitor<L, R, H, RH>
    where L: Hash + Eq, R: Hash + Eq
{
    marker: PhantomData<DualIndexStore<L, R, H, RH>>,
}

impl<'de, L, R, H, RH> Visitor<'de> for StoreVisitor<L, R, H, RH>
    where
        L: Hash + Eq + Deserialize<'de>,
        R: Hash + Eq + Deserialize<'de>,
        H: BuildHasher + Default,
        RH: BuildHasher + Default,
{
    type Value = DualIndexStore<L, R, H, RH>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a flat sequence of alternating left and right values")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: SeqAccess<'de>
    {
        let pair_hint = seq.size_hint().map_or(DEFAULT_CAPACITY, |elements| (elements / 2).max(1));
        let mut store = DualIndexStore::with_hashers(
            DualIndexStore::<L, R, H, RH>::apply_load_factor(pair_hint),
            H::default(),
            RH::default(),
        );

        while let Some(left) = seq.next_element::<L>()? {
            let Some(right) = seq.next_element::<R>()? else {
                return Err(de::Error::custom("sequence holds an odd number of elements"));
            };

            if store.try_associate(left, right).is_err() {
                return Err(de::Error::custom("sequence holds a duplicate left or right value"));
            }
        }

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use crate::DualIndexStore;

    #[test]
    fn encodes_flat_alternating_sequence() {
        let mut store = DualIndexStore::new();
        store.associate("A".to_string(), 1u32);
        assert_eq!(serde_json::to_string(&store).unwrap(), r#"["A",1]"#);

        store.associate("B".to_string(), 2);
        assert_eq!(serde_json::to_string(&store).unwrap(), r#"["A",1,"B",2]"#);
    }

    #[test]
    fn decodes_flat_alternating_sequence() {
        let store: DualIndexStore<String, u32> = serde_json::from_str(r#"["A",1,"B",2,"C",3]"#).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get_right(&"A".to_string()), Some(&1));
        assert_eq!(store.get_right(&"B".to_string()), Some(&2));
        assert_eq!(store.get_left(&3), Some(&"C".to_string()));
    }

    #[test]
    fn round_trip_reproduces_the_store() {
        let store: DualIndexStore<String, u32> = DualIndexStore::from_unique_pairs([
            ("A".to_string(), 1),
            ("B".to_string(), 2),
            ("C".to_string(), 3),
        ]);

        let encoded = serde_json::to_string(&store).unwrap();
        let decoded: DualIndexStore<String, u32> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, store);
    }

    #[test]
    fn decodes_empty_sequence() {
        let store: DualIndexStore<String, u32> = serde_json::from_str("[]").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_odd_element_count() {
        let result: Result<DualIndexStore<String, u32>, _> = serde_json::from_str(r#"["A",1,"B"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_left_value() {
        let result: Result<DualIndexStore<String, u32>, _> = serde_json::from_str(r#"["A",1,"A",2]"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_right_value() {
        let result: Result<DualIndexStore<String, u32>, _> = serde_json::from_str(r#"["A",1,"B",1]"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_mistyped_element() {
        let result: Result<DualIndexStore<String, u32>, _> = serde_json::from_str(r#"["A","B"]"#);
        assert!(result.is_err());
    }
}
