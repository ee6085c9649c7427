//! Bidirectional map with unique keys and unique values.

use crate::error::{XcError, XcResult};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::Debug;

#[derive(Debug, Clone)]
pub struct BiMap<K, V> {
    forward: BTreeMap<K, V>,
    reverse: BTreeMap<V, K>,
}

impl<K, V> Default for BiMap<K, V> {
    fn default() -> Self {
        BiMap {
            forward: BTreeMap::new(),
            reverse: BTreeMap::new(),
        }
    }
}

impl<K, V> BiMap<K, V>
where
    K: Ord + Clone + Debug,
    V: Ord + Clone + Debug,
{
    /// Builds the map from pairs; any repeated key or value is an error.
    pub fn from_pairs<I>(pairs: I) -> XcResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = BiMap::default();
        for (k, v) in pairs {
            map.insert(k, v)?;
        }
        Ok(map)
    }

    pub fn insert(&mut self, k: K, v: V) -> XcResult<()> {
        if self.forward.contains_key(&k) {
            return Err(XcError::DuplicateValue(format!("key {:?}", k)));
        }
        if self.reverse.contains_key(&v) {
            return Err(XcError::DuplicateValue(format!("value {:?}", v)));
        }

        self.forward.insert(k.clone(), v.clone());
        self.reverse.insert(v, k);

        Ok(())
    }

    pub fn value<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.forward.get(k)
    }

    pub fn key(&self, v: &V) -> Option<&K> {
        self.reverse.get(v)
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.forward.contains_key(k)
    }

    pub fn contains_value(&self, v: &V) -> bool {
        self.reverse.contains_key(v)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.forward.iter()
    }
}
