//! Keyed shuffle primitives over [`Pipeline`]: group-by-key, combine-per-key
//! and co-group. `combine_per_key` reduces hierarchically — per-thread
//! partial maps folded in parallel, then merged — which is sound only
//! because the combine function is associative and commutative.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use rayon::prelude::*;

use super::Pipeline;

fn merge_pair<K, V, F>(map: &mut HashMap<K, V>, key: K, value: V, combine: &F)
where
    K: Eq + Hash,
    F: Fn(V, V) -> V,
{
    match map.entry(key) {
        Entry::Occupied(entry) => {
            let (key, prior) = entry.remove_entry();
            map.insert(key, combine(prior, value));
        }
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
    }
}

impl<K, V> Pipeline<(K, V)>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    /// Co-locate all values for a key. No output ordering guarantee.
    pub fn group_by_key(self) -> Pipeline<(K, Vec<V>)> {
        Pipeline {
            thunk: Box::new(move || {
                let pairs = (self.thunk)()?;
                let mut groups: HashMap<K, Vec<V>> = HashMap::new();
                for (key, value) in pairs {
                    groups.entry(key).or_default().push(value);
                }
                Ok(groups.into_iter().collect())
            }),
        }
    }

    /// Reduce each key's values with `combine`, which must be associative
    /// and commutative: partial maps are built per rayon task and merged
    /// pairwise, so values combine in no particular grouping or order.
    pub fn combine_per_key<F>(self, combine: F) -> Pipeline<(K, V)>
    where
        F: Fn(V, V) -> V + Send + Sync + 'static,
    {
        Pipeline {
            thunk: Box::new(move || {
                let pairs = (self.thunk)()?;
                let merged = pairs
                    .into_par_iter()
                    .fold(HashMap::new, |mut partial, (key, value)| {
                        merge_pair(&mut partial, key, value, &combine);
                        partial
                    })
                    .reduce(HashMap::new, |mut left, right| {
                        for (key, value) in right {
                            merge_pair(&mut left, key, value, &combine);
                        }
                        left
                    });
                Ok(merged.into_iter().collect())
            }),
        }
    }

    /// Full outer co-group of two keyed collections: every key in the union
    /// of both appears once, paired with the (possibly empty) value lists
    /// from each side.
    pub fn co_group<B>(self, other: Pipeline<(K, B)>) -> Pipeline<(K, (Vec<V>, Vec<B>))>
    where
        B: Send + 'static,
    {
        Pipeline {
            thunk: Box::new(move || {
                let left = (self.thunk)()?;
                let right = (other.thunk)()?;
                let mut groups: HashMap<K, (Vec<V>, Vec<B>)> = HashMap::new();
                for (key, value) in left {
                    groups.entry(key).or_default().0.push(value);
                }
                for (key, value) in right {
                    groups.entry(key).or_default().1.push(value);
                }
                Ok(groups.into_iter().collect())
            }),
        }
    }
}
