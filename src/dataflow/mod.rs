//! Minimal batch dataflow engine: a lazily-composed pipeline of pure,
//! record-at-a-time stages plus keyed shuffle primitives. Each combinator
//! wraps the previous stage's thunk and returns a new `Pipeline` value;
//! nothing executes until `run()`. Map-type stages are order-independent
//! and run on the rayon pool.

pub mod shuffle;

use anyhow::Result;
use rayon::prelude::*;

type Thunk<T> = Box<dyn FnOnce() -> Result<Vec<T>> + Send>;

/// A deferred batch collection. Consumed by every combinator; the single
/// execution point is [`Pipeline::run`].
pub struct Pipeline<T> {
    pub(crate) thunk: Thunk<T>,
}

impl<T: Send + 'static> Pipeline<T> {
    /// Lift an in-memory collection into the pipeline.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            thunk: Box::new(move || Ok(items)),
        }
    }

    /// Pure element-wise transform, parallel across the batch.
    pub fn map<U, F>(self, f: F) -> Pipeline<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Pipeline {
            thunk: Box::new(move || {
                let items = (self.thunk)()?;
                Ok(items.into_par_iter().map(&f).collect())
            }),
        }
    }

    /// Fallible element-wise transform. Fail-fast: the first record error
    /// aborts the job, consistent with one-shot batch semantics.
    pub fn try_map<U, F>(self, f: F) -> Pipeline<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Result<U> + Send + Sync + 'static,
    {
        Pipeline {
            thunk: Box::new(move || {
                let items = (self.thunk)()?;
                items.into_par_iter().map(&f).collect()
            }),
        }
    }

    /// Element-wise fan-out: each input yields zero or more outputs.
    pub fn flat_map<U, I, F>(self, f: F) -> Pipeline<U>
    where
        U: Send + 'static,
        I: IntoIterator<Item = U> + Send,
        F: Fn(T) -> I + Send + Sync + 'static,
    {
        Pipeline {
            thunk: Box::new(move || {
                let items = (self.thunk)()?;
                Ok(items
                    .into_par_iter()
                    .flat_map_iter(&f)
                    .collect())
            }),
        }
    }

    /// Fallible fan-out, fail-fast like [`Pipeline::try_map`].
    pub fn try_flat_map<U, F>(self, f: F) -> Pipeline<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Result<Vec<U>> + Send + Sync + 'static,
    {
        Pipeline {
            thunk: Box::new(move || {
                let items = (self.thunk)()?;
                let nested: Vec<Vec<U>> =
                    items.into_par_iter().map(&f).collect::<Result<_>>()?;
                Ok(nested.into_iter().flatten().collect())
            }),
        }
    }

    /// Keep only elements the predicate accepts.
    pub fn filter<F>(self, predicate: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Pipeline {
            thunk: Box::new(move || {
                let items = (self.thunk)()?;
                Ok(items.into_par_iter().filter(&predicate).collect())
            }),
        }
    }

    /// Execute the deferred stage graph and materialize the result.
    pub fn run(self) -> Result<Vec<T>> {
        (self.thunk)()
    }
}
