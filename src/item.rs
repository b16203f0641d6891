//! Item/transaction value types (C1).
//!
//! An `Item` is an opaque identifier: the core only ever compares items
//! for equality and hashes them, so it is generic over any `I: Clone +
//! Eq + Hash`. Callers typically instantiate `I = String` or a small
//! integer id type.

use crate::errors::{MiningError, Result};
use std::fmt;

/// A single `(item, existential probability)` pair within a transaction.
///
/// Immutable once constructed: `probability` is validated to lie in
/// `(0, 1]` at construction time and never changes afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOccurrence<I> {
    pub item: I,
    pub probability: f64,
}

impl<I> ItemOccurrence<I> {
    /// Build an occurrence, rejecting a probability outside `(0, 1]`.
    pub fn new(item: I, probability: f64) -> Result<Self>
    where
        I: fmt::Debug,
    {
        if probability <= 0.0 || probability > 1.0 {
            return Err(MiningError::ProbabilityOutOfRange {
                item: format!("{item:?}"),
                probability,
            });
        }
        Ok(Self { item, probability })
    }
}

/// A finite ordered sequence of occurrences, each item appearing at
/// most once. Loaders are responsible for deduplicating or rejecting
/// repeated items within a transaction - the core does not check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transaction<I> {
    pub items: Vec<ItemOccurrence<I>>,
}

impl<I> Transaction<I> {
    pub fn new(items: Vec<ItemOccurrence<I>>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<I: Eq> Transaction<I> {
    /// Check if the transaction contains every item of `itemset`.
    pub fn contains_all(&self, itemset: &[I]) -> bool {
        itemset
            .iter()
            .all(|it| self.items.iter().any(|occ| &occ.item == it))
    }
}
