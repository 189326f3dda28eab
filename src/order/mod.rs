use crate::catalog::{Catalog, Recipe};
use crate::error::{CatalogError, OrderError};
use ahash::AHashSet;

/// The number of recipes a station order always holds.
pub const ORDER_SIZE: usize = 4;

/// One selected recipe together with the rank the player assigned it (1 = first).
#[derive(Debug, Clone)]
pub struct RecipePick {
    pub name: String,
    pub rank: u8,
}

impl RecipePick {
    pub fn new(name: impl Into<String>, rank: u8) -> Self {
        Self {
            name: name.into(),
            rank,
        }
    }
}

/// A validated recipe selection: exactly [`ORDER_SIZE`] distinct recipes whose
/// ranks form a bijection onto `1..=ORDER_SIZE`.
///
/// Holding a `RankedOrder` is proof the selection passed validation; every
/// later pipeline stage can rely on it without re-checking. Picks are stored
/// ascending by rank.
#[derive(Debug, Clone)]
pub struct RankedOrder {
    picks: Vec<RecipePick>,
}

impl RankedOrder {
    /// Validates a raw selection and locks in its rank order.
    pub fn new(mut picks: Vec<RecipePick>) -> Result<Self, OrderError> {
        if picks.len() != ORDER_SIZE {
            return Err(OrderError::SelectionCount { found: picks.len() });
        }

        let mut seen = AHashSet::with_capacity(ORDER_SIZE);
        for pick in &picks {
            if !seen.insert(pick.name.as_str()) {
                return Err(OrderError::DuplicateRecipe {
                    name: pick.name.clone(),
                });
            }
            if pick.rank < 1 || pick.rank as usize > ORDER_SIZE {
                return Err(OrderError::RankOutOfRange {
                    name: pick.name.clone(),
                    rank: pick.rank,
                });
            }
        }

        // The sort is stable, so picks sharing a rank stay in selection order.
        picks.sort_by_key(|pick| pick.rank);
        for pair in picks.windows(2) {
            if pair[0].rank == pair[1].rank {
                return Err(OrderError::DuplicateRank {
                    rank: pair[0].rank,
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                });
            }
        }

        // ORDER_SIZE distinct in-range ranks can only be a permutation of
        // 1..=ORDER_SIZE, so no separate missing-rank check exists.
        Ok(Self { picks })
    }

    /// Builds an order from `(name, rank)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, rank)| RecipePick::new(name, rank))
                .collect(),
        )
    }

    /// The picks, ascending by rank.
    pub fn picks(&self) -> &[RecipePick] {
        &self.picks
    }

    /// Recipe names ascending by rank.
    pub fn names_by_rank(&self) -> impl Iterator<Item = &str> {
        self.picks.iter().map(|pick| pick.name.as_str())
    }

    /// Resolves every pick against the catalog, yielding recipes ascending by
    /// rank. A missing recipe is a catalog problem and is reported, never
    /// silently skipped.
    pub fn resolve<'c>(&self, catalog: &'c Catalog) -> Result<Vec<&'c Recipe>, CatalogError> {
        self.picks
            .iter()
            .map(|pick| {
                catalog
                    .get(&pick.name)
                    .ok_or_else(|| CatalogError::RecipeNotFound(pick.name.clone()))
            })
            .collect()
    }
}
