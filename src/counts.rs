use crate::tile::Tile;
use std::collections::BTreeMap;
use std::fmt;

/// Multiset of tiles still waiting to be placed in a pair or group.
///
/// Only positive counts are stored. The only way to shrink it is
/// [`TileCounts::without`], which copies and never goes below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileCounts(BTreeMap<Tile, usize>);

impl TileCounts {
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut counts = BTreeMap::new();
        for &tile in tiles {
            *counts.entry(tile).or_insert(0usize) += 1;
        }
        Self(counts)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.0.get(&tile).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct tiles.
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Distinct tiles with their counts, in tile order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, usize)> + '_ {
        self.0.iter().map(|(&tile, &count)| (tile, count))
    }

    /// A copy with `n` copies of `tile` removed, or `None` if there are fewer than `n`.
    pub fn without(&self, tile: Tile, n: usize) -> Option<Self> {
        self.without_all(&[(tile, n)])
    }

    /// A copy with every `(tile, n)` removed, or `None` if any of them falls short.
    pub fn without_all(&self, removals: &[(Tile, usize)]) -> Option<Self> {
        let mut rest = self.clone();
        for &(tile, n) in removals {
            let count = rest.0.get_mut(&tile)?;
            *count = count.checked_sub(n)?;
            if *count == 0 {
                rest.0.remove(&tile);
            }
        }
        Some(rest)
    }
}

impl fmt::Display for TileCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.iter().map(|(tile, count)| format!("{tile}:{count}")).collect::<Vec<_>>();
        write!(f, "[{}]", entries.join(" "))
    }
}
