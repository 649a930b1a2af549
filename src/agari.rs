//! Winning hand (agari) detection for a closed 14 tile hand.
//!
//! Two shapes are recognized: seven distinct pairs, and the standard shape of
//! one pair plus four groups. Groups are found by exhaustive backtracking; every
//! branch works on its own copy of the remaining tiles.
use crate::counts::TileCounts;
use crate::tile::Tile;
use serde::Serialize;
use tinyvec::TinyVec;

pub const HAND_SIZE: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Three identical tiles
    #[default]
    Triplet,
    /// Three consecutive ranks of one numbered suit
    Run,
}

/// A three tile group. `first` is the lowest tile of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Group {
    pub kind: GroupKind,
    pub first: Tile,
}

impl Group {
    pub fn triplet(tile: Tile) -> Self {
        Self {
            kind: GroupKind::Triplet,
            first: tile,
        }
    }

    pub fn run(first: Tile) -> Self {
        Self {
            kind: GroupKind::Run,
            first,
        }
    }

    pub fn tiles(&self) -> [Tile; 3] {
        match self.kind {
            GroupKind::Triplet => [self.first; 3],
            GroupKind::Run => [
                self.first,
                self.first.next(1).unwrap_or_default(),
                self.first.next(2).unwrap_or_default(),
            ],
        }
    }
}

pub type Groups = TinyVec<[Group; 4]>;

/// The winning shape found for a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    SevenPairs { pairs: [Tile; 7] },
    Standard { pair: Tile, groups: Groups },
}

/// Whether the tiles form a winning hand.
pub fn is_agari(hand: &[Tile]) -> bool {
    evaluate(hand).is_some()
}

/// Find the winning shape of a hand. Seven pairs is checked first.
/// Anything other than exactly 14 tiles is never a winning hand.
pub fn evaluate(hand: &[Tile]) -> Option<Shape> {
    if hand.len() != HAND_SIZE {
        log::debug!("hand has {} tiles instead of {HAND_SIZE}", hand.len());
        return None;
    }

    let counts = TileCounts::from_tiles(hand);
    log::debug!("tile counts ({} tiles): {counts}", counts.total());

    if let Some(pairs) = seven_pairs(&counts) {
        return Some(Shape::SevenPairs { pairs });
    }
    standard_shape(&counts).map(|(pair, groups)| Shape::Standard { pair, groups })
}

pub fn is_seven_pairs(counts: &TileCounts) -> bool {
    seven_pairs(counts).is_some()
}

/// Seven distinct tiles with exactly two copies each. A quad is not two pairs.
pub fn seven_pairs(counts: &TileCounts) -> Option<[Tile; 7]> {
    if counts.distinct() != 7 {
        return None;
    }
    let mut pairs = Vec::with_capacity(7);
    for (tile, count) in counts.iter() {
        if count != 2 {
            return None;
        }
        pairs.push(tile);
    }
    pairs.try_into().ok()
}

pub fn is_standard(counts: &TileCounts) -> bool {
    standard_shape(counts).is_some()
}

/// Try every tile with at least two copies as the pair and split the rest
/// into groups. Returns the first pair that works.
pub fn standard_shape(counts: &TileCounts) -> Option<(Tile, Groups)> {
    counts.iter().filter(|&(_, count)| count >= 2).find_map(|(pair, _)| {
        let rest = counts.without(pair, 2)?;
        log::debug!("trying pair {pair}, rest {rest}");
        let groups = decompose(&rest)?;
        log::debug!("found pair {pair} with groups {}", groups_to_string(&groups));
        Some((pair, groups))
    })
}

pub fn can_decompose(counts: &TileCounts) -> bool {
    decompose(counts).is_some()
}

/// Split all tiles into triplets and runs.
///
/// Every distinct tile is tried as the pivot before giving up; for each pivot
/// a triplet is tried before a run starting at it.
pub fn decompose(counts: &TileCounts) -> Option<Groups> {
    if counts.is_empty() {
        return Some(Groups::default());
    }
    log::trace!("decomposing {counts}");

    for (tile, count) in counts.iter() {
        if count >= 3
            && let Some(rest) = counts.without(tile, 3)
            && let Some(groups) = decompose(&rest)
        {
            log::trace!("triplet {tile}, rest {rest}");
            return Some(prepend(Group::triplet(tile), groups));
        }

        if let (Some(second), Some(third)) = (tile.next(1), tile.next(2))
            && let Some(rest) = counts.without_all(&[(tile, 1), (second, 1), (third, 1)])
            && let Some(groups) = decompose(&rest)
        {
            log::trace!("run {tile} {second} {third}, rest {rest}");
            return Some(prepend(Group::run(tile), groups));
        }
    }

    None
}

fn prepend(group: Group, mut groups: Groups) -> Groups {
    groups.insert(0, group);
    groups
}

pub fn groups_to_string(groups: &[Group]) -> String {
    groups
        .iter()
        .map(|group| group.tiles().iter().map(|tile| tile.to_string()).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
