//! Recognition of complete (agari) Japanese mahjong hands written in tile notation.
pub mod agari;
pub mod counts;
pub mod notation;
pub mod report;
pub mod tile;
