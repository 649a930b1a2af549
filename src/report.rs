//! Outcome of checking one hand, as shown to the user.
use crate::agari::{self, HAND_SIZE, Shape, groups_to_string};
use crate::notation::{parse_drawn, parse_hand, tiles_to_string};
use crate::tile::Tile;
use console::style;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Hand notation as given
    pub hand: String,
    /// Drawn tile notation as given
    pub drawn: String,
    /// Parsed hand tiles followed by the drawn tile
    pub tiles: Vec<Tile>,
    pub tile_count: usize,
    pub agari: bool,
    /// Winning shape, `None` when the hand is not complete
    pub shape: Option<Shape>,
}

impl Report {
    pub fn new(hand: &str, drawn: &str) -> Self {
        let mut tiles = parse_hand(hand);
        tiles.push(parse_drawn(drawn));
        log::debug!("{} tiles in total", tiles.len());

        let shape = agari::evaluate(&tiles);
        Self {
            hand: hand.to_owned(),
            drawn: drawn.to_owned(),
            tile_count: tiles.len(),
            agari: shape.is_some(),
            tiles,
            shape,
        }
    }

    pub fn to_text(&self) -> String {
        let count = if self.tile_count == HAND_SIZE {
            style(self.tile_count.to_string()).to_string()
        } else {
            style(format!("{} (expected {HAND_SIZE})", self.tile_count)).yellow().to_string()
        };
        let verdict = if self.agari {
            style("Agari!").green().bold().to_string()
        } else {
            style("Not agari yet.").red().to_string()
        };
        let shape = match &self.shape {
            None => "".to_owned(),
            Some(Shape::SevenPairs { pairs }) => format!(
                "\nseven pairs: {}",
                pairs.iter().map(|tile| format!("{tile}{tile}")).collect::<Vec<_>>().join(" ")
            ),
            Some(Shape::Standard { pair, groups }) => {
                format!("\npair: {pair}{pair} | groups: {}", groups_to_string(groups))
            }
        };
        format!("tiles: {}\ncount: {count}\n{verdict}{shape}", tiles_to_string(&self.tiles))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
