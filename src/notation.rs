//! Lenient hand notation, e.g. `123m456p東東東 55s`.
//! Anything that is not part of a tile is skipped instead of rejected.
use crate::tile::{Honor, Rank, Suit, Tile};

/// Read every tile in a hand string.
///
/// A run of digits `1`-`9` shares the suit letter (`m`, `p` or `s`) that
/// immediately follows it. Honor tiles are written as a single symbol.
/// A digit run without a suit letter produces nothing.
pub fn parse_hand(s: &str) -> Vec<Tile> {
    let chars: Vec<char> = s.chars().collect();
    let mut tiles = vec![];
    let mut i = 0;

    while i < chars.len() {
        if let Some(honor) = Honor::from_symbol(chars[i]) {
            tiles.push(Tile::honor(honor));
            i += 1;
            continue;
        }

        let run_len = chars[i..].iter().take_while(|&&c| Rank::from_digit(c).is_some()).count();
        if run_len == 0 {
            i += 1;
            continue;
        }
        let end = i + run_len;
        if let Some(suit) = chars.get(end).copied().and_then(Suit::from_numbered_letter) {
            tiles.extend(chars[i..end].iter().filter_map(|&c| Rank::from_digit(c)).map(|rank| Tile::new(rank, suit)));
            i = end + 1;
        } else {
            i = end;
        }
    }

    log::debug!("parsed hand {s:?}: {}", tiles_to_string(&tiles));
    tiles
}

/// Read the drawn tile: the first digit or honor symbol, with an optional
/// suit letter right after it.
///
/// Without a suit letter the tile falls back to the honor suit, so a bare
/// `5` reads as `5z`. Returns the blank tile when nothing matches.
pub fn parse_drawn(s: &str) -> Tile {
    let mut chars = s.chars().skip_while(|&c| Rank::from_char(c).is_none());
    let Some(rank) = chars.next().and_then(Rank::from_char) else {
        log::debug!("no tile in drawn notation {s:?}");
        return Tile::default();
    };
    let suit = chars.next().and_then(Suit::from_letter).unwrap_or(Suit::Honor);

    let tile = Tile::new(rank, suit);
    log::debug!("parsed drawn tile {s:?}: {tile}");
    tile
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    tiles.iter().map(|tile| tile.to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
pub mod test {
    use super::*;

    pub fn tiles(s: &str) -> Vec<Tile> {
        parse_hand(s)
    }

    #[test]
    pub fn shorthand_runs() {
        assert_eq!(
            parse_hand("123p"),
            vec![Tile::number(1, Suit::Pin), Tile::number(2, Suit::Pin), Tile::number(3, Suit::Pin)]
        );
        assert_eq!(
            parse_hand("19m9s"),
            vec![Tile::number(1, Suit::Man), Tile::number(9, Suit::Man), Tile::number(9, Suit::Sou)]
        );
        assert_eq!(parse_hand("11222333444p").len(), 11);
        assert_eq!(parse_hand("111222333444p").len(), 12);
    }

    #[test]
    pub fn honors_in_order() {
        assert_eq!(
            parse_hand("1m東南西北白発中"),
            [Tile::number(1, Suit::Man)]
                .into_iter()
                .chain(Honor::ALL.into_iter().map(Tile::honor))
                .collect::<Vec<_>>()
        );
        assert_eq!(tiles_to_string(&parse_hand("中1s発")), "中 1s 発");
    }

    #[test]
    pub fn ignored_characters() {
        assert!(parse_hand("").is_empty());
        assert!(parse_hand("hello world").is_empty());
        assert!(parse_hand("123").is_empty());
        assert!(parse_hand("123z").is_empty());
        assert_eq!(tiles_to_string(&parse_hand(" 12m, x3p ;東 ")), "1m 2m 3p 東");
        // `0` is not a rank, so only the digits after it reach the suit letter
        assert_eq!(tiles_to_string(&parse_hand("102p")), "2p");
        // a dangling run does not borrow the next run's suit
        assert_eq!(tiles_to_string(&parse_hand("12 34s")), "3s 4s");
        assert_eq!(tiles_to_string(&parse_hand("12mp")), "1m 2m");
    }

    #[test]
    pub fn drawn_tile() {
        assert_eq!(parse_drawn("9m"), Tile::number(9, Suit::Man));
        assert_eq!(parse_drawn("  3s"), Tile::number(3, Suit::Sou));
        assert_eq!(parse_drawn("中"), Tile::honor(Honor::Red));
        assert_eq!(parse_drawn("4z"), Tile::number(4, Suit::Honor));
        assert_eq!(parse_drawn("東p"), Tile::new(Rank::Honor(Honor::East), Suit::Pin));
        // only the first tile counts
        assert_eq!(parse_drawn("7p8m"), Tile::number(7, Suit::Pin));
        assert_eq!(parse_drawn("0m1s"), Tile::number(1, Suit::Sou));
    }

    #[test]
    pub fn drawn_tile_fallbacks() {
        assert_eq!(parse_drawn("5"), Tile::number(5, Suit::Honor));
        assert_eq!(parse_drawn("5 m"), Tile::number(5, Suit::Honor));
        assert_eq!(parse_drawn(""), Tile::default());
        assert_eq!(parse_drawn("xyz"), Tile::default());
        assert_eq!(parse_drawn("m"), Tile::default());
    }
}
