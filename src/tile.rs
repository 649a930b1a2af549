//! Tile values as written in hand notation.
use anyhow::{Context, Result, bail, ensure};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// Suit letter of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Suit {
    Man,
    Pin,
    Sou,
    /// Winds and dragons, written `z`
    Honor,
    /// Only used by the blank tile
    #[default]
    Unknown,
}

impl Suit {
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'm' => Some(Suit::Man),
            'p' => Some(Suit::Pin),
            's' => Some(Suit::Sou),
            'z' => Some(Suit::Honor),
            _ => None,
        }
    }

    /// Letters allowed after a numeral run in hand notation. `z` is not one of them.
    pub fn from_numbered_letter(c: char) -> Option<Self> {
        Self::from_letter(c).filter(|suit| suit.is_numbered())
    }

    pub fn is_numbered(self) -> bool {
        matches!(self, Suit::Man | Suit::Pin | Suit::Sou)
    }

    pub fn to_letter(self) -> Option<char> {
        match self {
            Suit::Man => Some('m'),
            Suit::Pin => Some('p'),
            Suit::Sou => Some('s'),
            Suit::Honor => Some('z'),
            Suit::Unknown => None,
        }
    }
}

/// The seven honor symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Honor {
    East,
    South,
    West,
    North,
    White,
    Green,
    Red,
}

impl Honor {
    pub const ALL: [Honor; 7] = [
        Honor::East,
        Honor::South,
        Honor::West,
        Honor::North,
        Honor::White,
        Honor::Green,
        Honor::Red,
    ];

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '東' => Some(Honor::East),
            '南' => Some(Honor::South),
            '西' => Some(Honor::West),
            '北' => Some(Honor::North),
            '白' => Some(Honor::White),
            '発' => Some(Honor::Green),
            '中' => Some(Honor::Red),
            _ => None,
        }
    }

    pub fn to_symbol(self) -> char {
        match self {
            Honor::East => '東',
            Honor::South => '南',
            Honor::West => '西',
            Honor::North => '北',
            Honor::White => '白',
            Honor::Green => '発',
            Honor::Red => '中',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Rank {
    /// 1 to 9
    Number(u8),
    Honor(Honor),
    #[default]
    Unknown,
}

impl Rank {
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1'..='9' => Some(Rank::Number(c as u8 - b'0')),
            _ => None,
        }
    }

    /// A digit `1`-`9` or an honor symbol.
    pub fn from_char(c: char) -> Option<Self> {
        Self::from_digit(c).or_else(|| Honor::from_symbol(c).map(Rank::Honor))
    }
}

/// A single tile.
///
/// Rank and suit are kept independently because the drawn-tile notation can
/// pair any rank with any suit letter (e.g. a bare `5` is read as `5z`). The
/// default value is the blank tile `?` with both fields unset. Tiles order by
/// suit, then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, SerializeDisplay, DeserializeFromStr)]
pub struct Tile {
    pub suit: Suit,
    pub rank: Rank,
}

impl Tile {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn number(n: u8, suit: Suit) -> Self {
        Self::new(Rank::Number(n), suit)
    }

    pub const fn honor(honor: Honor) -> Self {
        Self::new(Rank::Honor(honor), Suit::Honor)
    }

    /// The tile `offset` ranks above this one in the same suit.
    /// Only numbered tiles in a numbered suit have successors.
    pub fn next(self, offset: u8) -> Option<Self> {
        match self.rank {
            Rank::Number(n) if self.suit.is_numbered() => n
                .checked_add(offset)
                .filter(|&rank| rank <= 9)
                .map(|rank| Self::number(rank, self.suit)),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank, self.suit) {
            (Rank::Unknown, Suit::Unknown) => f.write_str("?"),
            (Rank::Honor(honor), Suit::Honor) => write!(f, "{}", honor.to_symbol()),
            (rank, suit) => {
                match rank {
                    Rank::Number(n) => write!(f, "{n}")?,
                    Rank::Honor(honor) => write!(f, "{}", honor.to_symbol())?,
                    Rank::Unknown => f.write_str("?")?,
                }
                match suit.to_letter() {
                    Some(letter) => write!(f, "{letter}"),
                    None => f.write_str("?"),
                }
            }
        }
    }
}

/// Strict single tile parser, the inverse of `Display`.
impl FromStr for Tile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "?" {
            return Ok(Self::default());
        }
        let mut chars = s.chars();
        let first = chars.next().context("empty tile")?;
        let rank = match first {
            '?' => Rank::Unknown,
            c => Rank::from_char(c).with_context(|| format!("invalid rank {c:?} in tile {s:?}"))?,
        };
        let suit = match chars.next() {
            Some('?') => Suit::Unknown,
            Some(c) => Suit::from_letter(c).with_context(|| format!("invalid suit {c:?} in tile {s:?}"))?,
            None if matches!(rank, Rank::Honor(_)) => Suit::Honor,
            None => bail!("missing suit in tile {s:?}"),
        };
        ensure!(chars.next().is_none(), "trailing characters in tile {s:?}");
        Ok(Self::new(rank, suit))
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    pub fn display() {
        assert_eq!(Tile::number(1, Suit::Pin).to_string(), "1p");
        assert_eq!(Tile::number(9, Suit::Man).to_string(), "9m");
        assert_eq!(Tile::honor(Honor::Green).to_string(), "発");
        assert_eq!(Tile::number(5, Suit::Honor).to_string(), "5z");
        assert_eq!(Tile::new(Rank::Honor(Honor::East), Suit::Pin).to_string(), "東p");
        assert_eq!(Tile::default().to_string(), "?");
    }

    #[test]
    pub fn from_str() {
        assert_eq!("3s".parse::<Tile>().unwrap(), Tile::number(3, Suit::Sou));
        assert_eq!("中".parse::<Tile>().unwrap(), Tile::honor(Honor::Red));
        assert_eq!("5z".parse::<Tile>().unwrap(), Tile::number(5, Suit::Honor));
        assert_eq!("?".parse::<Tile>().unwrap(), Tile::default());
        assert!("0m".parse::<Tile>().is_err());
        assert!("1".parse::<Tile>().is_err());
        assert!("1x".parse::<Tile>().is_err());
        assert!("12m".parse::<Tile>().is_err());
        assert!("".parse::<Tile>().is_err());

        for honor in Honor::ALL {
            let tile = Tile::honor(honor);
            assert_eq!(tile.to_string().parse::<Tile>().unwrap(), tile);
        }
    }

    #[test]
    pub fn next() {
        let tile = Tile::number(7, Suit::Sou);
        assert_eq!(tile.next(1), Some(Tile::number(8, Suit::Sou)));
        assert_eq!(tile.next(2), Some(Tile::number(9, Suit::Sou)));
        assert_eq!(tile.next(3), None);
        assert_eq!(Tile::honor(Honor::East).next(1), None);
        assert_eq!(Tile::number(1, Suit::Honor).next(1), None);
        assert_eq!(Tile::default().next(1), None);
        // out of range ranks have no successor instead of overflowing
        assert_eq!(Tile::number(255, Suit::Man).next(1), None);
        assert_eq!(Tile::number(9, Suit::Man).next(u8::MAX), None);
    }

    #[test]
    pub fn serde() {
        let tiles = vec![Tile::number(2, Suit::Man), Tile::honor(Honor::White), Tile::default()];
        let json = serde_json::to_string(&tiles).unwrap();
        assert_eq!(json, r#"["2m","白","?"]"#);
        assert_eq!(serde_json::from_str::<Vec<Tile>>(&json).unwrap(), tiles);
    }
}
