//! Static definitions of the standard 52-card deck.
//!
//! A card code is a rank token followed by a one-letter suit token, e.g.
//! `AS`, `10C`, `QH`. Codes are case-sensitive.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

/// Suits in default deck order.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

impl Suit {
    pub fn token(&self) -> &'static str {
        match self {
            Suit::Spades => "S",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Hearts => "H",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
        }
    }

    pub fn from_token(token: &str) -> Option<Suit> {
        match token {
            "S" => Some(Suit::Spades),
            "D" => Some(Suit::Diamonds),
            "C" => Some(Suit::Clubs),
            "H" => Some(Suit::Hearts),
            _ => None,
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// Ranks in default deck order.
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    pub fn token(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Value name as exposed to clients. Pip cards use their number.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            pip => pip.token(),
        }
    }

    pub fn from_token(token: &str) -> Option<Rank> {
        RANKS.iter().copied().find(|rank| rank.token() == token)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build the code for a rank/suit pair.
pub fn code(rank: Rank, suit: Suit) -> String {
    format!("{}{}", rank.token(), suit.token())
}

/// The canonical 52 codes: suits outer (S, D, C, H), ranks inner (A..K).
pub fn default_codes() -> Vec<String> {
    SUITS
        .iter()
        .flat_map(|&suit| RANKS.iter().map(move |&rank| code(rank, suit)))
        .collect()
}

/// Split a code into its rank and suit tokens.
///
/// The suit token is always the last character, so `10C` splits into
/// `("10", "C")`. Returns `None` for codes too short to hold both.
pub fn split_code(code: &str) -> Option<(&str, &str)> {
    if code.len() < 2 || !code.is_char_boundary(code.len() - 1) {
        return None;
    }
    Some(code.split_at(code.len() - 1))
}

/// Parse a code into its rank and suit, `None` if it is not one of the 52.
pub fn parse_code(code: &str) -> Option<(Rank, Suit)> {
    let (rank, suit) = split_code(code)?;
    Some((Rank::from_token(rank)?, Suit::from_token(suit)?))
}

pub fn rank_name(token: &str) -> Option<&'static str> {
    Rank::from_token(token).map(|rank| rank.name())
}

pub fn suit_name(token: &str) -> Option<&'static str> {
    Suit::from_token(token).map(|suit| suit.name())
}
