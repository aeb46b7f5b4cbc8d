//! Deck engine: pure operations over lists of card codes.
//!
//! Nothing here touches storage or global state. Randomized operations take
//! their generator explicitly; see [`RandomSource`] for where generators
//! come from.

pub mod rng;

pub use rng::RandomSource;

use crate::catalog;
use crate::models::{Card, Cards};
use crate::{DeckError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Check that every code is one of the canonical 52 and none repeats.
///
/// Matching is exact and case-sensitive. An empty list is valid.
pub fn is_valid_codes<S: AsRef<str>>(codes: &[S]) -> bool {
    let mut seen = HashSet::with_capacity(codes.len());
    codes.iter().all(|code| {
        let code = code.as_ref();
        catalog::parse_code(code).is_some() && seen.insert(code)
    })
}

/// The full 52-code deck in default order.
pub fn create_default_codes() -> Vec<String> {
    catalog::default_codes()
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R, codes: &mut [String]) {
    codes.shuffle(rng);
}

/// Expand codes into cards, preserving input order.
pub fn build_cards_from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Cards> {
    if !is_valid_codes(codes) {
        return Err(DeckError::invalid_input("codes is not valid"));
    }

    codes
        .iter()
        .map(|code| {
            let code = code.as_ref();
            let (rank, suit) = catalog::parse_code(code)
                .ok_or_else(|| DeckError::internal(format!("unmapped card code {}", code)))?;
            Ok(Card {
                value: rank.name().to_string(),
                suit: suit.name().to_string(),
                code: code.to_string(),
            })
        })
        .collect()
}

/// Pick `count` codes uniformly at random without replacement.
///
/// The result follows the order of a random permutation of positions, not
/// the deck order. The input is left untouched.
pub fn draw_random_n<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    codes: &[String],
) -> Result<Vec<String>> {
    if count > codes.len() {
        return Err(DeckError::invalid_input(
            "count cannot be greater then length of codes slice",
        ));
    }

    let mut positions: Vec<usize> = (0..codes.len()).collect();
    let (picked, _) = positions.partial_shuffle(rng, count);
    Ok(picked.iter().map(|&i| codes[i].clone()).collect())
}

/// Return `all` without any code present in `drawn`, keeping the survivors'
/// relative order. Drawn codes missing from `all` are ignored.
pub fn remove_drawn<S: AsRef<str>>(drawn: &[S], all: &[String]) -> Vec<String> {
    let drawn: HashSet<&str> = drawn.iter().map(|code| code.as_ref()).collect();
    all.iter()
        .filter(|code| !drawn.contains(code.as_str()))
        .cloned()
        .collect()
}
