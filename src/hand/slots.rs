//! Hand slots and letter consumption.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Letter, Seat};
use crate::error::ParseError;

/// One position in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// A tile whose letter is known.
    Letter(Letter),
    /// A wildcard tile (user hands).
    Blank,
    /// A tile the tracker cannot see (opponent hands).
    Unknown,
}

impl Slot {
    /// Get the character used to display this slot.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Slot::Letter(letter) => letter.as_char(),
            Slot::Blank => '_',
            Slot::Unknown => '?',
        }
    }
}

impl From<Letter> for Slot {
    fn from(letter: Letter) -> Self {
        Slot::Letter(letter)
    }
}

impl std::str::FromStr for Slot {
    type Err = ParseError;

    /// Parse `_` as a blank, `?` as unknown, anything else as a letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "_" => Ok(Slot::Blank),
            "?" => Ok(Slot::Unknown),
            other => other.parse::<Letter>().map(Slot::Letter),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Inline storage for a hand; a full rack plus a few draws fits without
/// touching the heap.
pub type HandSlots = SmallVec<[Slot; 8]>;

/// Summary of how a played word was taken out of a hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResolution {
    /// Letters removed by exact match.
    pub consumed: Vec<Letter>,
    /// Characters covered by removing a placeholder slot instead.
    pub via_fallback: Vec<char>,
    /// Characters nothing could be removed for.
    pub unresolved: Vec<char>,
}

impl PlayResolution {
    /// True when every character of the word removed a slot.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Number of slots removed from the hand.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.consumed.len() + self.via_fallback.len()
    }
}

/// An ordered hand of tile slots.
///
/// The placeholder is the slot kind a fresh hand is filled with, and the
/// kind taken as a fallback when a played letter isn't held: blanks for the
/// user, unknown markers for the opponent.
///
/// ```
/// use tile_tracker::core::Seat;
/// use tile_tracker::hand::Hand;
///
/// let mut hand = Hand::initial(Seat::Opponent, 7);
/// assert_eq!(hand.to_string(), "???????");
///
/// let resolution = hand.play("cat");
/// assert_eq!(resolution.via_fallback, vec!['C', 'A', 'T']);
/// assert_eq!(hand.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: HandSlots,
    placeholder: Slot,
}

impl Hand {
    /// Create the starting hand for a seat: `size` placeholder slots.
    #[must_use]
    pub fn initial(seat: Seat, size: usize) -> Self {
        let placeholder = Self::placeholder_for(seat);
        Self {
            slots: std::iter::repeat(placeholder).take(size).collect(),
            placeholder,
        }
    }

    /// Get the placeholder slot kind used for a seat.
    #[must_use]
    pub const fn placeholder_for(seat: Seat) -> Slot {
        match seat {
            Seat::User => Slot::Blank,
            Seat::Opponent => Slot::Unknown,
        }
    }

    /// Get the slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Get the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the hand has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Count slots holding a specific letter.
    #[must_use]
    pub fn count_letter(&self, letter: Letter) -> usize {
        self.slots.iter().filter(|&&s| s == Slot::Letter(letter)).count()
    }

    /// Count placeholder slots.
    #[must_use]
    pub fn placeholders(&self) -> usize {
        self.slots.iter().filter(|&&s| s == self.placeholder).count()
    }

    /// Replace every slot.
    pub fn set_slots(&mut self, slots: impl IntoIterator<Item = Slot>) {
        self.slots = slots.into_iter().collect();
    }

    /// Append drawn letters to the end of the hand.
    pub fn extend(&mut self, letters: impl IntoIterator<Item = Letter>) {
        self.slots.extend(letters.into_iter().map(Slot::Letter));
    }

    /// Remove the tiles for a played word.
    ///
    /// For each character: take the first matching letter, otherwise the
    /// first placeholder, otherwise nothing. Remaining slots keep their
    /// relative order. Characters outside `A`..=`Z` never match a letter.
    pub fn play(&mut self, word: &str) -> PlayResolution {
        let mut resolution = PlayResolution::default();

        for c in word.chars() {
            let letter = Letter::from_char(c);

            if let Some(letter) = letter {
                if self.remove_first(Slot::Letter(letter)) {
                    resolution.consumed.push(letter);
                    continue;
                }
            }

            let shown = letter.map_or(c, Letter::as_char);
            if self.remove_first(self.placeholder) {
                resolution.via_fallback.push(shown);
            } else {
                resolution.unresolved.push(shown);
            }
        }

        resolution
    }

    fn remove_first(&mut self, slot: Slot) -> bool {
        match self.slots.iter().position(|&s| s == slot) {
            Some(pos) => {
                self.slots.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Vec<Slot> {
        s.chars()
            .map(|c| match c {
                '_' => Slot::Blank,
                '?' => Slot::Unknown,
                c => Slot::Letter(Letter::from_char(c).unwrap()),
            })
            .collect()
    }

    fn user_hand(s: &str) -> Hand {
        let mut hand = Hand::initial(Seat::User, 0);
        hand.set_slots(letters(s));
        hand
    }

    fn opponent_hand(s: &str) -> Hand {
        let mut hand = Hand::initial(Seat::Opponent, 0);
        hand.set_slots(letters(s));
        hand
    }

    #[test]
    fn test_initial_hands() {
        let user = Hand::initial(Seat::User, 7);
        let opp = Hand::initial(Seat::Opponent, 7);

        assert_eq!(user.to_string(), "_______");
        assert_eq!(opp.to_string(), "???????");
        assert_eq!(user.placeholders(), 7);
        assert_eq!(opp.placeholders(), 7);
    }

    #[test]
    fn test_play_exact_letters_keeps_order() {
        let mut hand = user_hand("XCQATZ_");

        let resolution = hand.play("CAT");

        assert_eq!(hand.to_string(), "XQZ_");
        assert!(resolution.is_complete());
        assert_eq!(resolution.consumed.len(), 3);
        assert!(resolution.via_fallback.is_empty());
    }

    #[test]
    fn test_play_prefers_letter_over_blank() {
        let mut hand = user_hand("_A");

        hand.play("A");

        assert_eq!(hand.to_string(), "_");
    }

    #[test]
    fn test_play_falls_back_to_blank() {
        let mut hand = user_hand("C_T");

        let resolution = hand.play("CAT");

        assert_eq!(hand.len(), 0);
        assert_eq!(resolution.via_fallback, vec!['A']);
        assert!(resolution.is_complete());
    }

    #[test]
    fn test_play_shortfall_is_permissive() {
        let mut hand = user_hand("CTEE");

        let resolution = hand.play("CAT");

        assert_eq!(hand.to_string(), "EE");
        assert_eq!(resolution.unresolved, vec!['A']);
        assert!(!resolution.is_complete());
        assert_eq!(resolution.removed(), 2);
    }

    #[test]
    fn test_user_play_ignores_unknown_markers() {
        // Unknown markers are never a fallback for the user
        let mut hand = user_hand("??");

        let resolution = hand.play("A");

        assert_eq!(hand.to_string(), "??");
        assert_eq!(resolution.unresolved, vec!['A']);
    }

    #[test]
    fn test_opponent_play_uses_unknown_markers() {
        let mut hand = opponent_hand("??Q??");

        let resolution = hand.play("QI");

        assert_eq!(hand.to_string(), "???");
        assert_eq!(resolution.consumed.len(), 1);
        assert_eq!(resolution.via_fallback, vec!['I']);
    }

    #[test]
    fn test_opponent_play_ignores_blanks() {
        let mut hand = opponent_hand("_");

        let resolution = hand.play("A");

        assert_eq!(hand.to_string(), "_");
        assert_eq!(resolution.unresolved, vec!['A']);
    }

    #[test]
    fn test_play_repeated_letters() {
        let mut hand = user_hand("LLAL");

        hand.play("LL");

        assert_eq!(hand.to_string(), "AL");
    }

    #[test]
    fn test_play_non_letter_uses_fallback() {
        let mut hand = user_hand("A_");

        let resolution = hand.play("-");

        assert_eq!(hand.to_string(), "A");
        assert_eq!(resolution.via_fallback, vec!['-']);
    }

    #[test]
    fn test_play_on_empty_hand() {
        let mut hand = user_hand("");

        let resolution = hand.play("HELLO");

        assert!(hand.is_empty());
        assert_eq!(resolution.unresolved.len(), 5);
    }

    #[test]
    fn test_play_lowercase() {
        let mut hand = user_hand("DOG");

        let resolution = hand.play("dog");

        assert!(hand.is_empty());
        assert!(resolution.is_complete());
    }

    #[test]
    fn test_extend() {
        let mut hand = opponent_hand("??");
        hand.extend([Letter::from_char('R').unwrap(), Letter::from_char('S').unwrap()]);

        assert_eq!(hand.to_string(), "??RS");
        assert_eq!(hand.count_letter(Letter::from_char('R').unwrap()), 1);
    }

    #[test]
    fn test_slot_parse() {
        assert_eq!("_".parse::<Slot>().unwrap(), Slot::Blank);
        assert_eq!("?".parse::<Slot>().unwrap(), Slot::Unknown);
        assert_eq!("k".parse::<Slot>().unwrap(), Slot::Letter(Letter::from_char('K').unwrap()));
        assert!("ab".parse::<Slot>().is_err());
    }

    #[test]
    fn test_hand_serialization() {
        let hand = user_hand("AB_");
        let json = serde_json::to_string(&hand).unwrap();
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, back);
    }
}
