//! Mapping between Latin letters and their alphabet positions `0..26`.
//!
//! Only ASCII letters have a position. Everything else, including accented
//! letters, passes through the shift ciphers untouched.

/// Size of the Latin alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Returns the position of `c` in the alphabet, ignoring case.
#[must_use]
pub fn position(c: char) -> Option<u8> {
    let byte = u8::try_from(c).ok()?;
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a'),
        _ => None,
    }
}

/// Returns the letter at `pos` (taken mod 26) in the requested case.
#[must_use]
pub fn letter(pos: u8, upper: bool) -> char {
    let base = if upper { b'A' } else { b'a' };
    char::from(base + pos % ALPHABET_LEN)
}

/// Reduces any integer to an alphabet position in `0..26`.
#[must_use]
pub fn wrap(value: i64) -> u8 {
    // rem_euclid by 26 is always in 0..26, so the conversion cannot fail.
    u8::try_from(value.rem_euclid(i64::from(ALPHABET_LEN))).unwrap_or_default()
}

/// Reduces `text` to the positions of its letters, in order.
#[must_use]
pub fn letter_positions(text: &str) -> Vec<u8> {
    text.chars().filter_map(position).collect()
}

/// Reduces `text` to its letters, uppercased.
#[must_use]
pub fn letters_upper(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// One character of the original text, as remembered by a [`RestorationPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A letter; only its case is kept, the letter itself is replaced.
    Letter {
        /// Whether the original letter was uppercase.
        upper: bool,
    },
    /// Any other character, emitted again unchanged.
    Other(char),
}

/// Records where the letters of a text were and what case they had, so that
/// transformed letters can be put back in place.
///
/// Built once per call and consumed once by [`RestorationPlan::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestorationPlan {
    slots: Vec<Slot>,
    letters: Vec<u8>,
}

impl RestorationPlan {
    /// Splits `text` into its letter positions and a slot per character.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut slots = Vec::with_capacity(text.len());
        let mut letters = Vec::with_capacity(text.len());
        for c in text.chars() {
            if let Some(pos) = position(c) {
                slots.push(Slot::Letter {
                    upper: c.is_ascii_uppercase(),
                });
                letters.push(pos);
            } else {
                slots.push(Slot::Other(c));
            }
        }
        Self { slots, letters }
    }

    /// Alphabet positions of the letters, in text order.
    #[must_use]
    pub const fn letters(&self) -> &[u8] {
        self.letters.as_slice()
    }

    /// The recorded slots, one per original character.
    #[must_use]
    pub const fn slots(&self) -> &[Slot] {
        self.slots.as_slice()
    }

    /// Re-interleaves `transformed` positions into the original layout.
    ///
    /// Each letter slot takes the next transformed position in its original
    /// case. Positions left over once every slot is filled are appended in
    /// uppercase; letter slots with no position left are dropped.
    #[must_use]
    pub fn restore(&self, transformed: &[u8]) -> String {
        let mut out = String::with_capacity(self.slots.len() + transformed.len());
        let mut next = transformed.iter();
        for slot in &self.slots {
            match *slot {
                Slot::Letter { upper } => {
                    if let Some(&pos) = next.next() {
                        out.push(letter(pos, upper));
                    }
                }
                Slot::Other(c) => out.push(c),
            }
        }
        out.extend(next.map(|&pos| letter(pos, true)));
        out
    }
}
