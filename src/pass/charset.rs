//! Character classes a password is composed from.

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*()-_=+,.?/:;{}[]`~";

/// Every class concatenated, used to pad a password past its class minimums.
pub const ALL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         abcdefghijklmnopqrstuvwxyz\
                         0123456789\
                         !@#$%^&*()-_=+,.?/:;{}[]`~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    /// Classes in the order their minimums are laid into a fresh password.
    pub const ORDERED: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn pool(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    /// The class `c` belongs to, or `None` for characters outside every pool.
    pub fn of(c: char) -> Option<CharClass> {
        match c {
            'A'..='Z' => Some(CharClass::Upper),
            'a'..='z' => Some(CharClass::Lower),
            '0'..='9' => Some(CharClass::Digit),
            c if c.is_ascii() && SPECIAL.contains(&(c as u8)) => Some(CharClass::Special),
            _ => None,
        }
    }
}

/// Per-class character counts of a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composition {
    pub upper: usize,
    pub lower: usize,
    pub digits: usize,
    pub special: usize,
    /// Characters outside all four classes.
    pub other: usize,
}

impl Composition {
    pub fn of(password: &str) -> Self {
        let mut counts = Composition::default();
        for c in password.chars() {
            match CharClass::of(c) {
                Some(CharClass::Upper) => counts.upper += 1,
                Some(CharClass::Lower) => counts.lower += 1,
                Some(CharClass::Digit) => counts.digits += 1,
                Some(CharClass::Special) => counts.special += 1,
                None => counts.other += 1,
            }
        }
        counts
    }

    pub fn count(&self, class: CharClass) -> usize {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digits,
            CharClass::Special => self.special,
        }
    }
}
