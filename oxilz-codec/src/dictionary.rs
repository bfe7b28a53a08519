//! Dictionary (code table) management.
//!
//! Codes 0, 1 and 2 are control values; entries are numbered from
//! [`FIRST_CODE`] upwards in the order they are created. Both dictionaries
//! live for a single pass and are dropped afterwards.

use oxilz_core::FIRST_CODE;
use std::collections::{HashMap, HashSet};

/// Encoder-side dictionary.
///
/// Multi-unit phrases are keyed by `(prefix code, last unit)`, so extending
/// the current match is a single hash lookup. A unit receives its code the
/// first time it is seen but stays *pending* until it has been emitted once
/// as a literal.
#[derive(Debug)]
pub struct EncoderDictionary {
    /// Single code unit -> code.
    units: HashMap<u16, u32>,
    /// (prefix code, next unit) -> code.
    phrases: HashMap<(u32, u16), u32>,
    /// Units with a code that have not yet been sent as literals.
    pending: HashSet<u16>,
    /// Next available code.
    next_code: u32,
}

impl EncoderDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            units: HashMap::new(),
            phrases: HashMap::new(),
            pending: HashSet::new(),
            next_code: FIRST_CODE,
        }
    }

    /// Get the code of a single unit, assigning one (and marking the unit
    /// pending) on first sight.
    pub fn intern_unit(&mut self, unit: u16) -> u32 {
        if let Some(&code) = self.units.get(&unit) {
            return code;
        }

        let code = self.allocate();
        self.units.insert(unit, code);
        self.pending.insert(unit);
        code
    }

    /// Find the code of the phrase `prefix` followed by `unit`.
    #[inline]
    pub fn find_phrase(&self, prefix: u32, unit: u16) -> Option<u32> {
        self.phrases.get(&(prefix, unit)).copied()
    }

    /// Add the phrase `prefix` followed by `unit`.
    pub fn add_phrase(&mut self, prefix: u32, unit: u16) -> u32 {
        let code = self.allocate();
        self.phrases.insert((prefix, unit), code);
        code
    }

    /// Clear the pending mark of `unit`, reporting whether it was set.
    pub fn take_pending(&mut self, unit: u16) -> bool {
        self.pending.remove(&unit)
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    fn allocate(&mut self) -> u32 {
        let code = self.next_code;
        self.next_code += 1;
        code
    }
}

impl Default for EncoderDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoder-side dictionary: code -> code units.
#[derive(Debug)]
pub struct DecoderDictionary {
    table: Vec<Vec<u16>>,
}

impl DecoderDictionary {
    /// Create a dictionary holding only the control placeholders.
    pub fn new() -> Self {
        Self {
            table: vec![Vec::new(); FIRST_CODE as usize],
        }
    }

    /// Append an entry, returning its code.
    pub fn push(&mut self, entry: Vec<u16>) -> u32 {
        self.table.push(entry);
        self.next_code() - 1
    }

    /// Get the units of an assigned code.
    pub fn get(&self, code: u32) -> Option<&[u16]> {
        if code < FIRST_CODE {
            return None;
        }
        self.table.get(code as usize).map(Vec::as_slice)
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> u32 {
        self.table.len() as u32
    }
}

impl Default for DecoderDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_dictionary_init() {
        let dict = EncoderDictionary::new();
        assert_eq!(dict.next_code(), 3);
    }

    #[test]
    fn test_intern_unit() {
        let mut dict = EncoderDictionary::new();

        let a = dict.intern_unit(u16::from(b'A'));
        assert_eq!(a, 3);
        // Seen again: same code, no new allocation
        assert_eq!(dict.intern_unit(u16::from(b'A')), 3);
        assert_eq!(dict.next_code(), 4);

        assert!(dict.take_pending(u16::from(b'A')));
        assert!(!dict.take_pending(u16::from(b'A')));
    }

    #[test]
    fn test_phrases() {
        let mut dict = EncoderDictionary::new();
        let a = dict.intern_unit(u16::from(b'A'));
        let b = dict.intern_unit(u16::from(b'B'));

        assert_eq!(dict.find_phrase(a, u16::from(b'B')), None);
        let ab = dict.add_phrase(a, u16::from(b'B'));
        assert_eq!(ab, 5);
        assert_eq!(dict.find_phrase(a, u16::from(b'B')), Some(ab));
        assert_eq!(dict.find_phrase(b, u16::from(b'A')), None);
    }

    #[test]
    fn test_decoder_dictionary() {
        let mut dict = DecoderDictionary::new();
        assert_eq!(dict.next_code(), 3);
        assert_eq!(dict.get(0), None);
        assert_eq!(dict.get(2), None);

        let code = dict.push(vec![0x41]);
        assert_eq!(code, 3);
        assert_eq!(dict.get(3), Some(&[0x41][..]));
        assert_eq!(dict.get(4), None);
        assert_eq!(dict.next_code(), 4);
    }
}
