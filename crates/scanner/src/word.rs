//! The word accumulator: the only scanner state that lives across scan calls.

use crate::StateError;
use smallvec::SmallVec;
use std::fmt;

/// Maximum UTF-8 length of an accumulated word. The serialized form stores it in one byte.
pub const MAX_WORD_LEN: usize = u8::MAX as usize;

/// A growable buffer of characters, collected while probing for a keyword.
///
/// Serialized as `[length byte][UTF-8 bytes]`. Characters that would push the encoded length past
/// [`MAX_WORD_LEN`] are dropped, so the length always fits.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WordBuffer {
    chars: SmallVec<[char; 32]>,
    /// UTF-8 length of `chars`.
    encoded_len: usize,
    saturated: bool,
}

impl fmt::Debug for WordBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word: String = self.chars.iter().collect();
        f.debug_tuple("WordBuffer").field(&word).finish()
    }
}

impl WordBuffer {
    /// Creates a new, empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the buffer, keeping its allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.chars.clear();
        self.encoded_len = 0;
        self.saturated = false;
    }

    /// Appends a character. Returns `false` if the buffer is full and `c` was dropped.
    #[inline]
    pub fn push(&mut self, c: char) -> bool {
        let len = self.encoded_len + c.len_utf8();
        if len > MAX_WORD_LEN {
            self.saturated = true;
            return false;
        }
        self.chars.push(c);
        self.encoded_len = len;
        true
    }

    /// Returns the accumulated characters.
    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the number of accumulated characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if nothing has been accumulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns `true` if a character was dropped since the last reset.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Returns the accumulated word, lowercased. The buffer itself is left untouched.
    pub fn to_lowercase(&self) -> String {
        self.chars.iter().map(char::to_ascii_lowercase).collect()
    }

    /// Returns `true` if the accumulated word equals `keyword`, ignoring ASCII case.
    pub fn eq_ignore_ascii_case(&self, keyword: &str) -> bool {
        self.encoded_len == keyword.len()
            && self.chars.iter().zip(keyword.chars()).all(|(a, b)| a.eq_ignore_ascii_case(&b))
    }

    /// Returns the length of the serialized form.
    #[inline]
    pub fn serialized_len(&self) -> usize {
        1 + self.encoded_len
    }

    /// Writes `[length byte][UTF-8 bytes]` to the start of `buf`.
    ///
    /// Returns the number of bytes written, or `None` if `buf` is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> Option<usize> {
        let len = self.serialized_len();
        let (header, payload) = buf.get_mut(..len)?.split_first_mut()?;
        *header = self.encoded_len as u8;
        let mut at = 0;
        for c in &self.chars {
            at += c.encode_utf8(&mut payload[at..]).len();
        }
        debug_assert_eq!(at, self.encoded_len);
        Some(len)
    }

    /// Rebuilds a buffer from its serialized form. An empty slice gives an empty buffer.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, StateError> {
        let mut word = Self::new();
        let Some((&len, payload)) = bytes.split_first() else {
            return Ok(word);
        };
        if payload.len() != len as usize {
            return Err(StateError::LengthMismatch {
                expected: len as usize,
                actual: payload.len(),
            });
        }
        for c in std::str::from_utf8(payload)?.chars() {
            word.push(c);
        }
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> WordBuffer {
        let mut word = WordBuffer::new();
        for c in s.chars() {
            assert!(word.push(c));
        }
        word
    }

    #[test]
    fn push_and_reset() {
        let mut w = word("Pattern");
        assert_eq!(w.len(), 7);
        assert_eq!(w.to_lowercase(), "pattern");
        assert!(w.eq_ignore_ascii_case("PATTERN"));
        assert!(!w.eq_ignore_ascii_case("patterns"));
        assert!(!w.eq_ignore_ascii_case("patter"));
        w.reset();
        assert!(w.is_empty());
        assert_eq!(w.serialized_len(), 1);
    }

    #[test]
    fn non_ascii_is_never_equal_to_ascii_keyword() {
        // Same char count as "key", different byte length.
        assert!(!word("kéy").eq_ignore_ascii_case("key"));
        assert!(!word("kéy").eq_ignore_ascii_case("keyy"));
    }

    #[test]
    fn saturates_at_one_byte_length() {
        let mut w = WordBuffer::new();
        for _ in 0..MAX_WORD_LEN {
            assert!(w.push('a'));
        }
        assert!(!w.is_saturated());
        assert!(!w.push('a'));
        assert!(w.is_saturated());
        assert_eq!(w.len(), MAX_WORD_LEN);

        // A multi-byte char that doesn't fit is dropped as a whole.
        let mut w = word(&"a".repeat(MAX_WORD_LEN - 1));
        assert!(!w.push('é'));
        assert!(w.push('b'));
        assert_eq!(w.serialized_len(), MAX_WORD_LEN + 1);

        w.reset();
        assert!(!w.is_saturated());
    }

    #[test]
    fn serialize() {
        let w = word("Insé");
        let mut buf = [0xff; 8];
        assert_eq!(w.serialize(&mut buf), Some(6));
        assert_eq!(buf[..6], [5, b'I', b'n', b's', 0xc3, 0xa9]);
        assert_eq!(WordBuffer::deserialize(&buf[..6]), Ok(w.clone()));

        assert_eq!(w.serialize(&mut buf[..5]), None);
        assert_eq!(WordBuffer::new().serialize(&mut []), None);
        assert_eq!(WordBuffer::new().serialize(&mut buf), Some(1));
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn deserialize_errors() {
        assert_eq!(WordBuffer::deserialize(&[]), Ok(WordBuffer::new()));
        assert_eq!(
            WordBuffer::deserialize(&[3, b'a', b'b']),
            Err(StateError::LengthMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(
            WordBuffer::deserialize(&[1, b'a', b'b']),
            Err(StateError::LengthMismatch { expected: 1, actual: 2 })
        );
        assert!(matches!(WordBuffer::deserialize(&[1, 0xff]), Err(StateError::InvalidUtf8(_))));
    }
}
