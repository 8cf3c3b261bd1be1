/// Byte sequences that end a line: `\n`, `\r`, U+2028 and U+2029.
const LINE_BREAKS: [&[u8]; 4] = [b"\n", b"\r", "\u{2028}".as_bytes(), "\u{2029}".as_bytes()];

/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Delimiters are ASCII, so every position a match starts or ends at is a
/// char boundary even though the cursor steps through bytes.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// True when the remaining input starts with a line break.
    pub fn at_line_break(&self) -> bool {
        LINE_BREAKS.iter().any(|lb| self.starts_with(lb))
    }

    /// Advances until the remaining input starts with `pat`, without crossing
    /// a line break. Returns false (leaving the cursor wherever it stopped)
    /// when a line break or the end of input comes first.
    pub fn seek_on_line(&mut self, pat: &[u8]) -> bool {
        while !self.eof() {
            if self.starts_with(pat) {
                return true;
            }
            if self.at_line_break() {
                return false;
            }
            self.bump();
        }
        false
    }

    /// The text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**");
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"__"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.starts_with(b"abcdef"));

        cur.bump();
        assert!(!cur.starts_with(b"bc"));
        assert!(cur.starts_with(b"b"));
    }

    #[test]
    fn starts_with_past_end() {
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"h"));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn seek_finds_pattern() {
        let mut cur = Cursor::new("ab**cd");
        assert!(cur.seek_on_line(b"**"));
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.slice_from(0), "ab");
    }

    #[test]
    fn seek_stops_at_newline() {
        let mut cur = Cursor::new("ab\n**");
        assert!(!cur.seek_on_line(b"**"));
        assert_eq!(cur.peek(), Some(b'\n'));
    }

    #[test]
    fn seek_stops_at_carriage_return_and_unicode_separators() {
        for line in ["ab\r**", "ab\u{2028}**", "ab\u{2029}**"] {
            let mut cur = Cursor::new(line);
            assert!(!cur.seek_on_line(b"**"), "{line:?}");
            assert!(cur.at_line_break());
            assert_eq!(cur.pos(), 2);
        }
    }

    #[test]
    fn seek_missing_pattern_reaches_eof() {
        let mut cur = Cursor::new("abc");
        assert!(!cur.seek_on_line(b"`"));
        assert!(cur.eof());
    }
}
