use super::after_marker_gap;

/// Heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest heading level the notes dialect knows.
    pub const MAX_LEVEL: usize = 3;

    /// Parses `#`, `##` or `###`, a whitespace run, then non-empty text.
    ///
    /// A run of more than [`Self::MAX_LEVEL`] markers is not a heading at all;
    /// the line stays a paragraph with its hashes intact.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let content = after_marker_gap(&line[level..])?;
        Some((level as u8, content))
    }
}
