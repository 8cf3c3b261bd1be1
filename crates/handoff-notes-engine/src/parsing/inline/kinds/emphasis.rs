/// Emphasis (italic) inline type. Only the underscore form exists in notes;
/// a single `*` is literal text.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static [u8] = b"_";
}
