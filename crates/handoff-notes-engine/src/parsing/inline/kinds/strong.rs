/// Strong (bold) inline type with owned delimiter constant.
pub struct Strong;

impl Strong {
    /// Opens and closes a strong run.
    pub const DELIM: &'static [u8] = b"**";
}
