use crate::domain::ports::Clipboard;
use crate::utils::error::Result;

/// System clipboard backed by arboard. A fresh handle per write keeps the
/// adapter stateless; the write is fire-and-forget from the caller's side.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
