//! `navigator.clipboard` adapter.

use platform_host::{ClipboardFuture, ClipboardService};

use crate::interop;

#[derive(Debug, Clone, Copy, Default)]
/// Writes through the async Clipboard API.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move { interop::write_clipboard_text(text).await })
    }
}
