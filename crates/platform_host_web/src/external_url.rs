//! Outbound link adapter.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

use crate::interop;

#[derive(Debug, Clone, Copy, Default)]
/// Opens links in a new tab with `noopener`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { interop::open_external_url(url) })
    }
}
