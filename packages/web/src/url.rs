//! Browser implementation of the query-string host.
//!
//! The search store is the source of truth; the address bar is a derived
//! projection of it. Rewrites go through `history.replaceState` so filter
//! edits do not pile up history entries or trigger navigation.

use listings::QueryStringHost;

/// The real address bar. On the server (SSR pass) every operation is a
/// no-op; hydration re-reads the query string on the client.
#[derive(Clone, Copy, Default)]
pub struct BrowserQuery;

impl QueryStringHost for BrowserQuery {
    fn read(&self) -> String {
        #[cfg(feature = "web")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(search) = window.location().search() {
                    return search;
                }
            }
        }
        String::new()
    }

    fn replace(&self, query: &str) {
        #[cfg(feature = "web")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let pathname = window
                .location()
                .pathname()
                .unwrap_or_else(|_| "/".to_string());
            let url = if query.is_empty() {
                pathname
            } else {
                format!("{pathname}?{query}")
            };
            if let Ok(history) = window.history() {
                if let Err(err) = history.replace_state_with_url(
                    &web_sys::wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&url),
                ) {
                    tracing::warn!(?err, "failed to rewrite query string");
                }
            }
        }
        #[cfg(not(feature = "web"))]
        let _ = query;
    }
}
