//! Pure payload transforms applied before rendering.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Number of trailing days the activity widget shows
pub const DEFAULT_WINDOW_DAYS: usize = 98;

/// Path of the image proxy every externally sourced image goes through
pub const IMAGE_PROXY_PATH: &str = "/api/imageProxy";

/// Characters left as-is by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Trailing `window` items of `items`, in their original order.
///
/// Shorter inputs are returned whole, without padding.
pub fn select_recent_window<T>(items: &[T], window: usize) -> &[T] {
    &items[items.len().saturating_sub(window)..]
}

/// Route an external image URL through the image proxy
pub fn image_proxy_url(original: &str) -> String {
    let encoded = utf8_percent_encode(original, URI_COMPONENT);
    format!("{IMAGE_PROXY_PATH}?url={encoded}")
}
