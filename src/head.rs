//! Document-head access. The only metadata this site touches is the
//! per-page title.

use web_sys::window;
use yew::prelude::*;

/// Sets `document.title` once the component is mounted. Effects are
/// skipped entirely during server rendering, so this is browser-only.
#[hook]
pub fn use_document_title(title: AttrValue) {
    use_effect_with(title, |title| {
        set_document_title(title);
        || ()
    });
}

/// Best-effort title write, silent when no DOM is available.
pub fn set_document_title(title: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}
