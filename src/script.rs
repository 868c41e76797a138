//! Declarative loader for external scripts, modeled as a component so a
//! page can state "this script, this strategy, this on-load hook" in its
//! markup instead of hand-wiring DOM calls.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Event, HtmlScriptElement};
use yew::prelude::*;

/// When an external script should be fetched relative to the page
/// lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Inject as soon as the declaring component mounts.
    AfterInteractive,
    /// Wait until the window has finished loading, then inject.
    LazyOnload,
}

impl LoadStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadStrategy::AfterInteractive => "afterInteractive",
            LoadStrategy::LazyOnload => "lazyOnload",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScriptProps {
    pub src: AttrValue,
    #[prop_or(LoadStrategy::AfterInteractive)]
    pub strategy: LoadStrategy,
    #[prop_or_default]
    pub on_load: Callback<()>,
}

/// Renders nothing itself; on mount it appends a real `<script>` tag to
/// the document body according to the requested strategy. `on_load` fires
/// once when the browser reports the script loaded. Load failures are
/// left to the browser (silent no-op).
#[function_component(Script)]
pub fn script(props: &ScriptProps) -> Html {
    let on_load = props.on_load.clone();

    use_effect_with((props.src.clone(), props.strategy), move |(src, strategy)| {
        schedule(src.clone(), *strategy, on_load);
        || ()
    });

    Html::default()
}

fn schedule(src: AttrValue, strategy: LoadStrategy, on_load: Callback<()>) {
    match strategy {
        LoadStrategy::AfterInteractive => {
            inject(&src, strategy, on_load);
        }
        LoadStrategy::LazyOnload => {
            let Some(win) = window() else { return };
            let page_loaded = win
                .document()
                .map(|d| d.ready_state() == "complete")
                .unwrap_or(false);
            if page_loaded {
                // Next tick, so the current render is never blocked.
                Timeout::new(0, move || {
                    inject(&src, strategy, on_load);
                })
                .forget();
            } else {
                let cb = Closure::once(move |_: Event| {
                    inject(&src, strategy, on_load);
                });
                let _ = win.add_event_listener_with_callback("load", cb.as_ref().unchecked_ref());
                cb.forget();
            }
        }
    }
}

/// Appends one `<script src=...>` to `<body>`, deduped by src so
/// re-renders never double-load. Returns the element so tests can drive
/// its load event.
pub fn inject(src: &str, strategy: LoadStrategy, on_load: Callback<()>) -> Option<HtmlScriptElement> {
    let doc = window().and_then(|w| w.document())?;
    if find_by_src(&doc, src).is_some() {
        return None;
    }

    let el: HtmlScriptElement = doc.create_element("script").ok()?.dyn_into().ok()?;
    el.set_src(src);
    el.set_async(true);
    let _ = el.set_attribute("data-strategy", strategy.as_str());

    let cb = Closure::once(move |_: Event| on_load.emit(()));
    el.set_onload(Some(cb.as_ref().unchecked_ref()));
    cb.forget();

    doc.body()?.append_child(&el).ok()?;
    Some(el)
}

fn find_by_src(doc: &Document, src: &str) -> Option<web_sys::Element> {
    doc.query_selector(&format!(r#"script[src="{src}"]"#))
        .ok()
        .flatten()
}
