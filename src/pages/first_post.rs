// First blog post - also demonstrates lazy third-party script loading
use gloo::console::log;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::head::use_document_title;
use crate::layout::Layout;
use crate::script::{LoadStrategy, Script};

const SDK_URL: &str = "https://connect.facebook.net/en_US/sdk.js";

#[function_component(FirstPostPage)]
pub fn first_post_page() -> Html {
    use_document_title("First Post".into());

    let on_sdk_load = Callback::from(|_| {
        log!("script loaded correctly, window.FB has been populated");
    });

    html! {
        <Layout>
            <Script src={SDK_URL} strategy={LoadStrategy::LazyOnload} on_load={on_sdk_load} />
            <h1>{ "First Post" }</h1>
            <h2>
                <Link<Route> to={Route::Home}>{ "Back to home" }</Link<Route>>
            </h2>
        </Layout>
    }
}
