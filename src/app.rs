use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{FirstPostPage, HomePage};

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/posts/first-post")]
    FirstPost,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::FirstPost => html! { <FirstPostPage /> },
        Route::NotFound => html! { <h1>{ "Page not found" }</h1> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
