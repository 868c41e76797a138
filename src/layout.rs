use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::styles;

/// Site name shown in the header and reused by pages that set the
/// document title to the site name.
pub const SITE_TITLE: &str = "Yew Sample Website";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    /// The landing page gets the big-header variant of the shell.
    #[prop_or_default]
    pub home: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Shared page shell. Pure render of its props: a header (home or
/// standard variant), the children verbatim, and on non-home pages a
/// back-to-home affordance below the content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <header class={styles::HEADER}>
                if props.home {
                    <h1 class={styles::HEADING_2XL}>{ SITE_TITLE }</h1>
                } else {
                    <h2 class={styles::HEADING_LG}>
                        <Link<Route> to={Route::Home} classes={styles::COLOR_INHERIT}>
                            { SITE_TITLE }
                        </Link<Route>>
                    </h2>
                }
            </header>
            <main>
                { for props.children.iter() }
            </main>
            if !props.home {
                <div class={styles::BACK_TO_HOME}>
                    <Link<Route> to={Route::Home}>{ "← Back to home" }</Link<Route>>
                </div>
            }
        </div>
    }
}
