//! Server-rendered markup checks for the pages and the shared layout.
//! Components that use `Link` need a router context, so each scenario is
//! wrapped in a `Router` driven by an in-memory history.

use portfolio_site::layout::{Layout, SITE_TITLE};
use portfolio_site::pages::{FirstPostPage, HomePage};
use yew::prelude::*;
use yew::{BaseComponent, ServerRenderer};
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

fn with_router(inner: Html) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! { <Router history={history}>{ inner }</Router> }
}

#[function_component(HomeShell)]
fn home_shell() -> Html {
    with_router(html! { <HomePage /> })
}

#[function_component(FirstPostShell)]
fn first_post_shell() -> Html {
    with_router(html! { <FirstPostPage /> })
}

#[function_component(HomeChromeShell)]
fn home_chrome_shell() -> Html {
    with_router(html! {
        <Layout home=true>
            <p>{ "probe content" }</p>
        </Layout>
    })
}

#[function_component(PostChromeShell)]
fn post_chrome_shell() -> Html {
    with_router(html! {
        <Layout>
            <p>{ "probe content" }</p>
        </Layout>
    })
}

async fn render<C>() -> String
where
    C: BaseComponent,
    C::Properties: Default,
{
    ServerRenderer::<C>::new().hydratable(false).render().await
}

#[tokio::test]
async fn home_page_renders_prose_and_external_link() {
    let html = render::<HomeShell>().await;

    assert!(html.contains(SITE_TITLE));
    assert!(html.contains("software engineer"));
    assert!(html.contains("staying up-to-date with the latest technologies"));
    assert!(html.contains(r#"href="https://nextjs.org/learn""#));
    assert_eq!(html.matches("nextjs.org/learn").count(), 1);
}

#[tokio::test]
async fn first_post_renders_heading_and_back_link() {
    let html = render::<FirstPostShell>().await;

    assert!(html.contains("First Post"));
    assert!(html.contains(r#"href="/""#));
    assert!(html.contains("Back to home"));
}

#[tokio::test]
async fn script_declaration_emits_no_inline_markup() {
    let html = render::<FirstPostShell>().await;

    assert!(!html.contains("<script"));
    assert!(!html.contains("connect.facebook.net"));
}

#[tokio::test]
async fn layout_home_variant_uses_home_chrome() {
    let html = render::<HomeChromeShell>().await;

    assert!(html.contains("probe content"));
    assert!(html.contains("heading-2xl"));
    assert!(!html.contains("back-to-home"));
}

#[tokio::test]
async fn layout_default_variant_has_back_navigation() {
    let html = render::<PostChromeShell>().await;

    assert!(html.contains("probe content"));
    assert!(html.contains("back-to-home"));
    assert!(html.contains("Back to home"));
    assert!(!html.contains("heading-2xl"));
}
