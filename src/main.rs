use portfolio_site::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
