use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod content;
mod icons;
mod media;
mod components {
    pub mod reveal;
    pub mod shimmer;
    pub mod video;
}
mod pages {
    pub mod awards;
}

use pages::awards::AwardsPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering awards page");
            html! { <AwardsPage /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    info!("Starting awards page");
    yew::Renderer::<App>::new().render();
}
