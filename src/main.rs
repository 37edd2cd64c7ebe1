use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};

mod config;
mod content;
mod error;
mod theme;
mod motion {
    pub mod ease;
    pub mod latch;
    pub mod menu;
    pub mod scroll;
    pub mod stagger;
    pub mod transform;
    pub mod variant;
}
mod components {
    pub mod anchor;
    pub mod error_boundary;
    pub mod footer;
    pub mod in_view;
    pub mod navigation;
    pub mod reveal;
    pub mod scroll_provider;
}
mod sections {
    pub mod access;
    pub mod concept;
    pub mod heading;
    pub mod menu;
    pub mod space;
    pub mod specialties;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::{
    error_boundary::{self, ErrorBoundary},
    scroll_provider::ScrollProvider,
};
use pages::{
    home::Home,
    not_found::NotFound,
};
use theme::Theme;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/404")]
    #[not_found]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <ErrorBoundary>
            <Theme />
            <ScrollProvider>
                <HashRouter>
                    <Switch<Route> render={switch} />
                </HashRouter>
            </ScrollProvider>
        </ErrorBoundary>
    }
}


fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let message = error::panic_message(info.payload());
        if let Err(err) = error_boundary::show_fallback(message) {
            error!("could not show fallback page: {}", err);
        }
    }));
}


fn main() {
    // Console panic messages, then the fallback page instead of a blank one
    install_panic_hook();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::RESTAURANT_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_home() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/404"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/menu"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}
