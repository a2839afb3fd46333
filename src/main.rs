use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod countdown;
mod effects;
mod funnel;
mod spots;
mod storage;
mod tracking;
mod utm;
mod pages {
    pub mod chat;
    pub mod landing;
    pub mod result;
}

use pages::{chat::Chat, landing::Landing, result::ResultPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/chat")]
    Chat,
    #[at("/resultado")]
    Resultado,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Chat => {
            info!("Rendering Chat page");
            html! { <Chat /> }
        }
        Route::Resultado => {
            info!("Rendering Result page");
            html! { <ResultPage /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Single capture per app load. The whitelist depends on the entry route:
    // the landing link additionally carries the TikTok click id. Capturing
    // again in a page component would overwrite this record from the same
    // query with a narrower key set.
    use_effect_with_deps(
        |_| {
            utm::capture_from_query(
                &storage::LocalStore,
                &effects::current_query(),
                utm::entry_whitelist(&effects::current_pathname()),
            );
            || ()
        },
        (),
    );

    html! {
        <div class="app-shell">
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>
                {r#"
body { margin: 0; font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; }
.app-shell { min-height: 100vh; background: linear-gradient(180deg, #0f172a 0%, #1e1b4b 50%, #0f172a 100%); }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
