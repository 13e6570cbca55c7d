use crate::components::require_auth::RequireAuth;
use crate::pages::*;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Auth,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
///
/// The dashboard is the only protected view; [`RequireAuth`] checks the
/// session store on mount and redirects to the auth screen when it is
/// empty, without rendering (or fetching for) the wrapped page.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    match route {
        MainRoute::Auth => html! { <AuthPage /> },
        MainRoute::Dashboard => html! {
            <RequireAuth>
                <DashboardPage />
            </RequireAuth>
        },
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}
