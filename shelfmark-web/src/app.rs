use crate::models::app_state::AppState;
use crate::routes::{self, MainRoute};
use crate::session;
use yew::{Html, function_component, html};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Root application component.
///
/// Initializes the session context from the persistent store when the app
/// starts; the router and the auth gate decide everything else. Logout
/// tears the context down again (see `UserProfile`).
#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    {
        let dispatch = dispatch.clone();
        yew::use_effect_with((), move |()| {
            if let Some(user) = session::get() {
                dispatch.set(AppState { user: Some(user) });
            }
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={routes::switch} />
        </BrowserRouter>
    }
}
