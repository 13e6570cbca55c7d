use crate::routes::MainRoute;
use crate::session;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Render-time guard for protected views.
///
/// Reads the session store exactly once per mount. With no stored session
/// it redirects to the auth screen and renders nothing, so the wrapped
/// view never mounts and issues no fetches. The check is advisory only:
/// it does not intercept API calls made by views that are already mounted.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let authorized = use_state(|| session::get().is_some());
    let navigator = use_navigator();

    {
        let authorized = *authorized;
        use_effect_with((), move |()| {
            if !authorized {
                if let Some(nav) = navigator {
                    nav.push(&MainRoute::Auth);
                }
            }
            || ()
        });
    }

    if *authorized {
        html! { <>{ props.children.clone() }</> }
    } else {
        Html::default()
    }
}
