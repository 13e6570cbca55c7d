use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body items-center">
                    <h1 class="text-2xl font-bold">{ i18n.t("notfound.title") }</h1>
                    <p>{ i18n.t("notfound.body") }</p>
                    <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-primary mt-4">
                        { i18n.t("notfound.back") }
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
