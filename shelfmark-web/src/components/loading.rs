use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center pt-8 pb-4">
                <p class="text-center">{ i18n.t("dashboard.loading") }</p>
            </div>
        </div>
    }
}
