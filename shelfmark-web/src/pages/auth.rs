use crate::api::ShelfmarkClient;
use crate::components::{LanguageSelector, Notice, Toast};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use i18nrs::yew::use_translation;
use shared::models::{LoginRequest, RegisterRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
}

/// Combined login/register screen.
///
/// A successful login becomes the new session: the response body is
/// written to the session store and the session context before navigating
/// to the dashboard. Registration never logs the user in; it switches back
/// to the login tab. An already-present session skips this screen.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let (i18n, _) = use_translation();
    let (_state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();

    let tab = use_state(|| AuthTab::Login);
    let busy = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    let login_email = use_state(String::new);
    let login_password = use_state(String::new);

    let register_name = use_state(String::new);
    let register_email = use_state(String::new);
    let register_password = use_state(String::new);
    let register_age = use_state(String::new);

    // A stored session skips the auth screen entirely
    {
        let navigator = navigator.clone();
        use_effect_with((), move |()| {
            if session::get().is_some() {
                if let Some(nav) = navigator {
                    nav.push(&MainRoute::Dashboard);
                }
            }
            || ()
        });
    }

    let on_login = {
        let email = login_email.clone();
        let password = login_password.clone();
        let busy = busy.clone();
        let notice = notice.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let login_error = i18n.t("auth.login.error");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            busy.set(true);
            notice.set(None);

            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let busy_ref = busy.clone();
            let notice_ref = notice.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let login_error = login_error.clone();
            spawn_local(async move {
                let client = ShelfmarkClient::shared();
                match client.login(&request).await {
                    Ok(user) => {
                        session::set(&user);
                        dispatch.set(AppState { user: Some(user) });
                        if let Some(nav) = navigator {
                            nav.push(&MainRoute::Dashboard);
                        }
                    }
                    Err(err) => {
                        log(std::format!("Login error: {err}").as_str());
                        notice_ref.set(Some(Notice::error(login_error)));
                    }
                }
                busy_ref.set(false);
            });
        })
    };

    let on_register = {
        let name = register_name.clone();
        let email = register_email.clone();
        let password = register_password.clone();
        let age = register_age.clone();
        let tab = tab.clone();
        let busy = busy.clone();
        let notice = notice.clone();
        let age_invalid = i18n.t("auth.register.age_invalid");
        let register_error = i18n.t("auth.register.error");
        let register_success = i18n.t("auth.register.success");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Ok(parsed_age) = (*age).trim().parse::<u32>() else {
                notice.set(Some(Notice::error(age_invalid.clone())));
                return;
            };
            busy.set(true);
            notice.set(None);

            let request = RegisterRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                age: parsed_age,
            };
            let name = name.clone();
            let email = email.clone();
            let password = password.clone();
            let age = age.clone();
            let tab = tab.clone();
            let busy_ref = busy.clone();
            let notice_ref = notice.clone();
            let register_error = register_error.clone();
            let register_success = register_success.clone();
            spawn_local(async move {
                let client = ShelfmarkClient::shared();
                match client.register(&request).await {
                    Ok(_created) => {
                        name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        age.set(String::new());
                        tab.set(AuthTab::Login);
                        notice_ref.set(Some(Notice::success(register_success)));
                    }
                    Err(err) => {
                        log(std::format!("Registration error: {err}").as_str());
                        notice_ref.set(Some(Notice::error(register_error)));
                    }
                }
                busy_ref.set(false);
            });
        })
    };

    let select_login = {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(AuthTab::Login))
    };

    let select_register = {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(AuthTab::Register))
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let is_busy = *busy;

    let login_form = {
        let disable_submit = (*login_email).is_empty() || (*login_password).is_empty() || is_busy;
        html! {
            <form onsubmit={on_login}>
                <div class="form-control">
                    <label class="label" for="login-email">
                        <span class="label-text">{ i18n.t("auth.login.email") }</span>
                    </label>
                    <input
                        id="login-email"
                        class="input input-bordered"
                        type="email"
                        placeholder="your@email.com"
                        required=true
                        value={(*login_email).clone()}
                        oninput={text_input(&login_email)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="login-password">
                        <span class="label-text">{ i18n.t("auth.login.password") }</span>
                    </label>
                    <input
                        id="login-password"
                        class="input input-bordered"
                        type="password"
                        required=true
                        value={(*login_password).clone()}
                        oninput={text_input(&login_password)}
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary w-full" type="submit" disabled={disable_submit}>
                        { if is_busy { i18n.t("auth.login.submitting") } else { i18n.t("auth.login.submit") } }
                    </button>
                </div>
            </form>
        }
    };

    let register_form = {
        let disable_submit = (*register_name).is_empty()
            || (*register_email).is_empty()
            || (*register_password).is_empty()
            || (*register_age).is_empty()
            || is_busy;
        html! {
            <form onsubmit={on_register}>
                <div class="form-control">
                    <label class="label" for="register-name">
                        <span class="label-text">{ i18n.t("auth.register.name") }</span>
                    </label>
                    <input
                        id="register-name"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*register_name).clone()}
                        oninput={text_input(&register_name)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="register-email">
                        <span class="label-text">{ i18n.t("auth.register.email") }</span>
                    </label>
                    <input
                        id="register-email"
                        class="input input-bordered"
                        type="email"
                        placeholder="your@email.com"
                        required=true
                        value={(*register_email).clone()}
                        oninput={text_input(&register_email)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="register-password">
                        <span class="label-text">{ i18n.t("auth.register.password") }</span>
                    </label>
                    <input
                        id="register-password"
                        class="input input-bordered"
                        type="password"
                        required=true
                        value={(*register_password).clone()}
                        oninput={text_input(&register_password)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="register-age">
                        <span class="label-text">{ i18n.t("auth.register.age") }</span>
                    </label>
                    <input
                        id="register-age"
                        class="input input-bordered"
                        type="number"
                        required=true
                        value={(*register_age).clone()}
                        oninput={text_input(&register_age)}
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary w-full" type="submit" disabled={disable_submit}>
                        { if is_busy { i18n.t("auth.register.submitting") } else { i18n.t("auth.register.submit") } }
                    </button>
                </div>
            </form>
        }
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    <div class="flex justify-between items-start">
                        <h2 class="card-title text-2xl">{ i18n.t("auth.title") }</h2>
                        <LanguageSelector />
                    </div>
                    <p class="text-sm text-base-content/70">{ i18n.t("auth.subtitle") }</p>
                    <div role="tablist" class="tabs tabs-boxed mt-4">
                        <a
                            role="tab"
                            class={if *tab == AuthTab::Login { "tab tab-active" } else { "tab" }}
                            onclick={select_login}
                        >
                            { i18n.t("auth.tab.login") }
                        </a>
                        <a
                            role="tab"
                            class={if *tab == AuthTab::Register { "tab tab-active" } else { "tab" }}
                            onclick={select_register}
                        >
                            { i18n.t("auth.tab.register") }
                        </a>
                    </div>
                    {
                        match *tab {
                            AuthTab::Login => login_form,
                            AuthTab::Register => register_form,
                        }
                    }
                    <p class="text-sm text-base-content/60 text-center mt-4">
                        { i18n.t("auth.terms") }
                    </p>
                </div>
            </div>
            if let Some(current) = (*notice).clone() {
                <Toast notice={current} on_dismiss={on_dismiss} />
            }
        </div>
    }
}
