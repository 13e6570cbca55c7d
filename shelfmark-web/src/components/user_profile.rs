use crate::{
    api::ShelfmarkClient,
    components::toast::Notice,
    models::app_state::AppState,
    routes::MainRoute,
    session,
};
use i18nrs::yew::use_translation;
use shared::models::{UpdateUserRequest, User};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Properties, PartialEq)]
pub struct UserProfileProps {
    /// Receives success/failure notices; the owning page renders them.
    pub on_notice: Callback<Notice>,
}

/// Profile controls: edit dialog for name/email/age plus logout.
///
/// Fetches the user on mount and renders nothing until it arrives. Saving
/// replaces the displayed user, the persisted session, and the session
/// context from the response body. Logout tears the session down and
/// returns to the auth screen.
#[function_component(UserProfile)]
pub fn user_profile(props: &UserProfileProps) -> Html {
    let (i18n, _) = use_translation();
    let (_state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();

    let user = use_state(|| None::<User>);
    let dialog_open = use_state(|| false);
    let saving = use_state(|| false);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let age = use_state(String::new);

    // Fetch the profile once on mount
    {
        let user_handle = user.clone();
        let name_handle = name.clone();
        let email_handle = email.clone();
        let age_handle = age.clone();
        let on_notice = props.on_notice.clone();
        let load_error = i18n.t("profile.error.load");
        use_effect_with((), move |()| {
            let Some(user_id) = session::user_id() else {
                on_notice.emit(Notice::error(load_error));
                return;
            };
            spawn_local(async move {
                let client = ShelfmarkClient::shared();
                match client.get_user(user_id).await {
                    Ok(profile) => {
                        name_handle.set(profile.name.clone());
                        email_handle.set(profile.email.clone());
                        age_handle.set(profile.age.to_string());
                        user_handle.set(Some(profile));
                    }
                    Err(err) => {
                        log(std::format!("Failed to fetch user data: {err}").as_str());
                        on_notice.emit(Notice::error(load_error));
                    }
                }
            });
        });
    }

    let Some(current) = (*user).clone() else {
        return Html::default();
    };

    let onsubmit = {
        let user_handle = user.clone();
        let dialog_open = dialog_open.clone();
        let saving = saving.clone();
        let name = name.clone();
        let email = email.clone();
        let age = age.clone();
        let dispatch = dispatch.clone();
        let on_notice = props.on_notice.clone();
        let age_invalid = i18n.t("profile.error.age_invalid");
        let update_error = i18n.t("profile.error.update");
        let updated_message = i18n.t("profile.toast.updated");
        let user_id = current.id;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(parsed_age) = (*age).trim().parse::<u32>() else {
                on_notice.emit(Notice::error(age_invalid.clone()));
                return;
            };
            let payload = UpdateUserRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                age: parsed_age,
            };
            saving.set(true);
            let user_handle = user_handle.clone();
            let dialog_open = dialog_open.clone();
            let saving_ref = saving.clone();
            let dispatch = dispatch.clone();
            let on_notice = on_notice.clone();
            let update_error = update_error.clone();
            let updated_message = updated_message.clone();
            spawn_local(async move {
                let client = ShelfmarkClient::shared();
                match client.update_user(user_id, &payload).await {
                    Ok(updated) => {
                        session::set(&updated);
                        dispatch.set(AppState {
                            user: Some(updated.clone()),
                        });
                        user_handle.set(Some(updated));
                        dialog_open.set(false);
                        on_notice.emit(Notice::success(updated_message));
                    }
                    Err(err) => {
                        log(std::format!("Failed to update profile: {err}").as_str());
                        on_notice.emit(Notice::error(update_error));
                    }
                }
                saving_ref.set(false);
            });
        })
    };

    let on_logout = {
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |_| {
            session::clear();
            dispatch.set(AppState::default());
            if let Some(nav) = navigator.clone() {
                nav.push(&MainRoute::Auth);
            }
        })
    };

    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_| dialog_open.set(true))
    };

    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_| dialog_open.set(false))
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_age_change = {
        let age = age.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                age.set(input.value());
            }
        })
    };

    let is_saving = *saving;

    html! {
        <div class="flex items-center space-x-4">
            <button class="btn btn-outline" onclick={open_dialog}>
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-4 h-4 mr-2" />
                { i18n.t("profile.edit") }
            </button>
            <button class="btn btn-ghost" onclick={on_logout}>
                <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-4 h-4 mr-2" />
                { i18n.t("profile.logout") }
            </button>
            if *dialog_open {
                <div class="modal modal-open">
                    <div class="modal-box">
                        <button
                            class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                            type="button"
                            onclick={close_dialog}
                        >
                            {"✕"}
                        </button>
                        <h3 class="font-bold text-lg">{ i18n.t("profile.dialog.title") }</h3>
                        <p class="py-2 text-sm text-base-content/70">{ i18n.t("profile.dialog.description") }</p>
                        <form onsubmit={onsubmit}>
                            <div class="form-control">
                                <label class="label" for="profile-name">
                                    <span class="label-text">{ i18n.t("profile.field.name") }</span>
                                </label>
                                <input
                                    id="profile-name"
                                    class="input input-bordered"
                                    type="text"
                                    value={(*name).clone()}
                                    oninput={on_name_change}
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="profile-email">
                                    <span class="label-text">{ i18n.t("profile.field.email") }</span>
                                </label>
                                <input
                                    id="profile-email"
                                    class="input input-bordered"
                                    type="email"
                                    value={(*email).clone()}
                                    oninput={on_email_change}
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="profile-age">
                                    <span class="label-text">{ i18n.t("profile.field.age") }</span>
                                </label>
                                <input
                                    id="profile-age"
                                    class="input input-bordered"
                                    type="number"
                                    value={(*age).clone()}
                                    oninput={on_age_change}
                                />
                            </div>
                            <div class="modal-action">
                                <button class="btn btn-primary" type="submit" disabled={is_saving}>
                                    { if is_saving { i18n.t("profile.saving") } else { i18n.t("profile.save") } }
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        </div>
    }
}
