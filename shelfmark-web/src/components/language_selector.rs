use i18nrs::yew::use_translation;
use yew::prelude::*;

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language;

/// Dropdown for switching the interface language.
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let current = use_state_eq(|| i18n.get_current_language().to_string());

    // Keep local state in step when the provider changes the language
    {
        let current = current.clone();
        use_effect_with(i18n, move |i18n| {
            current.set(i18n.get_current_language().to_string());
            || ()
        });
    }

    let on_select = {
        let current = current.clone();
        Callback::from(move |code: String| {
            current.set(code.clone());
            set_language.emit(code);
        })
    };

    let code = (*current).clone();
    let active_flag = language::get_language_info(&code).map_or("🌐", |info| info.flag);
    let supported = language::supported_languages();
    let mut languages: Vec<_> = supported.values().cloned().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <span>{ active_flag }</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
            {
                for languages.into_iter().map(|info| {
                    html! {
                        <LanguageSelectorButton
                            is_active={info.code == code.as_str()}
                            info={info}
                            on_select={on_select.clone()}
                        />
                    }
                })
            }
            </ul>
        </div>
    }
}
