use yew::prelude::*;

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorButtonProps {
    pub is_active: bool,
    pub info: LanguageInfo,
    pub on_select: Callback<String>,
}

#[function_component(LanguageSelectorButton)]
pub fn language_selector_button(props: &LanguageSelectorButtonProps) -> Html {
    let code = props.info.code.to_string();
    let on_select = props.on_select.clone();
    html! {
        <li>
            <a
                class={if props.is_active { "active" } else { "" }}
                onclick={move |event: MouseEvent| {
                    event.prevent_default();
                    on_select.emit(code.clone());
                }}>
                <span>{ props.info.flag }</span>
                <span>{ props.info.native_name }</span>
            </a>
        </li>
    }
}
