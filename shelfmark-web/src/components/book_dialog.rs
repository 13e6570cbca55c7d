use i18nrs::yew::use_translation;
use shared::models::Book;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookDialogProps {
    pub open: bool,
    /// The book being edited, or `None` when adding a new one.
    #[prop_or_default]
    pub editing: Option<Book>,
    /// Emits the entered title on save.
    pub on_save: Callback<String>,
    pub on_close: Callback<()>,
    #[prop_or(false)]
    pub busy: bool,
}

/// Shared add/edit dialog; the add and edit flows differ only in their
/// text table keys and in whether `editing` carries a book.
#[function_component(BookDialog)]
pub fn book_dialog(props: &BookDialogProps) -> Html {
    let (i18n, _) = use_translation();
    let title = use_state(String::new);

    // Reset the field whenever the dialog opens or switches target
    {
        let title = title.clone();
        use_effect_with((props.open, props.editing.clone()), move |(open, editing)| {
            if *open {
                title.set(editing.as_ref().map_or_else(String::new, |book| book.title.clone()));
            }
            || ()
        });
    }

    if !props.open {
        return Html::default();
    }

    let onsubmit = {
        let title = title.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_save.emit((*title).clone());
        })
    };

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let (dialog_title, dialog_description) = if props.editing.is_some() {
        (
            i18n.t("dashboard.dialog.edit.title"),
            i18n.t("dashboard.dialog.edit.description"),
        )
    } else {
        (
            i18n.t("dashboard.dialog.add.title"),
            i18n.t("dashboard.dialog.add.description"),
        )
    };

    let disable_save = (*title).trim().is_empty() || props.busy;

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <button
                    class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                    type="button"
                    onclick={on_close}
                >
                    {"✕"}
                </button>
                <h3 class="font-bold text-lg">{ dialog_title }</h3>
                <p class="py-2 text-sm text-base-content/70">{ dialog_description }</p>
                <form onsubmit={onsubmit}>
                    <div class="form-control py-4">
                        <label class="label" for="book-title">
                            <span class="label-text">{ i18n.t("dashboard.dialog.field.title") }</span>
                        </label>
                        <input
                            id="book-title"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*title).clone()}
                            oninput={on_title_change}
                        />
                    </div>
                    <div class="modal-action">
                        <button class="btn btn-primary" type="submit" disabled={disable_save}>
                            { i18n.t("dashboard.dialog.save") }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
