use i18nrs::yew::use_translation;
use shared::models::Book;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct BookCardProps {
    pub book: Book,
    pub on_toggle: Callback<i64>,
    pub on_edit: Callback<Book>,
    pub on_delete: Callback<i64>,
    /// True while a toggle or delete for this book is in flight.
    #[prop_or(false)]
    pub busy: bool,
}

#[function_component(BookCard)]
pub fn book_card(props: &BookCardProps) -> Html {
    let (i18n, _) = use_translation();
    let book = props.book.clone();

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = book.id;
        Callback::from(move |_| on_toggle.emit(id))
    };

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let book = book.clone();
        Callback::from(move |_| on_edit.emit(book.clone()))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = book.id;
        Callback::from(move |_| on_delete.emit(id))
    };

    let toggle_class = if book.is_read {
        "btn btn-primary"
    } else {
        "btn btn-outline"
    };
    let toggle_label = if book.is_read {
        i18n.t("book.read")
    } else {
        i18n.t("book.unread")
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center pt-8 pb-4">
                <p class="flex justify-center gap-x-6">
                    <Icon icon_id={IconId::HeroiconsOutlineBookOpen} class="w-6 h-6" />
                    { book.title.clone() }
                </p>
            </div>
            <div class="card-actions justify-center gap-x-6 pb-6">
                <button class={toggle_class} onclick={on_toggle} disabled={props.busy}>
                    { toggle_label }
                </button>
                <button class="btn btn-outline" onclick={on_edit}>
                    <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="w-4 h-4 mr-2" />
                    { i18n.t("book.edit") }
                </button>
                <button class="btn btn-error" onclick={on_delete} disabled={props.busy}>
                    <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-4 h-4 mr-2" />
                    { i18n.t("book.delete") }
                </button>
            </div>
        </div>
    }
}
