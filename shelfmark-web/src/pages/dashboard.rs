use crate::api::ShelfmarkClient;
use crate::components::{
    BookCard, BookDialog, LanguageSelector, Loading, Notice, Toast, UserProfile,
};
use crate::session;
use crate::state::{self, ListPhase};
use i18nrs::yew::use_translation;
use shared::models::{Book, CreateBookRequest, UpdateBookRequest};
use std::collections::HashSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Book dashboard page component.
///
/// The list is a best-effort mirror of the server: every successful
/// mutation reconciles it from the response (or optimistically for the
/// body-less toggle endpoint), and every failure leaves the prior list
/// untouched and surfaces a single notice. A per-book pending set ignores
/// repeat toggle/delete clicks while a request for that book is in flight.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();

    let books = use_state(Vec::<Book>::new);
    let phase = use_state(|| ListPhase::Idle);
    let notice = use_state(|| None::<Notice>);
    let editing = use_state(|| None::<Book>);
    let dialog_open = use_state(|| false);
    let dialog_busy = use_state(|| false);
    // One cell shared by every render; completion closures from overlapping
    // requests mutate it in place instead of deriving a new set from the
    // snapshot of whichever render created them. The counter only forces a
    // render so the busy flags refresh.
    let pending = use_mut_ref(HashSet::<i64>::new);
    let pending_version = use_state(|| 0u32);

    // Initial fetch; no session id means no request at all
    {
        let books_handle = books.clone();
        let phase_handle = phase.clone();
        let notice_handle = notice.clone();
        let load_error = i18n.t("dashboard.error.load");
        let unauthenticated = i18n.t("dashboard.error.unauthenticated");
        use_effect_with((), move |()| {
            let Some(user_id) = session::user_id() else {
                notice_handle.set(Some(Notice::error(unauthenticated)));
                return;
            };
            phase_handle.set(ListPhase::Loading);
            spawn_local(async move {
                let client = ShelfmarkClient::shared();
                match client.list_books(user_id).await {
                    Ok(list) => {
                        books_handle.set(list);
                    }
                    Err(err) => {
                        log(std::format!("Failed to fetch books: {err}").as_str());
                        notice_handle.set(Some(Notice::error(load_error)));
                    }
                }
                phase_handle.set(ListPhase::Ready);
            });
        });
    }

    let on_toggle = {
        let books = books.clone();
        let notice = notice.clone();
        let pending = pending.clone();
        let pending_version = pending_version.clone();
        let toggled_message = i18n.t("dashboard.toast.toggled");
        let toggle_error = i18n.t("dashboard.error.toggle");
        Callback::from(move |id: i64| {
            if !state::begin_pending(&pending, id) {
                return;
            }
            pending_version.set(pending_version.wrapping_add(1));

            // Optimistic flip; the endpoint returns no body, so success needs
            // no reconciliation and failure restores the prior snapshot
            let prior = (*books).clone();
            books.set(state::toggle_read(&prior, id));

            let books = books.clone();
            let notice = notice.clone();
            let pending = pending.clone();
            let pending_version = pending_version.clone();
            let toggled_message = toggled_message.clone();
            let toggle_error = toggle_error.clone();
            spawn_local(async move {
                let client = ShelfmarkClient::shared();
                match client.toggle_book_status(id).await {
                    Ok(()) => {
                        notice.set(Some(Notice::success(toggled_message)));
                    }
                    Err(err) => {
                        log(std::format!("Failed to toggle book {id}: {err}").as_str());
                        books.set(prior);
                        notice.set(Some(Notice::error(toggle_error)));
                    }
                }
                state::finish_pending(&pending, id);
                pending_version.set(pending_version.wrapping_add(1));
            });
        })
    };

    let on_delete = {
        let books = books.clone();
        let notice = notice.clone();
        let pending = pending.clone();
        let pending_version = pending_version.clone();
        let deleted_message = i18n.t("dashboard.toast.deleted");
        let delete_error = i18n.t("dashboard.error.delete");
        Callback::from(move |id: i64| {
            if !state::begin_pending(&pending, id) {
                return;
            }
            pending_version.set(pending_version.wrapping_add(1));

            let books = books.clone();
            let notice = notice.clone();
            let pending = pending.clone();
            let pending_version = pending_version.clone();
            let deleted_message = deleted_message.clone();
            let delete_error = delete_error.clone();
            spawn_local(async move {
                let client = ShelfmarkClient::shared();
                match client.delete_book(id).await {
                    Ok(()) => {
                        books.set(state::remove_by_id(&books, id));
                        notice.set(Some(Notice::success(deleted_message)));
                    }
                    Err(err) => {
                        log(std::format!("Failed to delete book {id}: {err}").as_str());
                        notice.set(Some(Notice::error(delete_error)));
                    }
                }
                state::finish_pending(&pending, id);
                pending_version.set(pending_version.wrapping_add(1));
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let dialog_open = dialog_open.clone();
        Callback::from(move |book: Book| {
            editing.set(Some(book));
            dialog_open.set(true);
        })
    };

    let on_add = {
        let editing = editing.clone();
        let dialog_open = dialog_open.clone();
        Callback::from(move |_| {
            editing.set(None);
            dialog_open.set(true);
        })
    };

    let on_dialog_close = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |()| dialog_open.set(false))
    };

    let on_save = {
        let books = books.clone();
        let notice = notice.clone();
        let editing = editing.clone();
        let dialog_open = dialog_open.clone();
        let dialog_busy = dialog_busy.clone();
        let added_message = i18n.t("dashboard.toast.added");
        let updated_message = i18n.t("dashboard.toast.updated");
        let add_error = i18n.t("dashboard.error.add");
        let update_error = i18n.t("dashboard.error.update");
        let unauthenticated = i18n.t("dashboard.error.unauthenticated");
        Callback::from(move |title: String| {
            dialog_busy.set(true);

            let books = books.clone();
            let notice = notice.clone();
            let editing_handle = editing.clone();
            let dialog_open = dialog_open.clone();
            let dialog_busy = dialog_busy.clone();
            let target = (*editing).clone();
            let added_message = added_message.clone();
            let updated_message = updated_message.clone();
            let add_error = add_error.clone();
            let update_error = update_error.clone();
            let unauthenticated = unauthenticated.clone();
            spawn_local(async move {
                let client = ShelfmarkClient::shared();
                match target {
                    Some(book) => {
                        let payload = UpdateBookRequest { title };
                        match client.update_book(book.id, &payload).await {
                            Ok(updated) => {
                                books.set(state::replace_by_id(&books, &updated));
                                editing_handle.set(None);
                                dialog_open.set(false);
                                notice.set(Some(Notice::success(updated_message)));
                            }
                            Err(err) => {
                                log(std::format!("Failed to update book: {err}").as_str());
                                notice.set(Some(Notice::error(update_error)));
                            }
                        }
                    }
                    None => match session::user_id() {
                        Some(user_id) => {
                            let payload = CreateBookRequest { title, user_id };
                            match client.create_book(&payload).await {
                                Ok(created) => {
                                    books.set(state::append_created(&books, created));
                                    dialog_open.set(false);
                                    notice.set(Some(Notice::success(added_message)));
                                }
                                Err(err) => {
                                    log(std::format!("Failed to add book: {err}").as_str());
                                    notice.set(Some(Notice::error(add_error)));
                                }
                            }
                        }
                        None => {
                            notice.set(Some(Notice::error(unauthenticated)));
                        }
                    },
                }
                dialog_busy.set(false);
            });
        })
    };

    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |message: Notice| notice.set(Some(message)))
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let body = if *phase == ListPhase::Loading {
        html! { <Loading /> }
    } else if books.is_empty() {
        html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center pt-8 pb-4">
                    <p class="text-center">{ i18n.t("dashboard.empty") }</p>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="space-y-4">
                { for books.iter().map(|book| {
                    let busy = pending.borrow().contains(&book.id);
                    html! {
                        <BookCard
                            key={book.id}
                            book={book.clone()}
                            on_toggle={on_toggle.clone()}
                            on_edit={on_edit.clone()}
                            on_delete={on_delete.clone()}
                            {busy}
                        />
                    }
                })}
            </div>
        }
    };

    html! {
        <div class="container mx-auto p-4">
            <div class="flex justify-end items-center gap-2 mb-4">
                <LanguageSelector />
                <UserProfile on_notice={on_notice} />
            </div>
            <h1 class="text-2xl font-bold mb-4">{ i18n.t("dashboard.title") }</h1>
            <button class="btn btn-primary mb-4" onclick={on_add}>
                <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4 mr-2" />
                { i18n.t("dashboard.add") }
            </button>
            <BookDialog
                open={*dialog_open}
                editing={(*editing).clone()}
                on_save={on_save}
                on_close={on_dialog_close}
                busy={*dialog_busy}
            />
            { body }
            if let Some(current) = (*notice).clone() {
                <Toast notice={current} on_dismiss={on_dismiss} />
            }
        </div>
    }
}
