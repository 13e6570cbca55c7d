//! Book-list reconciliation helpers.
//!
//! Each mutation against the API reconciles the in-memory list from the
//! response: append on create, replace by id on update, flip the flag on
//! toggle, filter on delete. A failed call leaves the prior list untouched,
//! so these helpers only ever run on (or optimistically ahead of) success.

use shared::models::Book;
use std::cell::RefCell;
use std::collections::HashSet;

/// Lifecycle of a resource list.
///
/// `Idle` before the first fetch, `Loading` while it is in flight, `Ready`
/// afterwards. Failures return to `Ready` with the prior data intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Ready,
}

/// Mark a book as having a request in flight.
///
/// Returns `false` when the book is already pending; the caller must not
/// issue another request for it. All callers share one cell, so completions
/// of overlapping requests for different books never clobber each other.
pub fn begin_pending(pending: &RefCell<HashSet<i64>>, id: i64) -> bool {
    pending.borrow_mut().insert(id)
}

/// Clear a book's in-flight mark once its request settles.
pub fn finish_pending(pending: &RefCell<HashSet<i64>>, id: i64) {
    pending.borrow_mut().remove(&id);
}

/// Append the created book returned by the server.
pub fn append_created(books: &[Book], created: Book) -> Vec<Book> {
    let mut next = books.to_vec();
    next.push(created);
    next
}

/// Replace the entry matching the updated book's id.
pub fn replace_by_id(books: &[Book], updated: &Book) -> Vec<Book> {
    books
        .iter()
        .map(|book| {
            if book.id == updated.id {
                updated.clone()
            } else {
                book.clone()
            }
        })
        .collect()
}

/// Flip the read flag of the book with the given id.
pub fn toggle_read(books: &[Book], id: i64) -> Vec<Book> {
    books
        .iter()
        .map(|book| {
            if book.id == id {
                Book {
                    is_read: !book.is_read,
                    ..book.clone()
                }
            } else {
                book.clone()
            }
        })
        .collect()
}

/// Filter out the book with the given id.
pub fn remove_by_id(books: &[Book], id: i64) -> Vec<Book> {
    books
        .iter()
        .filter(|book| book.id != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Vec<Book> {
        vec![
            Book {
                id: 1,
                title: "Emma".to_string(),
                is_read: false,
                user_id: 7,
            },
            Book {
                id: 2,
                title: "Dune".to_string(),
                is_read: true,
                user_id: 7,
            },
            Book {
                id: 3,
                title: "Persuasion".to_string(),
                is_read: false,
                user_id: 7,
            },
        ]
    }

    #[test]
    fn test_append_created_grows_list_by_one() {
        let books = shelf();
        let created = Book {
            id: 4,
            title: "The Hobbit".to_string(),
            is_read: false,
            user_id: 7,
        };

        let next = append_created(&books, created.clone());
        assert_eq!(next.len(), books.len() + 1);
        assert_eq!(next.last(), Some(&created));
    }

    #[test]
    fn test_replace_by_id_swaps_exactly_one_entry() {
        let books = shelf();
        let updated = Book {
            id: 2,
            title: "Dune Messiah".to_string(),
            is_read: true,
            user_id: 7,
        };

        let next = replace_by_id(&books, &updated);
        assert_eq!(next.len(), books.len());
        assert_eq!(next[1], updated);
        assert_eq!(next[0], books[0]);
        assert_eq!(next[2], books[2]);
    }

    #[test]
    fn test_replace_by_id_unknown_id_is_noop() {
        let books = shelf();
        let updated = Book {
            id: 99,
            title: "Ghost".to_string(),
            is_read: false,
            user_id: 7,
        };

        assert_eq!(replace_by_id(&books, &updated), books);
    }

    #[test]
    fn test_toggle_read_flips_only_target() {
        let books = shelf();
        let next = toggle_read(&books, 1);

        assert!(next[0].is_read);
        assert_eq!(next[1], books[1]);
        assert_eq!(next[2], books[2]);
    }

    #[test]
    fn test_toggle_read_is_self_inverse() {
        let books = shelf();
        let twice = toggle_read(&toggle_read(&books, 2), 2);

        assert_eq!(twice, books);
    }

    #[test]
    fn test_remove_by_id_drops_exactly_one() {
        let books = shelf();
        let next = remove_by_id(&books, 2);

        assert_eq!(next.len(), books.len() - 1);
        assert!(!next.iter().any(|book| book.id == 2));
    }

    #[test]
    fn test_remove_by_id_unknown_id_is_noop() {
        let books = shelf();
        assert_eq!(remove_by_id(&books, 42), books);
    }

    #[test]
    fn test_pending_guard_blocks_repeat_requests() {
        let pending = RefCell::new(HashSet::new());

        assert!(begin_pending(&pending, 5));
        assert!(!begin_pending(&pending, 5));
        finish_pending(&pending, 5);
        assert!(begin_pending(&pending, 5));
    }

    #[test]
    fn test_pending_guard_survives_interleaved_completions() {
        // Handlers created at different times hold clones of the same cell
        let pending = std::rc::Rc::new(RefCell::new(HashSet::new()));
        let first = std::rc::Rc::clone(&pending);
        let second = std::rc::Rc::clone(&pending);

        assert!(begin_pending(&first, 1));
        assert!(begin_pending(&second, 2));

        // The first completion must not erase the second book's mark
        finish_pending(&first, 1);
        assert!(pending.borrow().contains(&2));
        assert!(!pending.borrow().contains(&1));

        // Nor may the second completion resurrect the first book's mark
        finish_pending(&second, 2);
        assert!(pending.borrow().is_empty());
    }

    #[test]
    fn test_list_phase_transitions() {
        let phase = ListPhase::Idle;
        assert_eq!(phase, ListPhase::Idle);
        assert_ne!(ListPhase::Loading, ListPhase::Ready);
    }
}
