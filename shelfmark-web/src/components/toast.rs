use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

/// Kind of user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A single user-visible notification.
///
/// Every failed call collapses into one of these; nothing is retried and
/// nothing is fatal, so a notice is the end of the story for that action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    // Auto-dismiss; replacing the notice restarts the timer
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.notice.clone(), move |_| {
            let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(()));
            move || drop(timeout)
        });
    }

    let alert_class = match props.notice.kind {
        NoticeKind::Success => "alert alert-success",
        NoticeKind::Error => "alert alert-error",
    };

    html! {
        <div class="toast toast-end z-50">
            <div class={alert_class}>
                <span>{ props.notice.message.clone() }</span>
            </div>
        </div>
    }
}
