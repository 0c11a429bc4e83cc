//! Toast notifications

use rankboard_core::{Notification, NotificationLevel};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts currently on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push { id: u64, notification: Notification },
    Dismiss(u64),
}

pub type ToastContext = UseReducerHandle<ToastList>;

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push { id, notification } => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast { id, notification });
                Rc::new(Self { toasts })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|toast| toast.id == id) {
                    return self;
                }
                let toasts = self
                    .toasts
                    .iter()
                    .filter(|toast| toast.id != id)
                    .cloned()
                    .collect();
                Rc::new(Self { toasts })
            }
        }
    }
}

const fn level_classes(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "border-ac-gold/30",
        NotificationLevel::Success => "border-green-500/60",
        NotificationLevel::Warning => "border-yellow-500/60",
        NotificationLevel::Error => "border-red-500/60",
    }
}

/// Top-right stack of toasts
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toasts = use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your component with SessionProvider");

    html! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80">
            { for toasts.toasts.iter().map(|toast| {
                let onclick = {
                    let toasts = toasts.clone();
                    let id = toast.id;
                    let dismissible = toast.notification.dismiss_on_click;
                    Callback::from(move |_: MouseEvent| {
                        if dismissible {
                            toasts.dispatch(ToastAction::Dismiss(id));
                        }
                    })
                };
                html! {
                    <div
                        key={toast.id}
                        {onclick}
                        class={classes!(
                            "bg-ac-gray", "border", "text-ac-light", "rounded-lg", "p-3", "shadow-lg",
                            level_classes(toast.notification.level),
                            toast.notification.dismiss_on_click.then_some("cursor-pointer"),
                        )}
                    >
                        {&toast.notification.message}
                    </div>
                }
            }) }
        </div>
    }
}
