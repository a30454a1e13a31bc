use dioxus_primitives::toast::{ToastOptions, Toasts};

use notegrid_core::{Notice, NoticeKind, Notifier};

/// Shows controller notices as toasts.
#[derive(Clone, Copy)]
pub struct ToastNotifier(pub Toasts);

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => self.0.success(notice.message, ToastOptions::new()),
            NoticeKind::Error => self.0.error(notice.message, ToastOptions::new()),
        }
    }
}
