//! Adapters that bind the board controller to Dioxus signals, toasts, and
//! the router.

mod redirect;
mod signal_board;
mod toast_notifier;

use notegrid_core::{ApiClient, NotesController};

pub use redirect::RouterRedirect;
pub use signal_board::SignalBoard;
pub use toast_notifier::ToastNotifier;

/// Controller type used by the notes board view.
pub type BoardController = NotesController<ApiClient, ToastNotifier, SignalBoard>;
