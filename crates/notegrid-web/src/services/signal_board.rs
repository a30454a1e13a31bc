use dioxus::prelude::*;

use notegrid_core::{Board, BoardStore};

/// Keeps the board in a signal so every controller mutation re-renders.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalBoard(pub Signal<Board>);

impl BoardStore for SignalBoard {
    fn with<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        f(&self.0.peek())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        let mut board = self.0;
        f(&mut board.write())
    }
}
