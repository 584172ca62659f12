//! Selection callbacks delivered by the picker.

use tokio::sync::mpsc::UnboundedSender;

use crate::reaction::Reaction;

/// Receives selection changes from a [`ReactionPicker`](super::ReactionPicker).
pub trait SelectionListener {
    /// A reaction became the current selection (tap or long-press commit).
    fn on_selected(&mut self, reaction: &Reaction);

    /// The picker returned to showing its unselected placeholder.
    fn on_deselected(&mut self);
}

/// Selection change as a value, for hosts that queue callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Selected(Reaction),
    Deselected,
}

/// Forward callbacks into a channel drained by the host's event loop.
impl SelectionListener for UnboundedSender<SelectionEvent> {
    fn on_selected(&mut self, reaction: &Reaction) {
        // Receiver gone means the host is shutting down
        let _ = self.send(SelectionEvent::Selected(reaction.clone()));
    }

    fn on_deselected(&mut self) {
        let _ = self.send(SelectionEvent::Deselected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_channel_listener_forwards_events() {
        let (mut tx, mut rx) = mpsc::unbounded_channel();
        let like = Reaction::new(1).with_label("Like");

        tx.on_selected(&like);
        tx.on_deselected();

        assert_eq!(rx.try_recv().ok(), Some(SelectionEvent::Selected(like)));
        assert_eq!(rx.try_recv().ok(), Some(SelectionEvent::Deselected));
        assert!(rx.try_recv().is_err());
    }
}
