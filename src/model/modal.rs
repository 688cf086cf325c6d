//! Modal stack for managing overlays
//!
//! Only the top modal receives input events.

/// A modal overlay displayed on top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Introduction and next steps
    About,
    /// Keyboard shortcuts
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Push `modal` unless it is already on top, in which case pop it
    pub fn toggle(&mut self, modal: Modal) {
        if self.top() == Some(&modal) {
            self.stack.pop();
        } else {
            self.stack.push(modal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_toggle_closes_same_kind() {
        let mut stack = ModalStack::new();
        stack.toggle(Modal::About);
        assert_eq!(stack.top(), Some(&Modal::About));

        stack.toggle(Modal::About);
        assert!(stack.top().is_none());

        stack.toggle(Modal::Help);
        stack.toggle(Modal::About);
        assert_eq!(stack.top(), Some(&Modal::About));
    }
}
