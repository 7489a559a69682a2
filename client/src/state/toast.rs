//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Toasts are presentation state, kept apart from `Session` so the session
//! fields can be cleared as soon as their text has been queued here.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Most toasts kept on screen; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id. Blank text is ignored.
    pub fn push(&mut self, kind: ToastKind, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, text: text.to_owned() });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        Some(id)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
