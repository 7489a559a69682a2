//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, toasts, route guard) while
//! reading/writing shared state from Leptos context providers.

pub mod header;
pub mod protected_route;
pub mod text_field;
pub mod toaster;
