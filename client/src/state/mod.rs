//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `poem` holds what the user is writing and how it looks; `ui` mirrors the
//! export session owned by the share dispatcher. Components read both from
//! Leptos context.

pub mod poem;
pub mod ui;
