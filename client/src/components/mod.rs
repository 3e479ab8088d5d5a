//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor chrome and read/write shared state from
//! Leptos context providers.

pub mod control_bar;
pub mod dim_slider;
pub mod poem_card;
pub mod share_modal;
pub mod toggle_switch;
