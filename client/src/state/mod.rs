//! Reactive state models provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each model is a plain struct wrapped in an `RwSignal` by `App`. Transition
//! methods live on the structs so they can be tested without a reactive owner.

pub mod banner;
pub mod form;
pub mod ui;
