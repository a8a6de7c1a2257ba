//! UI components for the visitor pass window
//!
//! Most modules extend `App` or `VisitorForm` with rendering methods.
//! `toast` also defines the notification surface entity.

mod actions;
mod form;
mod page;
mod recipient_select;
pub mod toast;
