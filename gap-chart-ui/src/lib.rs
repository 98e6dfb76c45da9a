//! Shared Dioxus components and D3.js bridge for the dashboard app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js frame renderers via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `dispatch`: routes UI events through the dashboard and redraws affected charts
//! - `mark_click`: click payloads sent back from D3 marks
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod dispatch;
pub mod js_bridge;
pub mod mark_click;
pub mod state;
