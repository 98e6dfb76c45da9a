//! Data processing for the country indicators dashboard.
//!
//! This crate turns the loaded indicator tables into chart-ready frames:
//! - `join`: merges the five tables into one ordered list of countries
//! - `scale`: axis, radius, band and color scales derived from the entities
//! - `state`: the shared view state and the events that change it
//! - `projection`: pure functions from entities + state to draw frames
//! - `dashboard`: owns the data and state, recomputing only affected charts
//!
//! Nothing here touches the DOM; frames are plain serializable structs
//! handed to D3.js by the UI crate.

pub mod dashboard;
pub mod entity;
pub mod join;
pub mod layout;
pub mod projection;
pub mod scale;
pub mod state;

pub use dashboard::{Dashboard, DashboardFrame, FrameUpdate};
pub use entity::CountryEntity;
pub use join::{join, JoinReport, JoinedDataset};
pub use layout::ChartLayout;
pub use state::{Redraw, ViewEvent, ViewState};
