//! Period comparison of daily sleep, activity and readiness scores.
//!
//! The loader turns a CSV export into [`model::record::Record`]s, the
//! pipeline selects two periods and aggregates them, and [`session::Session`]
//! holds the state a front end needs between inputs.

pub mod input;
pub mod locale;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod session;
