//! Interactive explorer for FPL player statistics.
//!
//! The core is a pure filtering-and-aggregation engine: an immutable
//! [`data::model::PlayerDataset`], a validated
//! [`data::filter::FilterState`], and a [`views::recompute`] cycle that
//! filters once and derives four plot-ready views from the same snapshot.
//! The egui front-end in [`app`] / [`ui`] is a thin collaborator that
//! renders whatever a cycle returns.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
pub mod views;
