//! Skillgrid - Team Skill Heatmap and Radar Engine
//!
//! This crate implements the selection, ordering and aggregation engine
//! behind an interactive skill heatmap with a team-profile radar view.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
