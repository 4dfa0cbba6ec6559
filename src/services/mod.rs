// src/services/mod.rs
pub mod chart;
pub mod dataset;
pub mod flags;
pub mod miracles;
pub mod options;
pub mod projection;
pub mod store;
