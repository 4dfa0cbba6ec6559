// src/handlers/mod.rs
pub mod error;
pub mod options;
pub mod projection;
