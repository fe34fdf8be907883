// src/core.rs
pub mod analyzer;
pub mod report;
pub mod segment;
