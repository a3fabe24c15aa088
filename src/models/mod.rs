// src/models/mod.rs

pub mod answer;
pub mod comment;
pub mod quiz;
pub mod stats;
