// src/handlers/mod.rs

pub mod comment;
pub mod export;
pub mod health;
pub mod quiz;
pub mod stats;
