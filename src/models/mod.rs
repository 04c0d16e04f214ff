// src/models/mod.rs

pub mod listing;
pub mod question;
