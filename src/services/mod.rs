// src/services/mod.rs

pub mod credentials;
