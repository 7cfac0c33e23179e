// src/handlers/mod.rs

pub mod auth;
pub mod learn;
pub mod pages;
pub mod profile;
pub mod quiz;
