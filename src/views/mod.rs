// src/views/mod.rs

pub mod auth;
pub mod layout;
pub mod pages;
pub mod quiz;

pub use layout::page;
