// src/utils/mod.rs

pub mod flash;
pub mod hash;
pub mod session;
