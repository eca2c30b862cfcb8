// src/sources/mod.rs
pub mod catalog;
pub mod client;
