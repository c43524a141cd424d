// src/lib.rs

pub mod api;
pub mod app_state;
pub mod client;
pub mod codec;
pub mod config;
pub mod models;
pub mod protocol;
pub mod service;
pub mod store;
pub mod vault;
