// src/handlers/mod.rs
pub mod chat;
pub mod profile;
pub mod schemes;
pub mod status;
pub mod ui;
