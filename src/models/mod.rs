// src/models/mod.rs
pub mod chat;
pub mod profile;
pub mod scheme;

pub use chat::{AskRequest, AskResponse, ChatMessage, Role};
pub use profile::{Profile, ProfileField};
pub use scheme::{RecommendedScheme, SchemeRecord};
