// Adapters layer: concrete implementations for external systems (pdga.com, Discord).

pub mod pdga;
pub mod profile_page;

#[cfg(feature = "discord")]
pub mod discord;
