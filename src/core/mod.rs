pub mod command;
pub mod handler;
pub mod reply;

pub use crate::domain::model::{
    Command, Directive, InboundMessage, OutboundReply, PdgaNumber, Profile,
};
pub use crate::domain::ports::{ConfigProvider, ProfileSource};
pub use crate::utils::error::Result;
