//! Chatwork message delivery.
//!
//! [`MessageSender`] is the seam the orchestration depends on;
//! [`ChatworkClient`] implements it with one blocking HTTP request per call.

pub mod client;

pub use client::{ChatworkClient, DeliveryResult, MessageSender};

#[cfg(test)]
pub use client::MockMessageSender;
