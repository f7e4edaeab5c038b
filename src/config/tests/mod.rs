//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, room id, mapping, and base URL resolution
//! - `loading`: End-to-end loading from environment and CLI arguments

mod field_resolution;
mod helpers;
