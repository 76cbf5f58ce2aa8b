//! 1. Only put small concepts here. Nothing major
//! 2. This crate *must* have no dependencies on other local crates in the project

mod bounding_rect;
mod dimensions;
mod error;
mod number;

pub use bounding_rect::BoundingRect;
pub use dimensions::{Height, Width};
pub use error::NumberError;
pub use number::{finite, non_negative, truncate_count};
