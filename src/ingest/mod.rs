//! CSV ingestion: chunking, type inference, coercion, and the load loop.
mod chunks;
mod error;
mod frame;
mod kind;
mod loader;
mod row;
mod schema;
pub mod timestamp;
mod value;

#[cfg(test)]
pub(crate) mod memory;

pub use chunks::*;
pub use error::*;
pub use frame::*;
pub use kind::*;
pub use loader::*;
pub use row::*;
pub use schema::*;
pub use value::*;
