//! Address module - nominal key types and the Substrate/EVM mapping

mod keys;
mod mapping;

pub use keys::*;
pub use mapping::*;
