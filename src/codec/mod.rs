//! Codec module - SCALE primitive encoders

mod scale;

pub use scale::*;
