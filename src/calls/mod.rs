//! Calls module - dispatchable extrinsic descriptors and their wire form

mod dispatch;

pub use dispatch::*;
