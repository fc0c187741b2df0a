//! Block cipher modes of operation

pub mod ecb;

pub use ecb::Ecb;
