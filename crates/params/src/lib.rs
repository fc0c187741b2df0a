//! Algorithm constants for the fileseal library

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod asymmetric;
pub mod symmetric;
