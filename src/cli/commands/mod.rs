//! Command implementations for the keysift CLI

pub mod scan;
