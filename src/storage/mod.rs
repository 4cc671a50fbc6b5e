//! Storage layer for the schools collection.

mod school;

pub use school::*;
