//! Data models for the schools API.

mod school;

pub use school::*;
