//! CLI command implementations

pub mod apply;
pub mod effect;
pub mod info;
pub mod validate;

mod reporting;

pub use reporting::Reporter;
