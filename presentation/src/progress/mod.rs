//! Progress reporting during a meeting

pub mod reporter;
