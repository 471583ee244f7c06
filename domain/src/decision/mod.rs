//! Decision records
//!
//! A [`Decision`] is assembled once per tallied proposal and never changes.

mod builder;
mod roi;

pub use builder::{Decision, DecisionBuilder};
pub use roi::{RoiEstimate, roi_percentage};
