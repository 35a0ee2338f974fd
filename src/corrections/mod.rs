//! Correction Selection
//!
//! Pick proposed corrections, submit them as one unit, reconcile the page
//! with the outcome.

mod controller;
mod selection;

pub use controller::{ApplyOutcome, CorrectionController, CorrectionView};
