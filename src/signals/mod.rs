//! Signal classification and composite evaluation.

pub mod classifier;
pub mod regime;

pub use classifier::classify;
pub use regime::evaluate_composite;
