//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; the only tolerance in the core is the degenerate-segment
//!   cutoff. The acceptance guard compares at a decimal precision chosen per
//!   run, not against an epsilon.

/// Squared segment length below which a segment is treated as a single point.
pub(crate) const DEGENERATE_SEGMENT_EPS: f64 = 1e-8;
