// SPDX-License-Identifier: GPL-3.0

/// Number of lovelace in one ADA.
pub const LOVELACE_PER_ADA: f64 = 1_000_000.0;

/// Converts an ADA amount to lovelace. No rounding is applied.
pub fn to_lovelace(ada: f64) -> f64 {
	ada * LOVELACE_PER_ADA
}

/// Converts a lovelace amount to ADA. No rounding is applied.
pub fn to_ada(lovelace: f64) -> f64 {
	lovelace / LOVELACE_PER_ADA
}
