// ABOUTME: Field-presence accounting shared by processed shapes
// ABOUTME: One predicate decides both section visibility and the "N fields" badge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Count of populated leaf fields in a processed group
///
/// A group is informative when it has at least one populated leaf. Processors
/// keep a group only if it is informative, so a present group always reports a
/// positive count.
pub trait PopulatedFields {
    /// Number of populated leaf fields (a non-empty list counts once unless
    /// the implementor documents otherwise)
    fn populated_fields(&self) -> usize;

    /// Whether the group carries any information
    fn is_informative(&self) -> bool {
        self.populated_fields() > 0
    }
}

impl<T: PopulatedFields> PopulatedFields for Option<T> {
    fn populated_fields(&self) -> usize {
        self.as_ref().map_or(0, PopulatedFields::populated_fields)
    }
}

/// Number of `true` flags
pub fn count_some<const N: usize>(flags: [bool; N]) -> usize {
    flags.iter().filter(|present| **present).count()
}

/// Leaf count where zero-valued leaves only count alongside a non-zero one
///
/// A zero on its own (a program in week 0, a body fat that clamped to 0) does
/// not make a group informative.
pub const fn with_zero_leaves(substantive: usize, zeros: usize) -> usize {
    if substantive == 0 {
        0
    } else {
        substantive + zeros
    }
}
