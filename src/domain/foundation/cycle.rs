//! Index arithmetic for the stem, branch and sexagenary cycles.
//!
//! Every `mod 10` / `mod 12` / `mod 60` in the crate goes through [`wrap`],
//! so negative offsets (reverse luck cycles, "previous month") never produce
//! an out-of-range index.

/// Number of heavenly stems.
pub const STEM_COUNT: usize = 10;

/// Number of earthly branches.
pub const BRANCH_COUNT: usize = 12;

/// Length of the combined stem-branch cycle.
pub const SEXAGENARY_COUNT: usize = 60;

/// Number of elements in the five-element cycle.
pub const ELEMENT_COUNT: usize = 5;

/// Reduces `value` into `0..modulus`, treating negative values as counting backwards.
pub fn wrap(value: i64, modulus: usize) -> usize {
    value.rem_euclid(modulus as i64) as usize
}

/// Forward distance from `from` to `to` within a cycle of length `modulus`.
pub fn distance(from: usize, to: usize, modulus: usize) -> usize {
    wrap(to as i64 - from as i64, modulus)
}

/// Position of a stem/branch pair in the 60-term cycle.
///
/// Solves `k ≡ stem (mod 10)` and `k ≡ branch (mod 12)`. Only pairs of equal
/// parity exist in the cycle; any other pair has no position.
pub fn sexagenary_index(stem: usize, branch: usize) -> Option<usize> {
    if stem % 2 != branch % 2 {
        return None;
    }
    Some(wrap(6 * stem as i64 - 5 * branch as i64, SEXAGENARY_COUNT))
}
