//! Pure bitmask operations on permission masks.
//!
//! Every function takes the mask by value and returns a new one, so callers
//! holding the current mask in state never see it change underneath them.

/// Returns true when every bit of `bit` is set in `mask`.
///
/// For single-bit values this is the same as `mask & bit != 0`; the stricter
/// form also answers correctly for composite values.
#[must_use]
pub const fn has_bit(mask: u64, bit: u64) -> bool {
    mask & bit == bit
}

#[must_use]
pub const fn add_bit(mask: u64, bit: u64) -> u64 {
    mask | bit
}

#[must_use]
pub const fn remove_bit(mask: u64, bit: u64) -> u64 {
    mask & !bit
}

/// Clears `bit` when it is set, sets it otherwise.
///
/// ```
/// use chat_ui_core::permissions::toggle_permission;
///
/// assert_eq!(toggle_permission(0, 4), 4);
/// assert_eq!(toggle_permission(4, 4), 0);
/// ```
#[must_use]
pub const fn toggle_permission(mask: u64, bit: u64) -> u64 {
    if has_bit(mask, bit) { remove_bit(mask, bit) } else { add_bit(mask, bit) }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    const MASKS: [u64; 6] = [0, 1, 4, 0b1010_1010, u64::MAX, 1 << 63];
    const BITS: [u64; 5] = [1, 2, 4, 256, 1 << 63];

    #[googletest::test]
    fn concrete_scenario() {
        expect_that!(add_bit(0, 4), eq(4));
        expect_that!(has_bit(4, 4), eq(true));
        expect_that!(remove_bit(4, 4), eq(0));
        expect_that!(toggle_permission(0, 4), eq(4));
        expect_that!(toggle_permission(4, 4), eq(0));
    }

    #[rstest]
    fn add_then_has_and_remove_then_not() {
        for mask in MASKS {
            for bit in BITS {
                assert!(has_bit(add_bit(mask, bit), bit), "mask={mask} bit={bit}");
                assert!(!has_bit(remove_bit(mask, bit), bit), "mask={mask} bit={bit}");
            }
        }
    }

    #[rstest]
    fn toggle_is_its_own_inverse() {
        for mask in MASKS {
            for bit in BITS {
                assert_eq!(toggle_permission(toggle_permission(mask, bit), bit), mask);
            }
        }
    }

    #[rstest]
    #[case(0b0110, 0b0010, 0b0110)]
    #[case(0b0110, 0b1000, 0b1110)]
    fn add_is_idempotent(#[case] mask: u64, #[case] bit: u64, #[case] expected: u64) {
        assert_eq!(add_bit(mask, bit), expected);
        assert_eq!(add_bit(add_bit(mask, bit), bit), expected);
    }

    #[rstest]
    #[case(0b0110, 0b0010, 0b0100)]
    #[case(0b0110, 0b1000, 0b0110)]
    fn remove_is_idempotent(#[case] mask: u64, #[case] bit: u64, #[case] expected: u64) {
        assert_eq!(remove_bit(mask, bit), expected);
        assert_eq!(remove_bit(remove_bit(mask, bit), bit), expected);
    }

    #[rstest]
    fn operations_leave_the_input_untouched() {
        let mask = 0b0101;

        let _ = add_bit(mask, 0b0010);
        let _ = remove_bit(mask, 0b0001);
        let _ = toggle_permission(mask, 0b0100);

        assert_eq!(mask, 0b0101);
    }

    #[googletest::test]
    fn composite_bits_require_every_bit() {
        expect_that!(has_bit(0b0100, 0b0110), eq(false));
        expect_that!(has_bit(0b0110, 0b0110), eq(true));
        expect_that!(toggle_permission(0b0100, 0b0110), eq(0b0110));
    }
}
