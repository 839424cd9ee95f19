//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use quickcheck::Arbitrary;

/// Any `u32` except zero, which no image dimension can be.
#[must_use]
pub fn positive_u32(gen: &mut quickcheck::Gen) -> u32 {
    u32::arbitrary(gen).max(1)
}

