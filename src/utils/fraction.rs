use std::cmp::Ordering;

/// Width-to-height ratio of an image or a bounding box, compared exactly.
#[derive(Debug, Copy, Clone)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    pub fn new(width: u32, height: u32) -> Self {
        AspectRatio { width, height }
    }
}

impl PartialEq for AspectRatio {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = self.cross_multiply(other);
        a == b
    }
}

impl Eq for AspectRatio {}

impl PartialOrd for AspectRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AspectRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.cross_multiply(other);
        a.cmp(&b)
    }
}

impl AspectRatio {
    /// Cross-multiplication to compare ratios without using floating-point arithmetic
    /// `a/b < c/d` is equivalent to `a * d < c * b`
    fn cross_multiply(&self, other: &Self) -> (u64, u64) {
        (
            u64::from(self.width) * u64::from(other.height),
            u64::from(other.width) * u64::from(self.height),
        )
    }

    /// Height of an image with this ratio that is `width` pixels wide, truncated.
    pub fn height_for(&self, width: u32) -> u32 {
        let height = u64::from(width) * u64::from(self.height) / u64::from(self.width);
        // cannot exceed u32 whenever this ratio is wider than the box the width came from
        u32::try_from(height).unwrap_or(u32::MAX)
    }

    /// Width of an image with this ratio that is `height` pixels tall, truncated.
    pub fn width_for(&self, height: u32) -> u32 {
        let width = u64::from(height) * u64::from(self.width) / u64::from(self.height);
        u32::try_from(width).unwrap_or(u32::MAX)
    }
}
