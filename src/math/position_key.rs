use super::Point3;

/// Hashable exact-match key for a vertex position.
///
/// Two positions produce the same key iff their coordinates are bit-identical,
/// with the single exception that `-0.0` and `+0.0` map to the same key so key
/// equality agrees with `==` for finite coordinates. No tolerance is applied:
/// positions that differ in the last ulp are distinct points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey([u32; 3]);

impl PositionKey {
    /// Builds the key for a raw (un-offset) vertex position.
    #[must_use]
    pub fn new(point: &Point3) -> Self {
        Self([bits(point.x), bits(point.y), bits(point.z)])
    }
}

impl From<&Point3> for PositionKey {
    fn from(point: &Point3) -> Self {
        Self::new(point)
    }
}

#[inline]
fn bits(value: f32) -> u32 {
    // -0.0 == 0.0, so they must hash alike
    if value == 0.0 {
        0.0f32.to_bits()
    } else {
        value.to_bits()
    }
}
