use anyhow::{ensure, Result};
use smallvec::SmallVec;

/// Values a [`Track`] can interpolate. Vector types interpolate
/// component-wise; it is the same rule as the scalar case, not a separate
/// algorithm.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for glam::Vec2 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

impl Lerp for glam::Vec3 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

impl Lerp for glam::Vec4 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

/// Ordered keyframe list mapping an input fraction to a visual value.
///
/// Inputs outside the keyframe range are clamped, never extrapolated.
/// Keyframe lists are small (two to five entries at every use site), so
/// they are stored inline.
#[derive(Clone, Debug)]
pub struct Track<V> {
    keys: SmallVec<[(f32, V); 5]>,
}

impl<V: Lerp> Track<V> {
    /// Build a track from `(fraction, value)` pairs.
    ///
    /// Fractions must be finite and non-decreasing and there must be at
    /// least two of them. A list that violates this is a programming
    /// mistake, rejected here rather than surfacing mid-animation.
    pub fn new(keys: &[(f32, V)]) -> Result<Self> {
        ensure!(keys.len() >= 2, "track needs at least two keyframes");
        for (f, _) in keys {
            ensure!(f.is_finite(), "keyframe fraction must be finite");
        }
        for pair in keys.windows(2) {
            ensure!(
                pair[0].0 <= pair[1].0,
                "keyframe fractions must be non-decreasing ({} then {})",
                pair[0].0,
                pair[1].0
            );
        }
        Ok(Self {
            keys: SmallVec::from_slice(keys),
        })
    }

    /// Sample the track at `input`, clamping to the keyframe range.
    pub fn sample(&self, input: f32) -> V {
        let (first_f, first_v) = self.keys[0];
        let (last_f, last_v) = self.keys[self.keys.len() - 1];
        if input <= first_f {
            return first_v;
        }
        if input >= last_f {
            return last_v;
        }
        for pair in self.keys.windows(2) {
            let (f0, v0) = pair[0];
            let (f1, v1) = pair[1];
            if input < f1 {
                // Coincident fractions hold the later value
                if f1 <= f0 {
                    return v1;
                }
                let t = (input - f0) / (f1 - f0);
                return V::lerp(v0, v1, t);
            }
        }
        last_v
    }
}
