use crate::foundation::core::{Affine, Vec2};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (t = 0) to `b` (t = 1). `t` is not clamped.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Style projection of one element: uniform scale, translation, opacity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationTarget {
    /// Uniform scale factor, 1.0 is natural size.
    pub scale: f64,
    /// Offset in CSS pixels.
    pub translate: Vec2,
    /// 0..1, clamped when sampled.
    pub opacity: f64,
}

impl Default for AnimationTarget {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
            opacity: 1.0,
        }
    }
}

impl AnimationTarget {
    /// Identity pose with a different scale.
    pub fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Builder-style translation override.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.translate = Vec2::new(x, y);
        self
    }

    /// Builder-style opacity override.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Copy with opacity forced into `[0, 1]`.
    pub fn clamped(mut self) -> Self {
        self.opacity = self.opacity.clamp(0.0, 1.0);
        self
    }

    /// Affine applied by a surface: translate after scaling about the element origin.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Largest per-channel distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.scale - other.scale)
            .abs()
            .max((self.translate.x - other.translate.x).abs())
            .max((self.translate.y - other.translate.y).abs())
            .max((self.opacity - other.opacity).abs())
    }
}

impl Lerp for AnimationTarget {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/target.rs"]
mod tests;
