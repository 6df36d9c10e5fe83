use glam::{DMat3, DVec3};
use std::fmt;

/// An oriented line: origin point plus unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    ///
    /// A zero direction produces a non-finite ray; callers that accept
    /// untrusted input should check [`Ray::is_valid`].
    #[inline]
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray from a direction that is already unit length.
    #[inline]
    pub const fn from_unit(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.direction.is_finite()
    }

    /// Finite with a non-zero direction.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.direction.length_squared() > 0.0
    }

    /// Rotate origin and direction by `rotation`.
    #[inline]
    pub fn rotated(&self, rotation: &DMat3) -> Self {
        Self {
            origin: rotation.mul_vec3(self.origin),
            direction: rotation.mul_vec3(self.direction),
        }
    }

    /// Move the origin by `offset`; the direction is unchanged.
    #[inline]
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            origin: self.origin + offset,
            direction: self.direction,
        }
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (o, d) = (self.origin, self.direction);
        write!(
            f,
            "Ray(origin=[{:.6}, {:.6}, {:.6}], direction=[{:.6}, {:.6}, {:.6}])",
            o.x, o.y, o.z, d.x, d.y, d.z
        )
    }
}
