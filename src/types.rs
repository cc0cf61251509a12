//! Common types for 3D geometry.
//!
//! `Vec3` is used for dimensions, cell anchors and render positions alike;
//! `BoundingBox` is the axis-aligned region form used when checking that
//! placements stay disjoint.

use std::ops::Div;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a 3D vector or point in space.
///
/// Used for dimensions, cell centers and render positions. The packing engine
/// treats `x` as length, `y` as the vertical axis and `z` as depth.
///
/// # Examples
/// ```
/// use boxfit::types::Vec3;
///
/// let dims = Vec3::new(10.0, 20.0, 30.0);
/// assert_eq!(dims.volume(), 6000.0);
/// assert!(Vec3::new(5.0, 5.0, 5.0).fits_within(&dims));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Creates a new 3D vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts to tuple format for API compatibility.
    #[inline]
    pub const fn as_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Creates from tuple format.
    #[inline]
    pub const fn from_tuple(tuple: (f64, f64, f64)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }

    /// Calculates the volume (product of all components).
    #[inline]
    pub fn volume(&self) -> f64 {
        self.x * self.y * self.z
    }

    /// Checks if the vector fits within another vector (component-wise `<=`).
    ///
    /// The comparison is exact. No tolerance is applied, so `10.000000001`
    /// does not fit into `10.0`.
    #[inline]
    pub fn fits_within(&self, container: &Self) -> bool {
        self.x <= container.x && self.y <= container.y && self.z <= container.z
    }

    /// The six axis permutations of this vector in search order.
    ///
    /// The order is fixed: `(x,y,z) (x,z,y) (y,x,z) (y,z,x) (z,x,y) (z,y,x)`.
    /// Orientation search walks this array front to back and keeps the first
    /// permutation that fits.
    pub fn permutations(&self) -> [Vec3; 6] {
        let Vec3 { x, y, z } = *self;
        [
            Vec3::new(x, y, z),
            Vec3::new(x, z, y),
            Vec3::new(y, x, z),
            Vec3::new(y, z, x),
            Vec3::new(z, x, y),
            Vec3::new(z, y, x),
        ]
    }

    /// Subtracts `amount` from every component.
    #[inline]
    pub fn shrink(&self, amount: f64) -> Self {
        Self::new(self.x - amount, self.y - amount, self.z - amount)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self::Output {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// Trait for objects with 3D dimensions.
pub trait Dimensional {
    /// Returns the dimensions of the object.
    fn dimensions(&self) -> Vec3;

    /// Calculates the volume.
    fn volume(&self) -> f64 {
        self.dimensions().volume()
    }
}

/// Represents an Axis-Aligned Bounding Box (AABB).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl BoundingBox {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Checks if two bounding boxes share interior volume.
    ///
    /// Boxes that only touch along a face do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.max.x <= other.min.x
            || other.max.x <= self.min.x
            || self.max.y <= other.min.y
            || other.max.y <= self.min.y
            || self.max.z <= other.min.z
            || other.max.z <= self.min.z)
    }

    /// Checks if `other` lies completely inside this box (faces may coincide).
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.min.z >= self.min.z
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
            && other.max.z <= self.max.z
    }
}

/// Validation helpers shared by items and catalog entries.
pub mod validation {

    /// Validates a single dimension: must be positive and finite.
    ///
    /// # Parameters
    /// * `value` - The value to validate
    /// * `name` - Name of the dimension for error messages
    ///
    /// # Returns
    /// `Ok(())` for valid values, otherwise error text
    pub fn validate_dimension(value: f64, name: &str) -> Result<(), String> {
        if value.is_nan() {
            return Err(format!("{} must not be NaN", name));
        }
        if value.is_infinite() {
            return Err(format!("{} must not be infinite", name));
        }
        if value <= 0.0 {
            return Err(format!("{} must be positive, got: {}", name, value));
        }
        Ok(())
    }

    /// Like [`validate_dimension`], but accepts zero.
    ///
    /// Used when a missing value has been defaulted to zero.
    pub fn validate_non_negative(value: f64, name: &str) -> Result<(), String> {
        if value == 0.0 {
            return Ok(());
        }
        validate_dimension(value, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_scaling() {
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(b.shrink(1.0), Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(Vec3::from_tuple(b.as_tuple()), b);
    }

    #[test]
    fn test_vec3_fits_within_is_exact() {
        let small = Vec3::new(5.0, 5.0, 5.0);
        let large = Vec3::new(10.0, 10.0, 10.0);

        assert!(small.fits_within(&large));
        assert!(large.fits_within(&large));
        assert!(!large.fits_within(&small));
        assert!(!Vec3::new(10.0 + 1e-9, 10.0, 10.0).fits_within(&large));
    }

    #[test]
    fn test_permutation_order_is_fixed() {
        let perms = Vec3::new(1.0, 2.0, 3.0).permutations();
        let tuples: Vec<_> = perms.iter().map(Vec3::as_tuple).collect();
        assert_eq!(
            tuples,
            vec![
                (1.0, 2.0, 3.0),
                (1.0, 3.0, 2.0),
                (2.0, 1.0, 3.0),
                (2.0, 3.0, 1.0),
                (3.0, 1.0, 2.0),
                (3.0, 2.0, 1.0),
            ]
        );
    }

    fn cube(min: (f64, f64, f64), side: f64) -> BoundingBox {
        let min = Vec3::from_tuple(min);
        BoundingBox::new(min, Vec3::new(min.x + side, min.y + side, min.z + side))
    }

    #[test]
    fn test_bounding_box_intersects() {
        let a = cube((0.0, 0.0, 0.0), 10.0);
        let b = cube((5.0, 5.0, 5.0), 10.0);
        let touching = cube((10.0, 0.0, 0.0), 10.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn test_bounding_box_contains() {
        let outer = cube((0.0, 0.0, 0.0), 10.0);
        let inner = cube((0.0, 6.0, 0.0), 4.0);
        let sticking_out = cube((8.0, 0.0, 0.0), 4.0);

        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&sticking_out));
    }

    #[test]
    fn test_validation_dimension() {
        assert!(validation::validate_dimension(10.0, "Width").is_ok());
        assert!(validation::validate_dimension(0.0, "Width").is_err());
        assert!(validation::validate_dimension(-1.0, "Width").is_err());
        assert!(validation::validate_dimension(f64::NAN, "Width").is_err());
        assert!(validation::validate_dimension(f64::INFINITY, "Width").is_err());
    }

    #[test]
    fn test_validation_non_negative_accepts_zero_only_as_extra() {
        assert!(validation::validate_non_negative(0.0, "Height").is_ok());
        assert!(validation::validate_non_negative(2.5, "Height").is_ok());
        assert!(validation::validate_non_negative(-0.5, "Height").is_err());
        assert!(validation::validate_non_negative(f64::NAN, "Height").is_err());
    }
}
