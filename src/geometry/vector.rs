//! Vector helpers on top of glam
//!
//! 2D functions take `Vec2`, their `_3d` counterparts take `Vec3`.
//! Distances named `planar_*` ignore height.

use glam::{Vec2, Vec3};

/// Drop the height component
#[inline]
pub fn to_2d(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Lift a planar point back to 3D at the given reference height
///
/// Hosts usually pass the observer's current height here.
#[inline]
pub fn to_3d(v: Vec2, z: f32) -> Vec3 {
    Vec3::new(v.x, v.y, z)
}

/// Distance between two points on the XY plane
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    to_2d(a).distance(to_2d(b))
}

/// Squared distance on the XY plane (no sqrt, for threshold checks)
#[inline]
pub fn planar_distance_squared(a: Vec3, b: Vec3) -> f32 {
    to_2d(a).distance_squared(to_2d(b))
}

/// Full 3D distance, for when elevation matters
#[inline]
pub fn spatial_distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

#[inline]
pub fn spatial_distance_squared(a: Vec3, b: Vec3) -> f32 {
    a.distance_squared(b)
}

/// Whether the vector has been set
///
/// Zero doubles as the "unset" marker, so a real point at the origin also
/// reads as invalid. Only use this where the origin cannot be a legitimate
/// value.
#[inline]
pub fn is_valid(v: Vec2) -> bool {
    v != Vec2::ZERO
}

/// 3D version of [`is_valid`], with the same origin caveat
#[inline]
pub fn is_valid_3d(v: Vec3) -> bool {
    v != Vec3::ZERO
}

/// Unit vector in the direction of `v`
///
/// Exact zero or non-finite input yields `Vec2::ZERO`. The vector is scaled
/// by its largest component first so the squared length cannot overflow or
/// underflow for very large or very small inputs.
#[inline]
pub fn normalized(v: Vec2) -> Vec2 {
    let scale = v.abs().max_element();
    if scale == 0.0 || !scale.is_finite() {
        return Vec2::ZERO;
    }
    (v / scale).normalize_or_zero()
}

/// Unit vector in the direction of `v`, or `Vec3::ZERO` when degenerate
#[inline]
pub fn normalized_3d(v: Vec3) -> Vec3 {
    let scale = v.abs().max_element();
    if scale == 0.0 || !scale.is_finite() {
        return Vec3::ZERO;
    }
    (v / scale).normalize_or_zero()
}

/// Move `from` by `distance` toward `to`
///
/// Returns `from` unchanged when the two points coincide.
#[inline]
pub fn extend(from: Vec2, to: Vec2, distance: f32) -> Vec2 {
    from + distance * normalized(to - from)
}

/// Move `from` by `distance` away from `to`
#[inline]
pub fn shorten(from: Vec2, to: Vec2, distance: f32) -> Vec2 {
    from - distance * normalized(to - from)
}

#[inline]
pub fn extend_3d(from: Vec3, to: Vec3, distance: f32) -> Vec3 {
    from + distance * normalized_3d(to - from)
}

#[inline]
pub fn shorten_3d(from: Vec3, to: Vec3, distance: f32) -> Vec3 {
    from - distance * normalized_3d(to - from)
}

/// Swap Y and Z, for hosts that use a Y-up convention
#[inline]
pub fn swap_yz(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, v.y)
}

/// Perpendicular vector (rotated +90°), not normalized
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// The other perpendicular vector (rotated -90°), not normalized
#[inline]
pub fn perpendicular_other(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Rotate `v` counter-clockwise by `angle` radians
pub fn rotated(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.y * c + v.x * s)
}

/// Z component of the cross product of two planar vectors
///
/// Positive when `b` turns counter-clockwise (left) from `a`, negative when
/// it turns clockwise, zero when collinear.
#[inline]
pub fn cross_z(a: Vec2, b: Vec2) -> f32 {
    b.y * a.x - b.x * a.y
}
