//! Planar and spatial vector math
//!
//! Everything here is pure: same inputs, same outputs, no hidden state.
//! - Distances are planar (XY) unless the name says otherwise
//! - Degenerate inputs resolve to documented fallbacks instead of NaN
//! - No reference to the controlled actor; callers pass positions and heights

pub mod segment;
pub mod vector;

pub use segment::{Projection, Segment, distance_to_segment};
pub use vector::{
    cross_z, extend, extend_3d, is_valid, is_valid_3d, normalized, normalized_3d, perpendicular,
    perpendicular_other, planar_distance, planar_distance_squared, rotated, shorten, shorten_3d,
    spatial_distance, spatial_distance_squared, swap_yz, to_2d, to_3d,
};

/// Convert an angle in radians to degrees
#[inline]
pub fn radians_to_degrees(angle: f32) -> f32 {
    angle * (180.0 / std::f32::consts::PI)
}

/// Convert an angle in degrees to radians
#[inline]
pub fn degrees_to_radians(angle: f32) -> f32 {
    std::f32::consts::PI * angle / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_angle_conversion() {
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1e-4);
        assert!((radians_to_degrees(-FRAC_PI_2) + 90.0).abs() < 1e-4);
        assert!((degrees_to_radians(90.0) - FRAC_PI_2).abs() < 1e-6);
        assert!((degrees_to_radians(radians_to_degrees(1.234)) - 1.234).abs() < 1e-5);
    }
}
