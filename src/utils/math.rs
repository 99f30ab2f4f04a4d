use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wraps an angle into [-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    // rem_euclid can land exactly on 2π for tiny negative inputs
    wrapped.clamp(-PI, PI)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Hermite smoothstep: 0 below `edge0`, 1 above `edge1`, C1-continuous between.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Unit vector along the body's longitudinal axis for `rotation = (pitch, roll, yaw)`.
pub fn forward_axis(rotation: &Vector3<f64>) -> Vector3<f64> {
    let (pitch, yaw) = (rotation.x, rotation.z);
    Vector3::new(
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        yaw.cos() * pitch.cos(),
    )
}

/// Unit vector to the right of the heading, in the horizontal plane.
pub fn right_axis(yaw: f64) -> Vector3<f64> {
    Vector3::new(yaw.cos(), 0.0, -yaw.sin())
}

#[inline]
pub fn is_finite_vector(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}
