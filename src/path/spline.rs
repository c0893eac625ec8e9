//! Catmull-Rom segment kernel
//!
//! A segment runs from `p1` to `p2`; `p0` and `p3` are its neighbors (or phantom
//! points at the ends of a path). The basis is written out in closed form:
//!
//! ```text
//! P(t) = tension * (c0*p0 + c1*p1 + c2*p2 + c3*p3)
//! c0 = -t³ + 2t² - t
//! c1 = 3t³ - 5t² + 2
//! c2 = -3t³ + 4t² + t
//! c3 = t³ - t²
//! ```

use glam::Vec3;

/// Position on the segment at `t` (clamped to [0, 1])
#[inline]
pub fn catmull_rom_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32, tension: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let t2 = t * t;
    let t3 = t2 * t;

    let c0 = -t3 + 2.0 * t2 - t;
    let c1 = 3.0 * t3 - 5.0 * t2 + 2.0;
    let c2 = -3.0 * t3 + 4.0 * t2 + t;
    let c3 = t3 - t2;

    tension * (c0 * p0 + c1 * p1 + c2 * p2 + c3 * p3)
}

/// Derivative dP/dt at `t` (clamped to [0, 1]), not normalized
#[inline]
pub fn catmull_rom_tangent(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32, tension: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let t2 = t * t;

    let c0 = -3.0 * t2 + 4.0 * t - 1.0;
    let c1 = 9.0 * t2 - 10.0 * t;
    let c2 = -9.0 * t2 + 8.0 * t + 1.0;
    let c3 = 3.0 * t2 - 2.0 * t;

    tension * (c0 * p0 + c1 * p1 + c2 * p2 + c3 * p3)
}
