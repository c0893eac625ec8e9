//! Phantom endpoint extension
//!
//! Catmull-Rom needs a neighbor on each side of a segment. The first and last
//! real segments get one by reflecting the second (or second-to-last) waypoint
//! through the endpoint.

use glam::Vec3;

use super::error::FlightPathError;

/// Extend `waypoints` with one extrapolated point at each end.
///
/// Output is `[2*w[0] - w[1], w[0], .., w[n-1], 2*w[n-1] - w[n-2]]`.
pub fn extend_with_phantoms(waypoints: &[Vec3]) -> Result<Vec<Vec3>, FlightPathError> {
    let n = waypoints.len();
    if n < 2 {
        return Err(FlightPathError::TooFewWaypoints { count: n });
    }

    let head = 2.0 * waypoints[0] - waypoints[1];
    let tail = 2.0 * waypoints[n - 1] - waypoints[n - 2];

    let mut extended = Vec::with_capacity(n + 2);
    extended.push(head);
    extended.extend_from_slice(waypoints);
    extended.push(tail);
    Ok(extended)
}
