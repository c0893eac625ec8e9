//! Cumulative arc-length table
//!
//! Each segment is sampled at `samples` uniform steps of `t` and the chord
//! lengths between consecutive samples are summed. Entry `k` of the table is the
//! distance from the start of the path to global sample `k`:
//!
//! ```text
//! k = segment * samples + j      (t = j / samples)
//! len = segments * samples + 1   (entry 0 is the path start, always 0.0)
//! ```
//!
//! Looking up a distance is a binary search for the bracketing pair of entries,
//! followed by linear interpolation of `t` inside that bracket.

use glam::Vec3;
use serde::Serialize;

use super::error::FlightPathError;
use super::spline::catmull_rom_point;
use crate::consts::{DEGENERATE_SEGMENT_LENGTH, MIN_SAMPLES_PER_SEGMENT};

/// A position on the curve expressed as spline segment + local parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParam {
    /// Segment index (segment `i` uses extended points `i..=i+3`)
    pub segment: usize,
    /// Local parameter in [0, 1]
    pub t: f32,
}

/// Monotonic cumulative distances sampled along the whole curve
#[derive(Debug, Clone, Serialize)]
pub struct ArcLengthTable {
    distances: Vec<f32>,
    samples_per_segment: usize,
}

impl ArcLengthTable {
    /// Sample every segment of a phantom-extended point list
    pub fn build(
        extended: &[Vec3],
        samples_per_segment: usize,
        tension: f32,
    ) -> Result<Self, FlightPathError> {
        if extended.len() < 4 {
            return Err(FlightPathError::TooFewWaypoints {
                count: extended.len().saturating_sub(2),
            });
        }
        if samples_per_segment < MIN_SAMPLES_PER_SEGMENT {
            return Err(FlightPathError::InvalidSampleCount {
                samples: samples_per_segment,
            });
        }

        let segments = extended.len() - 3;
        let mut distances = Vec::with_capacity(segments * samples_per_segment + 1);
        distances.push(0.0);

        let mut total = 0.0_f32;
        for segment in 0..segments {
            let [p0, p1, p2, p3] = [
                extended[segment],
                extended[segment + 1],
                extended[segment + 2],
                extended[segment + 3],
            ];
            let segment_start = total;
            let mut prev = catmull_rom_point(p0, p1, p2, p3, 0.0, tension);

            for j in 1..=samples_per_segment {
                let t = j as f32 / samples_per_segment as f32;
                let point = catmull_rom_point(p0, p1, p2, p3, t, tension);
                total += prev.distance(point);
                distances.push(total);
                prev = point;
            }

            if total - segment_start < DEGENERATE_SEGMENT_LENGTH {
                log::warn!(
                    "Flight path segment {} has zero length (coincident waypoints {:?} -> {:?})",
                    segment,
                    p1,
                    p2
                );
            }
        }

        Ok(Self {
            distances,
            samples_per_segment,
        })
    }

    /// Total sampled length of the curve
    #[inline]
    pub fn total_length(&self) -> f32 {
        self.distances.last().copied().unwrap_or(0.0)
    }

    /// Number of spline segments covered by the table
    pub fn segment_count(&self) -> usize {
        (self.distances.len() - 1) / self.samples_per_segment
    }

    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    /// Raw cumulative distances
    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Map a distance along the curve to a segment and local `t`.
    ///
    /// The distance is clamped to [0, total]. Zero-width brackets (coincident
    /// samples) resolve to the start of the bracket.
    pub fn locate(&self, distance: f32) -> SegmentParam {
        let total = self.total_length();
        let last_segment = self.segment_count() - 1;

        if distance.is_nan() || distance <= 0.0 {
            return SegmentParam { segment: 0, t: 0.0 };
        }
        if distance >= total {
            return SegmentParam {
                segment: last_segment,
                t: 1.0,
            };
        }

        // First entry strictly greater than `distance`. table[0] = 0 < distance and
        // distance < table[last], so 1 <= high <= last.
        let high = self.distances.partition_point(|&d| d <= distance);
        let low = high - 1;

        let span = self.distances[high] - self.distances[low];
        let local_t = if span > 0.0 {
            (distance - self.distances[low]) / span
        } else {
            0.0
        };

        let samples = self.samples_per_segment;
        let segment = low / samples;
        let step = 1.0 / samples as f32;
        let t_start = (low % samples) as f32 * step;
        let t_end = t_start + step;

        SegmentParam {
            segment,
            t: t_start + (t_end - t_start) * local_t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_SAMPLES_PER_SEGMENT, DEFAULT_TENSION};
    use crate::path::phantom::extend_with_phantoms;

    fn table_for(waypoints: &[Vec3], samples: usize) -> ArcLengthTable {
        let extended = extend_with_phantoms(waypoints).unwrap();
        ArcLengthTable::build(&extended, samples, DEFAULT_TENSION).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let table = table_for(
            &[Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), Vec3::new(5.0, 5.0, 0.0)],
            DEFAULT_SAMPLES_PER_SEGMENT,
        );
        assert_eq!(table.segment_count(), 2);
        assert_eq!(table.distances().len(), 2 * DEFAULT_SAMPLES_PER_SEGMENT + 1);
        assert_eq!(table.distances()[0], 0.0);
        assert!(table.distances().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_straight_line_length() {
        let table = table_for(&[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)], 20);
        assert!((table.total_length() - 10.0).abs() < 1e-4);
        // Evenly spaced collinear points sample at exactly 0.5 units
        assert!((table.distances()[1] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_rejects_short_input() {
        let result = ArcLengthTable::build(&[Vec3::ZERO, Vec3::ONE, Vec3::X], 20, 0.5);
        assert!(matches!(
            result,
            Err(FlightPathError::TooFewWaypoints { count: 1 })
        ));
    }

    #[test]
    fn test_rejects_low_sample_count() {
        let extended = extend_with_phantoms(&[Vec3::ZERO, Vec3::X]).unwrap();
        for samples in [0, 1] {
            assert!(matches!(
                ArcLengthTable::build(&extended, samples, 0.5),
                Err(FlightPathError::InvalidSampleCount { .. })
            ));
        }
        assert!(ArcLengthTable::build(&extended, 2, 0.5).is_ok());
    }

    #[test]
    fn test_locate_boundaries() {
        let table = table_for(
            &[Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), Vec3::new(5.0, 5.0, 0.0)],
            20,
        );
        assert_eq!(table.locate(-1.0), SegmentParam { segment: 0, t: 0.0 });
        assert_eq!(table.locate(0.0), SegmentParam { segment: 0, t: 0.0 });
        assert_eq!(
            table.locate(table.total_length()),
            SegmentParam { segment: 1, t: 1.0 }
        );
        assert_eq!(
            table.locate(table.total_length() + 3.0),
            SegmentParam { segment: 1, t: 1.0 }
        );
    }

    #[test]
    fn test_locate_midpoint_of_straight_line() {
        let table = table_for(&[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)], 20);
        let param = table.locate(5.0);
        assert_eq!(param.segment, 0);
        assert!((param.t - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_locate_exact_sample_distance() {
        let table = table_for(&[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)], 20);
        let d = table.distances()[7];
        let param = table.locate(d);
        assert!((param.t - 7.0 / 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_locate_crosses_segments() {
        let table = table_for(
            &[Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), Vec3::new(5.0, 5.0, 0.0)],
            20,
        );
        let first_segment_end = table.distances()[20];
        let before = table.locate(first_segment_end * 0.5);
        let after = table.locate(first_segment_end + 0.25);
        assert_eq!(before.segment, 0);
        assert_eq!(after.segment, 1);
        assert!(after.t > 0.0 && after.t < 1.0);
    }

    #[test]
    fn test_degenerate_segment_tolerated() {
        // Four coincident control points collapse segment 2 to a single point
        let p = Vec3::new(4.0, 0.0, 0.0);
        let table = table_for(&[Vec3::ZERO, p, p, p, p, Vec3::new(8.0, 0.0, 0.0)], 10);
        assert_eq!(table.segment_count(), 5);
        assert!(table.distances().windows(2).all(|w| w[0] <= w[1]));

        let flat = &table.distances()[20..=30];
        assert!(flat[10] - flat[0] < 1e-4);
        assert!(table.total_length() > flat[10]);

        let param = table.locate(flat[0]);
        assert!(param.t.is_finite());
        assert!((2..=3).contains(&param.segment));
    }
}
