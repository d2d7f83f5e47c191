//! Point-to-segment projection and distance
//!
//! A segment is treated two ways: as the infinite line through its endpoints
//! and as the bounded span between them. The projection reports both.

use glam::Vec2;

/// Squared length below which a segment is treated as a single point
const DEGENERATE_LENGTH_SQ: f32 = f32::EPSILON;

/// Result of projecting a point onto a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Closest point on the infinite line through the segment
    pub line_point: Vec2,
    /// Closest point on the bounded segment
    pub segment_point: Vec2,
    /// Whether the line point falls within the segment span
    pub is_on_segment: bool,
}

/// A bounded 2D segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Whether start and end coincide (within f32 epsilon)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start.distance_squared(self.end) <= DEGENERATE_LENGTH_SQ
    }

    /// Project `point` onto this segment
    ///
    /// The line parameter `t` locates the closest point on the infinite line
    /// (0 at `start`, 1 at `end`); clamping it to [0, 1] gives the closest
    /// point on the segment. A degenerate segment projects everything onto
    /// `start` and always reports `is_on_segment`.
    pub fn project(&self, point: Vec2) -> Projection {
        let dir = self.end - self.start;
        let len_sq = dir.length_squared();

        if len_sq <= DEGENERATE_LENGTH_SQ {
            return Projection {
                line_point: self.start,
                segment_point: self.start,
                is_on_segment: true,
            };
        }

        let t_line = (point - self.start).dot(dir) / len_sq;
        let t_segment = t_line.clamp(0.0, 1.0);
        let line_point = self.start + dir * t_line;

        let is_on_segment = t_segment == t_line;
        let segment_point = if is_on_segment {
            line_point
        } else {
            self.start + dir * t_segment
        };

        Projection {
            line_point,
            segment_point,
            is_on_segment,
        }
    }

    /// Distance from `point` to the closest point on the segment
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.project(point).segment_point.distance(point)
    }

    pub fn distance_squared_to(&self, point: Vec2) -> f32 {
        self.project(point).segment_point.distance_squared(point)
    }

    /// Distance to the segment, only when `point` projects inside its span
    ///
    /// Returns `None` when the perpendicular foot lies beyond either endpoint.
    pub fn span_distance_to(&self, point: Vec2) -> Option<f32> {
        let projection = self.project(point);
        projection
            .is_on_segment
            .then(|| projection.segment_point.distance(point))
    }

    pub fn span_distance_squared_to(&self, point: Vec2) -> Option<f32> {
        let projection = self.project(point);
        projection
            .is_on_segment
            .then(|| projection.segment_point.distance_squared(point))
    }
}

/// Distance from `point` to `segment`
///
/// With `only_if_on_segment` set, points whose projection misses the segment
/// span yield `None`; otherwise the result is always `Some`.
pub fn distance_to_segment(
    point: Vec2,
    segment: &Segment,
    only_if_on_segment: bool,
) -> Option<f32> {
    if only_if_on_segment {
        segment.span_distance_to(point)
    } else {
        Some(segment.distance_to(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn horizontal() -> Segment {
        Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0))
    }

    #[test]
    fn test_project_inside_span() {
        let p = horizontal().project(Vec2::new(4.0, 3.0));
        assert!(p.is_on_segment);
        assert!((p.line_point - Vec2::new(4.0, 0.0)).length() < EPS);
        assert_eq!(p.line_point, p.segment_point);
    }

    #[test]
    fn test_project_before_start() {
        let p = horizontal().project(Vec2::new(-5.0, 2.0));
        assert!(!p.is_on_segment);
        assert!((p.line_point - Vec2::new(-5.0, 0.0)).length() < EPS);
        assert_eq!(p.segment_point, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_project_past_end() {
        let p = horizontal().project(Vec2::new(14.0, -1.0));
        assert!(!p.is_on_segment);
        assert!((p.line_point - Vec2::new(14.0, 0.0)).length() < EPS);
        assert_eq!(p.segment_point, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_project_on_endpoints_counts_as_on_segment() {
        let seg = horizontal();
        assert!(seg.project(Vec2::new(0.0, 5.0)).is_on_segment);
        assert!(seg.project(Vec2::new(10.0, 5.0)).is_on_segment);
    }

    #[test]
    fn test_project_degenerate_segment() {
        let seg = Segment::new(Vec2::ZERO, Vec2::ZERO);
        assert!(seg.is_degenerate());
        let p = seg.project(Vec2::new(3.0, 4.0));
        assert_eq!(p.segment_point, Vec2::ZERO);
        assert_eq!(p.line_point, Vec2::ZERO);
        assert!(p.is_on_segment);
        assert!((seg.distance_to(Vec2::new(3.0, 4.0)) - 5.0).abs() < EPS);
        assert_eq!(seg.span_distance_to(Vec2::new(3.0, 4.0)), Some(5.0));
    }

    #[test]
    fn test_distance_above_segment() {
        let d = distance_to_segment(Vec2::new(0.0, 5.0), &horizontal(), false);
        assert_eq!(d, Some(5.0));
        assert_eq!(horizontal().distance_squared_to(Vec2::new(0.0, 5.0)), 25.0);
    }

    #[test]
    fn test_distance_clamps_to_endpoint() {
        let d = horizontal().distance_to(Vec2::new(13.0, 4.0));
        assert!((d - 5.0).abs() < EPS);
        assert_eq!(distance_to_segment(Vec2::new(13.0, 4.0), &horizontal(), false), Some(d));
    }

    #[test]
    fn test_span_distance_not_applicable_before_start() {
        assert_eq!(distance_to_segment(Vec2::new(-5.0, 0.0), &horizontal(), true), None);
        assert_eq!(horizontal().span_distance_squared_to(Vec2::new(-5.0, 0.0)), None);
    }

    #[test]
    fn test_span_distance_inside() {
        let d = horizontal().span_distance_squared_to(Vec2::new(5.0, -2.0));
        assert!((d.unwrap() - 4.0).abs() < EPS);
    }

    #[test]
    fn test_diagonal_projection() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0));
        let p = seg.project(Vec2::new(0.0, 4.0));
        assert!(p.is_on_segment);
        assert!((p.segment_point - Vec2::new(2.0, 2.0)).length() < EPS);
        assert!((seg.length() - 32.0f32.sqrt()).abs() < EPS);
    }
}
