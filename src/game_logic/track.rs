use crate::canvas::{LineJoin, Painter, Stroke};
use crate::game_logic::{ROAD_WIDTH, START_LINE_WIDTH};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const HEXAGON_TRACK: &str = include_str!("../../assets/tracks/hexagon.json");

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("malformed track data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("track path needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("track must require at least one lap")]
    NoLaps,
    #[error("start line endpoints must differ")]
    DegenerateStartLine,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Vec2 {
    fn from(point: Point) -> Self {
        Vec2::new(point.x, point.y)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct StartLineData {
    pub a: Point,
    pub b: Point,
}

/// Authoring format of a track
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrackData {
    pub laps: u32,
    pub start_line: StartLineData,
    pub path: Vec<Point>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StartLine {
    pub a: Vec2,
    pub b: Vec2,
}

impl StartLine {
    /// Which side of the infinite line through a and b the point is on.
    /// Positive is one side, negative the other, zero exactly on it.
    pub fn side(&self, point: Vec2) -> f32 {
        let (a, b) = (self.a, self.b);
        (point.x - a.x) * (b.y - a.y) - (point.y - a.y) * (b.x - a.x)
    }
}

/// A closed circuit. Immutable once built.
#[derive(Clone, Debug)]
pub struct Track {
    pub path: Vec<Vec2>,
    pub start_line: StartLine,
    pub laps: u32,
}

impl Track {
    pub fn new(data: TrackData) -> Result<Self, TrackError> {
        if data.path.len() < 3 {
            return Err(TrackError::TooFewPoints(data.path.len()));
        }
        if data.laps == 0 {
            return Err(TrackError::NoLaps);
        }
        let start_line = StartLine {
            a: data.start_line.a.into(),
            b: data.start_line.b.into(),
        };
        if start_line.a.distance_squared(start_line.b) <= f32::EPSILON {
            return Err(TrackError::DegenerateStartLine);
        }

        Ok(Self {
            path: data.path.into_iter().map(Vec2::from).collect(),
            start_line,
            laps: data.laps,
        })
    }

    pub fn from_json(source: &str) -> Result<Self, TrackError> {
        let data: TrackData = serde_json::from_str(source)?;
        Self::new(data)
    }

    /// The built-in hexagonal circuit
    pub fn hexagon() -> Result<Self, TrackError> {
        Self::from_json(HEXAGON_TRACK)
    }

    /// Distance from the point to the nearest edge of the closed path
    pub fn distance_to_path(&self, point: Vec2) -> f32 {
        let count = self.path.len();
        (0..count)
            .map(|i| distance_to_segment(point, self.path[i], self.path[(i + 1) % count]))
            .fold(f32::INFINITY, f32::min)
    }

    /// Whether the point lies on the drawn road surface
    pub fn is_on_road(&self, point: Vec2) -> bool {
        self.distance_to_path(point) <= ROAD_WIDTH / 2.0
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        let road = Stroke::new(ROAD_WIDTH, Color::srgb_u8(0x55, 0x55, 0x55))
            .with_join(LineJoin::Round);
        painter.stroke_path(&self.path, true, &road);

        let marking = Stroke::new(START_LINE_WIDTH, Color::WHITE);
        painter.stroke_line(self.start_line.a, self.start_line.b, &marking);
    }
}

fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let along = b - a;
    let t = ((point - a).dot(along) / along.length_squared()).clamp(0.0, 1.0);
    point.distance(a + along * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};

    #[test]
    fn test_hexagon_loads() {
        let track = Track::hexagon().unwrap();
        assert_eq!(track.laps, 3);
        assert_eq!(track.path.len(), 6);
        assert_eq!(track.path[0], Vec2::new(0.0, -300.0));
        assert_eq!(track.start_line.a, Vec2::new(0.0, -200.0));
        assert_eq!(track.start_line.b, Vec2::new(0.0, -120.0));
    }

    #[test]
    fn test_rejects_bad_data() {
        let err = Track::from_json(r#"{"laps": 3, "start_line": {}}"#).unwrap_err();
        assert!(matches!(err, TrackError::Parse(_)));

        let two_points = r#"{
            "laps": 1,
            "start_line": {"a": {"x": 0, "y": 0}, "b": {"x": 0, "y": 1}},
            "path": [{"x": 0, "y": 0}, {"x": 1, "y": 1}]
        }"#;
        assert!(matches!(Track::from_json(two_points), Err(TrackError::TooFewPoints(2))));

        let no_laps = r#"{
            "laps": 0,
            "start_line": {"a": {"x": 0, "y": 0}, "b": {"x": 0, "y": 1}},
            "path": [{"x": 0, "y": 0}, {"x": 1, "y": 1}, {"x": 2, "y": 0}]
        }"#;
        assert!(matches!(Track::from_json(no_laps), Err(TrackError::NoLaps)));

        let point_line = r#"{
            "laps": 2,
            "start_line": {"a": {"x": 5, "y": 5}, "b": {"x": 5, "y": 5}},
            "path": [{"x": 0, "y": 0}, {"x": 1, "y": 1}, {"x": 2, "y": 0}]
        }"#;
        assert!(matches!(Track::from_json(point_line), Err(TrackError::DegenerateStartLine)));
    }

    #[test]
    fn test_start_line_side() {
        let line = Track::hexagon().unwrap().start_line;
        // line runs down the y axis, so the side only depends on x
        assert!(line.side(Vec2::new(10.0, -250.0)) > 0.0);
        assert!(line.side(Vec2::new(-10.0, 1000.0)) < 0.0);
        assert_eq!(line.side(Vec2::new(0.0, 42.0)), 0.0);
    }

    #[test]
    fn test_road_surface() {
        let track = Track::hexagon().unwrap();
        // top edge runs (0, -300) -> (400, -200)
        assert!(track.distance_to_path(Vec2::new(0.0, -300.0)) < 1e-4);
        assert!(track.is_on_road(Vec2::new(0.0, -285.0)));
        assert!(track.is_on_road(Vec2::new(-400.0, 0.0)));
        // the start segment itself sits in the infield
        assert!(!track.is_on_road(Vec2::new(0.0, -160.0)));
        assert!(!track.is_on_road(Vec2::ZERO));
    }

    #[test]
    fn test_draw_road_then_start_line() {
        let track = Track::hexagon().unwrap();
        let mut list = DrawList::new();
        track.draw(&mut list);

        assert_eq!(list.commands().len(), 2);
        match &list.commands()[0] {
            DrawCommand::Stroke { points, closed, width, join, .. } => {
                assert_eq!(points.len(), 6);
                assert!(*closed);
                assert_eq!(*width, 40.0);
                assert_eq!(*join, LineJoin::Round);
            }
            other => panic!("expected the road stroke, got {other:?}"),
        }
        match &list.commands()[1] {
            DrawCommand::Stroke { points, closed, width, color, .. } => {
                assert_eq!(points, &vec![Vec2::new(0.0, -200.0), Vec2::new(0.0, -120.0)]);
                assert!(!*closed);
                assert_eq!(*width, 5.0);
                assert_eq!(*color, Color::WHITE);
            }
            other => panic!("expected the start line, got {other:?}"),
        }
    }
}
