//! Stations and their positions.

use super::StationId;

/// A point in 3-D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    ///
    /// ```
    /// use subway_planner::domain::Position;
    ///
    /// let a = Position::new(0.0, 0.0, 0.0);
    /// let b = Position::new(3.0, 4.0, 0.0);
    /// assert_eq!(a.distance_to(&b), 5.0);
    /// ```
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A station: a named node of the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub position: Position,
}

impl Station {
    pub fn new(id: impl Into<StationId>, name: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
        }
    }

    /// Straight-line distance between two stations.
    pub fn distance_to(&self, other: &Station) -> f64 {
        self.position.distance_to(&other.position)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn position() -> impl Strategy<Value = Position> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0, -1000.0f64..1000.0)
            .prop_map(|(x, y, z)| Position::new(x, y, z))
    }

    proptest! {
        /// Distance is symmetric
        #[test]
        fn symmetric(a in position(), b in position()) {
            prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
        }

        /// Distance is never negative
        #[test]
        fn non_negative(a in position(), b in position()) {
            prop_assert!(a.distance_to(&b) >= 0.0);
        }

        /// Triangle inequality holds (up to rounding)
        #[test]
        fn triangle_inequality(a in position(), b in position(), c in position()) {
            let direct = a.distance_to(&c);
            let via = a.distance_to(&b) + b.distance_to(&c);
            prop_assert!(direct <= via + 1e-9 * via.max(1.0));
        }
    }
}
