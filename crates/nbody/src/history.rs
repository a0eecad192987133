//! Recorded body positions, one snapshot per completed step.
//!
//! History is the only thing a run hands to plotting or animation code.
//! It serializes as nested arrays: `[[[x, y], ...], ...]`.

use std::io::Write;

use nalgebra::Point2;
use serde::Serialize;

use crate::error::NbodyError;
use crate::state::SystemState;

/// Positions of every body at one instant, in body order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    positions: Vec<Point2<f64>>,
}

impl Snapshot {
    pub fn capture(state: &SystemState) -> Self {
        Self {
            positions: state.positions(),
        }
    }

    pub fn positions(&self) -> &[Point2<f64>] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Append-only sequence of snapshots
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history with room for `steps` snapshots
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(steps),
        }
    }

    /// Appends the current positions of `state`
    pub fn record(&mut self, state: &SystemState) {
        self.snapshots.push(Snapshot::capture(state));
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Path of one body across all snapshots
    ///
    /// Returns `None` if `body` is out of range for a recorded snapshot. An
    /// empty history has no body count to check against and yields an empty
    /// path for any index.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::history::History;
    /// use nbody::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let system = SystemState::new(vec![
    ///     Body::new(1.0, Point2::new(3.0, 4.0), Vector2::zeros()).unwrap(),
    /// ]);
    /// let mut history = History::new();
    /// history.record(&system);
    /// history.record(&system);
    ///
    /// let path = history.trajectory(0).unwrap();
    /// assert_eq!(path, vec![Point2::new(3.0, 4.0); 2]);
    /// assert!(history.trajectory(1).is_none());
    /// ```
    pub fn trajectory(&self, body: usize) -> Option<Vec<Point2<f64>>> {
        self.snapshots
            .iter()
            .map(|snapshot| snapshot.positions.get(body).copied())
            .collect()
    }

    /// Writes the history as JSON
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), NbodyError> {
        serde_json::to_writer(writer, self).map_err(|e| {
            if e.is_io() {
                NbodyError::Io(e.into())
            } else {
                NbodyError::Parse(e)
            }
        })
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
