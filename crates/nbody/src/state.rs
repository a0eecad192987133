use crate::body::Body;
use crate::config::BodyRecord;
use crate::error::NbodyError;
use nalgebra::{Point2, Vector2};

/// Complete state of an N-body system at a given time
///
/// The body order is fixed at construction and matches the order of
/// positions in every recorded snapshot.
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Elapsed simulation time
    time: f64,
    bodies: Vec<Body>,
}

impl SystemState {
    /// Creates a system from already-validated bodies
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let sun = Body::new(1.0, Point2::origin(), Vector2::zeros()).unwrap();
    /// let earth = Body::new(3.0e-6, Point2::new(1.0, 0.0), Vector2::new(0.0, 6.28)).unwrap();
    /// let system = SystemState::new(vec![sun, earth]);
    ///
    /// assert_eq!(system.body_count(), 2);
    /// assert_eq!(system.time(), 0.0);
    /// ```
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { time: 0.0, bodies }
    }

    /// Builds bodies from initial-condition records, in record order
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` naming the first invalid record, e.g.
    /// `planets[1].mass`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::config::BodyRecord;
    /// use nbody::state::SystemState;
    ///
    /// let records = [
    ///     BodyRecord { mass: 1.0, x: 0.0, y: 0.0, vx: 0.0, vy: 0.0 },
    ///     BodyRecord { mass: -1.0, x: 1.0, y: 0.0, vx: 0.0, vy: 0.0 },
    /// ];
    ///
    /// let err = SystemState::from_records(&records).unwrap_err();
    /// assert!(err.to_string().contains("planets[1].mass"));
    /// ```
    pub fn from_records(records: &[BodyRecord]) -> Result<Self, NbodyError> {
        let bodies = records
            .iter()
            .enumerate()
            .map(|(i, record)| record.to_body().map_err(|e| e.in_body(i)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(bodies))
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub(crate) fn advance_time(&mut self, dt: f64) {
        self.time += dt;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Zeroes every body's accumulated acceleration
    ///
    /// Called once at the start of every force pass so contributions never
    /// leak from one step into the next.
    pub fn reset_accelerations(&mut self) {
        self.bodies
            .iter_mut()
            .for_each(|body| body.acceleration = Vector2::zeros());
    }

    /// Current positions in body order
    pub fn positions(&self) -> Vec<Point2<f64>> {
        self.bodies.iter().map(|b| b.position).collect()
    }

    /// Index of the first body whose position or velocity is NaN or infinite
    pub fn first_non_finite(&self) -> Option<usize> {
        self.bodies.iter().position(|b| !b.is_finite())
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Returns the total momentum of all bodies
    ///
    /// Gravity alone never changes this, so drift away from the initial
    /// value measures round-off.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Returns the total angular momentum about the origin
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies.iter().map(|b| b.angular_momentum()).sum()
    }

    /// Mass-weighted mean position, or `None` for an empty system
    pub fn center_of_mass(&self) -> Option<Point2<f64>> {
        if self.bodies.is_empty() {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .fold(Vector2::zeros(), |acc, b| acc + b.position.coords * b.mass);
        Some(Point2::from(weighted / self.total_mass()))
    }
}
