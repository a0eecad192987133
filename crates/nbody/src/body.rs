use nalgebra::{Point2, Vector2};

use crate::error::NbodyError;

/// A point mass in the plane
///
/// Fields are only mutated by the force and integrator phases of a step, so
/// outside the crate a body is read through its accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub(crate) mass: f64,
    pub(crate) position: Point2<f64>,
    pub(crate) velocity: Vector2<f64>,
    /// Net acceleration accumulated during the current step
    pub(crate) acceleration: Vector2<f64>,
}

impl Body {
    /// Creates a body at rest in acceleration
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `mass` is not a positive finite number, or if
    /// any position or velocity component is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let body = Body::new(2.0, Point2::new(1.0, 0.0), Vector2::new(0.0, 1.0)).unwrap();
    /// assert_eq!(body.mass(), 2.0);
    /// assert_eq!(body.acceleration(), Vector2::zeros());
    ///
    /// assert!(Body::new(0.0, Point2::origin(), Vector2::zeros()).is_err());
    /// ```
    pub fn new(mass: f64, position: Point2<f64>, velocity: Vector2<f64>) -> Result<Self, NbodyError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(NbodyError::invalid(
                "mass",
                format!("must be positive and finite, got {mass}"),
            ));
        }
        if !(position.x.is_finite() && position.y.is_finite()) {
            return Err(NbodyError::invalid("position", "coordinates must be finite"));
        }
        if !(velocity.x.is_finite() && velocity.y.is_finite()) {
            return Err(NbodyError::invalid("velocity", "components must be finite"));
        }

        Ok(Body {
            mass,
            position,
            velocity,
            acceleration: Vector2::zeros(),
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector2<f64> {
        self.acceleration
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Angular momentum about the origin (z-component, including mass)
    pub fn angular_momentum(&self) -> f64 {
        self.mass * (self.position.x * self.velocity.y - self.position.y * self.velocity.x)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite()) && self.velocity.iter().all(|c| c.is_finite())
    }
}
