//! Direct pairwise gravity (O(N²), each unordered pair visited once)

use crate::body::Body;
use crate::forces::{Singularity, DEFAULT_MIN_SEPARATION};
use crate::state::SystemState;
use nalgebra::Vector2;

/// Body count at which the `parallel` feature switches to rayon
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 64;

/// Newtonian gravity between every pair of bodies
///
/// For a pair `(i, j)` with `i < j` the force magnitude `G mᵢ mⱼ / r²` is
/// computed once and applied with opposite signs to both bodies, so total
/// momentum is unchanged by construction.
///
/// With a non-zero softening length `ε`, `r²` is replaced by `|d|² + ε²`
/// (Plummer softening), which keeps close encounters finite.
///
/// A pair whose effective separation drops below `min_separation` is
/// reported as a [`Singularity`] instead of producing an enormous but finite
/// kick.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::PairwiseGravity;
/// use nbody::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(vec![
///     Body::new(1.0, Point2::new(-1.0, 0.0), Vector2::zeros()).unwrap(),
///     Body::new(1.0, Point2::new(1.0, 0.0), Vector2::zeros()).unwrap(),
/// ]);
///
/// let gravity = PairwiseGravity::new(1.0);
/// gravity.accumulate(&mut system).unwrap();
///
/// // Each body is pulled toward the other
/// assert!(system.bodies()[0].acceleration().x > 0.0);
/// assert!(system.bodies()[1].acceleration().x < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseGravity {
    /// Gravitational constant
    pub g: f64,
    /// Softening length; 0 means pure Newtonian gravity
    pub softening: f64,
    /// Smallest effective separation treated as regular
    pub min_separation: f64,
}

impl PairwiseGravity {
    /// Creates unsoftened gravity with constant `g`
    pub fn new(g: f64) -> Self {
        Self::with_softening(g, 0.0)
    }

    /// Creates gravity with a softening length
    ///
    /// ```
    /// use nbody::forces::PairwiseGravity;
    ///
    /// let gravity = PairwiseGravity::with_softening(1.0, 0.01);
    /// assert_eq!(gravity.softening, 0.01);
    /// ```
    pub fn with_softening(g: f64, softening: f64) -> Self {
        Self {
            g,
            softening,
            min_separation: DEFAULT_MIN_SEPARATION,
        }
    }

    /// Replaces the singularity threshold
    pub fn with_min_separation(self, min_separation: f64) -> Self {
        Self {
            min_separation,
            ..self
        }
    }

    /// Adds the net gravitational acceleration of every body into its
    /// accumulator
    ///
    /// Accumulators are not reset here. On error the accumulators may hold a
    /// partial sum, but positions and velocities are untouched.
    ///
    /// # Errors
    ///
    /// A [`Singularity`] for the lowest `(i, j)` pair, in lexicographic order,
    /// whose separation is below `min_separation` or whose contribution
    /// overflows. The serial and parallel paths report the same pair.
    pub fn accumulate(&self, state: &mut SystemState) -> Result<(), Singularity> {
        #[cfg(feature = "parallel")]
        if state.body_count() >= PARALLEL_THRESHOLD {
            return self.accumulate_parallel(state);
        }

        self.accumulate_serial(state)
    }

    pub(crate) fn accumulate_serial(&self, state: &mut SystemState) -> Result<(), Singularity> {
        let bodies = state.bodies_mut();

        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let body_i = &mut head[i];

            for (offset, body_j) in tail.iter_mut().enumerate() {
                let j = i + 1 + offset;
                let (on_i, on_j) = self.pair_accelerations(i, j, body_i, body_j)?;
                body_i.acceleration += on_i;
                body_j.acceleration += on_j;
            }
        }

        Ok(())
    }

    /// Pair loop split across rayon tasks
    ///
    /// Each task folds into its own buffer; buffers are summed afterwards and
    /// only then added to the bodies. A task stops at its first singular
    /// pair and the reduction keeps the lowest one.
    #[cfg(feature = "parallel")]
    pub(crate) fn accumulate_parallel(&self, state: &mut SystemState) -> Result<(), Singularity> {
        use rayon::prelude::*;

        let bodies = state.bodies();
        let n = bodies.len();

        let totals = (0..n)
            .into_par_iter()
            .fold(
                || Ok(vec![Vector2::zeros(); n]),
                |acc: Result<Vec<Vector2<f64>>, Singularity>, i| {
                    let mut acc = acc?;
                    for j in (i + 1)..n {
                        let (on_i, on_j) = self.pair_accelerations(i, j, &bodies[i], &bodies[j])?;
                        acc[i] += on_i;
                        acc[j] += on_j;
                    }
                    Ok(acc)
                },
            )
            .reduce(
                || Ok(vec![Vector2::zeros(); n]),
                |left, right| match (left, right) {
                    (Ok(mut left), Ok(right)) => {
                        left.iter_mut().zip(right).for_each(|(l, r)| *l += r);
                        Ok(left)
                    }
                    (Err(a), Err(b)) => Err(if (b.first, b.second) < (a.first, a.second) { b } else { a }),
                    (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
                },
            )?;

        state
            .bodies_mut()
            .iter_mut()
            .zip(totals)
            .for_each(|(body, accel)| body.acceleration += accel);

        Ok(())
    }

    /// Accelerations of `a` and `b` due to each other
    fn pair_accelerations(
        &self,
        i: usize,
        j: usize,
        a: &Body,
        b: &Body,
    ) -> Result<(Vector2<f64>, Vector2<f64>), Singularity> {
        let d = b.position - a.position;
        let r2 = d.magnitude_squared() + self.softening * self.softening;
        let r = r2.sqrt();

        let singular = Singularity {
            first: i,
            second: j,
            separation: r,
        };
        if r.is_nan() || r < self.min_separation {
            return Err(singular);
        }

        let force = self.g * a.mass * b.mass / r2;
        let unit = d / r;
        let on_a = unit * (force / a.mass);
        let on_b = -unit * (force / b.mass);

        if on_a.iter().chain(on_b.iter()).all(|c| c.is_finite()) {
            Ok((on_a, on_b))
        } else {
            Err(singular)
        }
    }

    /// Total gravitational potential energy, each pair counted once
    pub fn potential_energy(&self, state: &SystemState) -> f64 {
        let eps2 = self.softening * self.softening;
        let bodies = state.bodies();

        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().map(move |b| {
                    let r = ((a.position - b.position).magnitude_squared() + eps2).sqrt();
                    -self.g * a.mass * b.mass / r
                })
            })
            .sum()
    }
}
