//! Pairwise Newtonian gravity
//!
//! `Body::force_from` is the two-body force law; `pairwise_forces` sums it
//! over every unordered pair of a flattened body list, reusing each pair's
//! force for both bodies (Newton's third law)

use std::borrow::Borrow;

use crate::simulation::params::{GRAVITATIONAL_CONSTANT, SINGULARITY_R2};
use crate::simulation::states::{Body, NVec2};

impl Body {
    /// Gravitational force `other` exerts on `self`, pointing from self toward other.
    /// Near-coincident bodies (r^2 < 1e-10) exert exactly zero force.
    pub fn force_from(&self, other: &Body) -> NVec2 {
        // r points from self to other
        let r = other.x - self.x;
        let r2 = r.dot(&r);
        if r2 < SINGULARITY_R2 {
            return NVec2::zeros();
        }

        // F = G m1 m2 / r^2, split along r / |r|
        let f = GRAVITATIONAL_CONSTANT * self.m * other.m / r2;
        let inv_r = r2.sqrt().recip();
        r * (f * inv_r)
    }
}

/// Total gravitational force on each body in `bodies`
///
/// Each unordered pair (i, j) with i < j is evaluated once:
/// body i gets `+f`, body j gets `-f`. Returns one force per body,
/// in input order. Fewer than two bodies yields all zeros.
pub fn pairwise_forces<B: Borrow<Body>>(bodies: &[B]) -> Vec<NVec2> {
    let n = bodies.len();
    let mut out = vec![NVec2::zeros(); n];
    if n < 2 {
        return out;
    }

    for i in 0..n {
        let bi: &Body = bodies[i].borrow();
        for j in (i + 1)..n {
            let bj: &Body = bodies[j].borrow();
            let f = bi.force_from(bj);
            out[i] += f;
            out[j] -= f;
        }
    }

    out
}
