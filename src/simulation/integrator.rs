//! Explicit Euler state update
//!
//! Velocity is advanced from the current force first, then position is
//! advanced with the new velocity. `dt` is taken as given, no substepping.

use super::states::{Body, NVec2};

impl Body {
    /// Advance this body by one step under `force` (N) over `dt` (s).
    /// Bodies with mass <= 0 are treated as fixed and left untouched.
    pub fn update(&mut self, force: NVec2, dt: f64) {
        if self.is_fixed() {
            return;
        }

        // a = F / m
        let a = force / self.m;

        // v_n+1 = v_n + a dt
        self.v += a * dt;

        // x_n+1 = x_n + v_n+1 dt
        self.x += self.v * dt;
    }
}

/// Apply `forces[i]` to `bodies[i]` for every body
pub fn euler_step(bodies: &mut [&mut Body], forces: &[NVec2], dt: f64) {
    for (b, f) in bodies.iter_mut().zip(forces.iter()) {
        b.update(*f, dt);
    }
}
