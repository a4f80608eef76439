//! A single gravitationally closed star system
//!
//! Owns one primary (star or black hole), its planets with their moons,
//! asteroids and stellar remnants. Systems never interact with each other.

use anyhow::{ensure, Result};

use crate::simulation::forces::pairwise_forces;
use crate::simulation::integrator::euler_step;
use crate::simulation::states::{Body, BodyRole, NVec2, Planet};

#[derive(Debug, Clone)]
pub struct StarSystem {
    pub name: String,
    primary: Body,
    planets: Vec<Planet>,
    asteroids: Vec<Body>,
    stellar_remnants: Vec<Body>,
}

impl StarSystem {
    /// Fails if `primary` is not a star or black hole
    pub fn new(name: impl Into<String>, primary: Body) -> Result<Self> {
        let name = name.into();
        ensure!(
            primary.role.is_primary(),
            "star system {name}: primary {} is a {}, expected a star or black hole",
            primary.name,
            primary.role.name()
        );
        Ok(Self {
            name,
            primary,
            planets: Vec::new(),
            asteroids: Vec::new(),
            stellar_remnants: Vec::new(),
        })
    }

    pub fn primary(&self) -> &Body {
        &self.primary
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn asteroids(&self) -> &[Body] {
        &self.asteroids
    }

    pub fn stellar_remnants(&self) -> &[Body] {
        &self.stellar_remnants
    }

    pub fn add_planet(&mut self, planet: Planet) {
        self.planets.push(planet);
    }

    /// Fails unless `asteroid` has role `Asteroid`
    pub fn add_asteroid(&mut self, asteroid: Body) -> Result<()> {
        ensure!(
            asteroid.role == BodyRole::Asteroid,
            "star system {}: {} is a {}, expected an asteroid",
            self.name,
            asteroid.name,
            asteroid.role.name()
        );
        self.asteroids.push(asteroid);
        Ok(())
    }

    /// Fails unless `remnant` is a white dwarf or neutron star
    pub fn add_stellar_remnant(&mut self, remnant: Body) -> Result<()> {
        ensure!(
            remnant.role.is_remnant(),
            "star system {}: {} is a {}, expected a white dwarf or neutron star",
            self.name,
            remnant.name,
            remnant.role.name()
        );
        self.stellar_remnants.push(remnant);
        Ok(())
    }

    /// Every simulated body in integration order:
    /// primary, planets, asteroids, stellar remnants, then moons planet by planet
    pub fn bodies(&self) -> Vec<&Body> {
        let mut out = Vec::with_capacity(self.body_count());
        out.push(&self.primary);
        out.extend(self.planets.iter().map(|p| &p.body));
        out.extend(self.asteroids.iter());
        out.extend(self.stellar_remnants.iter());
        for p in &self.planets {
            out.extend(p.moons.iter());
        }
        out
    }

    /// Mutable view in the same order as [`StarSystem::bodies`]
    pub fn bodies_mut(&mut self) -> Vec<&mut Body> {
        let n = self.body_count();
        let Self {
            primary,
            planets,
            asteroids,
            stellar_remnants,
            ..
        } = self;

        let mut out = Vec::with_capacity(n);
        let mut moons = Vec::with_capacity(planets.len());
        out.push(primary);
        for Planet { body, moons: m } in planets {
            out.push(body);
            moons.push(m);
        }
        out.extend(asteroids);
        out.extend(stellar_remnants);
        for m in moons {
            out.extend(m);
        }
        out
    }

    pub fn body_count(&self) -> usize {
        1 + self.planets.len()
            + self.asteroids.len()
            + self.stellar_remnants.len()
            + self.planets.iter().map(|p| p.moons.len()).sum::<usize>()
    }

    /// Net internal force on each body for the current state, in [`StarSystem::bodies`] order
    pub fn internal_forces(&self) -> Vec<NVec2> {
        pairwise_forces(&self.bodies())
    }

    /// Apply `jitter` to every position and velocity component.
    /// Moons are jittered relative to their planet.
    pub(crate) fn jitter<F: FnMut(f64) -> f64>(&mut self, mut jitter: F) {
        let Self {
            primary,
            planets,
            asteroids,
            stellar_remnants,
            ..
        } = self;

        for b in std::iter::once(primary).chain(asteroids.iter_mut()).chain(stellar_remnants.iter_mut()) {
            b.x = b.x.map(&mut jitter);
            b.v = b.v.map(&mut jitter);
        }
        for planet in planets {
            planet.jitter(&mut jitter);
        }
    }

    /// Advance every body by one explicit Euler step of `dt` seconds.
    /// A system with fewer than two bodies is left untouched.
    pub fn integrate(&mut self, dt: f64) {
        let mut bodies = self.bodies_mut();
        if bodies.len() < 2 {
            return;
        }

        // All forces are summed before any body moves
        let forces = pairwise_forces(&bodies);
        euler_step(&mut bodies, &forces, dt);
    }
}
