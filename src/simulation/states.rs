//! Core state types for the catalog.
//!
//! Defines the point-mass `Body` and its role tag:
//! - `Body` with position `x`, velocity `v` and mass `m` using `NVec2`
//! - `BodyRole` is a closed set of catalog roles; behavior does not vary by role
//! - `Planet` wraps a body together with the moons it owns

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Catalog role of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRole {
    Star,
    WhiteDwarf,
    NeutronStar,
    BlackHole,
    Moon,
    Asteroid,
    Planet,
}

impl BodyRole {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::WhiteDwarf => "white dwarf",
            Self::NeutronStar => "neutron star",
            Self::BlackHole => "black hole",
            Self::Moon => "moon",
            Self::Asteroid => "asteroid",
            Self::Planet => "planet",
        }
    }

    /// Roles allowed as the primary of a star system
    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Star | Self::BlackHole)
    }

    /// End states of stellar evolution tracked as remnants
    pub fn is_remnant(&self) -> bool {
        matches!(self, Self::WhiteDwarf | Self::NeutronStar)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String, // display only
    pub role: BodyRole,
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
}

impl Body {
    pub fn new(name: impl Into<String>, role: BodyRole, m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            name: name.into(),
            role,
            x,
            v,
            m,
        }
    }

    /// Body at rest at `x`
    pub fn at_rest(name: impl Into<String>, role: BodyRole, m: f64, x: NVec2) -> Self {
        Self::new(name, role, m, x, NVec2::zeros())
    }

    /// Bodies without positive mass are force sources only
    pub fn is_fixed(&self) -> bool {
        self.m <= 0.0
    }
}

/// A planet and the moons it exclusively owns
///
/// Moon order is insertion order and carries no physical meaning.
/// The planet body always has role `Planet` and every moon role `Moon`.
#[derive(Debug, Clone)]
pub struct Planet {
    pub(crate) body: Body,
    pub(crate) moons: Vec<Body>,
}

impl Planet {
    pub fn new(name: impl Into<String>, m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            body: Body::new(name, BodyRole::Planet, m, x, v),
            moons: Vec::new(),
        }
    }

    /// Add a moon given relative to this planet.
    /// The moon's position and velocity are the planet's plus the offsets.
    pub fn add_moon(&mut self, name: impl Into<String>, m: f64, dx: NVec2, dv: NVec2) {
        let moon = Body::new(name, BodyRole::Moon, m, self.body.x + dx, self.body.v + dv);
        self.moons.push(moon);
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn moons(&self) -> &[Body] {
        &self.moons
    }

    /// Apply `jitter` to the planet's components, then to each moon's offset
    /// from the planet's original state. Moons keep following their planet.
    pub(crate) fn jitter<F: FnMut(f64) -> f64>(&mut self, jitter: &mut F) {
        let (x0, v0) = (self.body.x, self.body.v);
        self.body.x = x0.map(&mut *jitter);
        self.body.v = v0.map(&mut *jitter);

        for moon in &mut self.moons {
            let dx = (moon.x - x0).map(&mut *jitter);
            let dv = (moon.v - v0).map(&mut *jitter);
            moon.x = self.body.x + dx;
            moon.v = self.body.v + dv;
        }
    }
}
