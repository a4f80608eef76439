//! Configuration types for loading catalogs and run settings from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`RunConfig`]        – step count, step size, seed and optional perturbation
//! - [`SuperClusterConfig`] and below – the catalog hierarchy
//!
//! # YAML format
//! A minimal scenario matching these types:
//!
//! ```yaml
//! run:
//!   steps: 6                # number of steps
//!   dt: 86400.0             # step size in seconds
//!   seed: 42                # optional, quantum events and perturbation
//!   perturbation: 1.0e-6    # optional relative jitter of initial conditions
//!
//! superclusters:
//!   - name: Laniakea
//!     galaxy_clusters:
//!       - name: Virgo
//!         galaxies:
//!           - name: MilkyWay
//!             star_systems:
//!               - name: Sol
//!                 primary: { name: Sun, kind: star, m: 1.989e30, x: [0.0, 0.0] }
//!                 planets:
//!                   - name: Earth
//!                     m: 5.972e24
//!                     x: [1.496e11, 0.0]
//!                     v: [0.0, 29780.0]
//!                     moons:              # x and v relative to the planet
//!                       - { name: Moon, m: 7.348e22, x: [3.84e8, 0.0], v: [0.0, 1022.0] }
//! ```
//!
//! [`crate::simulation::scenario::Scenario::build`] validates this and maps it
//! into the runtime catalog.

use serde::Deserialize;

use crate::simulation::hierarchy::{NebulaKind, SOLAR_MASS};
use crate::simulation::params::{DEFAULT_DT, DEFAULT_STEPS};

/// Run settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub steps: u32, // number of integration steps
    pub dt: f64, // step size (s)
    pub seed: Option<u64>, // fixed seed makes quantum events and perturbation reproducible
    pub perturbation: Option<f64>, // relative magnitude of initial-condition jitter
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            dt: DEFAULT_DT,
            seed: None,
            perturbation: None,
        }
    }
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub m: f64, // mass (kg)
    pub x: Vec<f64>, // position [x, y] (m)
    #[serde(default = "zero2")]
    pub v: Vec<f64>, // velocity [vx, vy] (m/s)
}

fn zero2() -> Vec<f64> {
    vec![0.0, 0.0]
}

/// Role of a star system's primary
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryKind {
    Star,
    BlackHole,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PrimaryConfig {
    pub kind: PrimaryKind,
    #[serde(flatten)]
    pub body: BodyConfig,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemnantKind {
    WhiteDwarf,
    NeutronStar,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RemnantConfig {
    pub kind: RemnantKind,
    #[serde(flatten)]
    pub body: BodyConfig,
}

/// Planet with moons; moon `x` and `v` are offsets from the planet
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    #[serde(flatten)]
    pub body: BodyConfig,
    #[serde(default)]
    pub moons: Vec<BodyConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StarSystemConfig {
    pub name: String,
    pub primary: PrimaryConfig,
    #[serde(default)]
    pub planets: Vec<PlanetConfig>,
    #[serde(default)]
    pub asteroids: Vec<BodyConfig>,
    #[serde(default)]
    pub stellar_remnants: Vec<RemnantConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NebulaConfig {
    pub name: String,
    #[serde(default)]
    pub kind: NebulaKind,
    #[serde(default = "default_nebula_mass")]
    pub mass: f64,
    #[serde(default = "zero2")]
    pub x: Vec<f64>,
    #[serde(default = "default_nebula_size")]
    pub size: f64,
}

fn default_nebula_mass() -> f64 {
    1e31
}

fn default_nebula_size() -> f64 {
    1e16
}

#[derive(Deserialize, Debug, Clone)]
pub struct GlobularClusterConfig {
    pub name: String,
    #[serde(default = "default_star_count")]
    pub star_count: u64,
    #[serde(default = "default_globular_mass")]
    pub mass: f64,
    #[serde(default = "zero2")]
    pub x: Vec<f64>,
}

fn default_star_count() -> u64 {
    100_000
}

fn default_globular_mass() -> f64 {
    1e35
}

#[derive(Deserialize, Debug, Clone)]
pub struct QuasarConfig {
    pub name: String,
    #[serde(default = "default_luminosity")]
    pub luminosity: f64,
    #[serde(default = "default_quasar_hole_mass")]
    pub central_black_hole_mass: f64,
    #[serde(default = "zero2")]
    pub x: Vec<f64>,
}

fn default_luminosity() -> f64 {
    1e40
}

fn default_quasar_hole_mass() -> f64 {
    1e9 * SOLAR_MASS
}

#[derive(Deserialize, Debug, Clone)]
pub struct GalaxyConfig {
    pub name: String,
    #[serde(default)]
    pub star_systems: Vec<StarSystemConfig>,
    #[serde(default)]
    pub nebulae: Vec<NebulaConfig>,
    #[serde(default)]
    pub globular_clusters: Vec<GlobularClusterConfig>,
    pub quasar: Option<QuasarConfig>,
    pub central_black_hole: Option<BodyConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GalaxyClusterConfig {
    pub name: String,
    #[serde(default)]
    pub galaxies: Vec<GalaxyConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SuperClusterConfig {
    pub name: String,
    #[serde(default)]
    pub galaxy_clusters: Vec<GalaxyClusterConfig>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub run: RunConfig, // step count, step size, seed
    #[serde(default)]
    pub superclusters: Vec<SuperClusterConfig>, // catalog, outermost level first
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
