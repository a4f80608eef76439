//! Catalog containers above the star system level
//!
//! `SuperCluster` → `GalaxyCluster` → `Galaxy` → `StarSystem`.
//! A galaxy keeps its simulated star systems apart from its descriptive
//! entities (nebulae, globular clusters, quasar, central black hole), which
//! are snapshot data and never integrated.

use serde::Deserialize;

use crate::simulation::star_system::StarSystem;
use crate::simulation::states::{Body, NVec2};

/// Solar mass (kg), used for catalog defaults
pub const SOLAR_MASS: f64 = 1.989e30;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NebulaKind {
    #[default]
    Emission,
    Reflection,
    Dark,
    Planetary,
    Supernova,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Nebula {
    pub name: String,
    pub kind: NebulaKind,
    pub mass: f64, // kg
    pub x: NVec2, // position (m)
    pub size: f64, // m
}

impl Nebula {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NebulaKind::default(),
            mass: 1e31,
            x: NVec2::zeros(),
            size: 1e16,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobularCluster {
    pub name: String,
    pub star_count: u64,
    pub mass: f64, // kg
    pub x: NVec2, // position (m)
}

impl GlobularCluster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            star_count: 100_000,
            mass: 1e35,
            x: NVec2::zeros(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quasar {
    pub name: String,
    pub luminosity: f64, // W
    pub central_black_hole_mass: f64, // kg
    pub x: NVec2, // position (m)
}

impl Quasar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            luminosity: 1e40,
            central_black_hole_mass: 1e9 * SOLAR_MASS,
            x: NVec2::zeros(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Galaxy {
    pub name: String,
    pub star_systems: Vec<StarSystem>, // simulated
    pub nebulae: Vec<Nebula>,
    pub globular_clusters: Vec<GlobularCluster>,
    pub quasar: Option<Quasar>,
    pub central_black_hole: Option<Body>,
}

impl Galaxy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_star_system(&mut self, system: StarSystem) {
        self.star_systems.push(system);
    }

    pub fn add_nebula(&mut self, nebula: Nebula) {
        self.nebulae.push(nebula);
    }

    pub fn add_globular_cluster(&mut self, cluster: GlobularCluster) {
        self.globular_clusters.push(cluster);
    }
}

#[derive(Debug, Clone, Default)]
pub struct GalaxyCluster {
    pub name: String,
    pub galaxies: Vec<Galaxy>,
}

impl GalaxyCluster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            galaxies: Vec::new(),
        }
    }

    pub fn add_galaxy(&mut self, galaxy: Galaxy) {
        self.galaxies.push(galaxy);
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuperCluster {
    pub name: String,
    pub galaxy_clusters: Vec<GalaxyCluster>,
}

impl SuperCluster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            galaxy_clusters: Vec::new(),
        }
    }

    pub fn add_galaxy_cluster(&mut self, cluster: GalaxyCluster) {
        self.galaxy_clusters.push(cluster);
    }
}
