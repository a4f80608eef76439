//! Top of the catalog hierarchy
//!
//! A `Universe` exclusively owns every supercluster and everything below it
//! for the lifetime of one run. The run loop lives in [`crate::simulation::engine`].

use crate::simulation::hierarchy::SuperCluster;
use crate::simulation::params::{GRAVITATIONAL_CONSTANT, PLANCK_CONSTANT, SPEED_OF_LIGHT};
use crate::simulation::star_system::StarSystem;
use crate::simulation::states::Body;

#[derive(Debug, Clone, Default)]
pub struct Universe {
    pub superclusters: Vec<SuperCluster>,
}

impl Universe {
    /// Speed of light (m/s)
    pub const C: f64 = SPEED_OF_LIGHT;
    /// Gravitational constant (N m^2 / kg^2)
    pub const G: f64 = GRAVITATIONAL_CONSTANT;
    /// Planck constant (J s)
    pub const H: f64 = PLANCK_CONSTANT;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_supercluster(&mut self, supercluster: SuperCluster) {
        self.superclusters.push(supercluster);
    }

    /// Every reachable star system, in declaration order
    pub fn star_systems(&self) -> impl Iterator<Item = &StarSystem> {
        self.superclusters
            .iter()
            .flat_map(|sc| sc.galaxy_clusters.iter())
            .flat_map(|gc| gc.galaxies.iter())
            .flat_map(|g| g.star_systems.iter())
    }

    pub fn star_systems_mut(&mut self) -> impl Iterator<Item = &mut StarSystem> {
        self.superclusters
            .iter_mut()
            .flat_map(|sc| sc.galaxy_clusters.iter_mut())
            .flat_map(|gc| gc.galaxies.iter_mut())
            .flat_map(|g| g.star_systems.iter_mut())
    }

    /// Look up a simulated body by name across all star systems
    pub fn find_body(&self, name: &str) -> Option<&Body> {
        self.star_systems()
            .flat_map(|ss| ss.bodies())
            .find(|b| b.name == name)
    }
}
