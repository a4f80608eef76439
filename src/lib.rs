pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, BodyRole, Planet, NVec2};
pub use simulation::forces::pairwise_forces;
pub use simulation::star_system::StarSystem;
pub use simulation::hierarchy::{Galaxy, GalaxyCluster, SuperCluster, Nebula, NebulaKind, GlobularCluster, Quasar};
pub use simulation::universe::Universe;
pub use simulation::quantum::{EventSource, QuantumEvent, Spin};
pub use simulation::engine::RunReport;
pub use simulation::params::RunParameters;
pub use simulation::scenario::{Scenario, perturb};

pub use configuration::config::{ScenarioConfig, RunConfig, BodyConfig};
