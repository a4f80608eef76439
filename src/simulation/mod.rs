pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod star_system;
pub mod hierarchy;
pub mod universe;
pub mod quantum;
pub mod engine;
pub mod scenario;
