//! Physical constants and run parameters
//!
//! The constants are fixed for the lifetime of a run and shared by every
//! force evaluation. `RunParameters` holds the only runtime settings:
//! - number of steps to integrate
//! - step size `dt` in seconds

/// Speed of light (m/s)
pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e8;

/// Gravitational constant (N m^2 / kg^2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Planck constant (J s)
pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;

/// Squared separation below which two bodies exert no force on each other
pub const SINGULARITY_R2: f64 = 1e-10;

pub const DEFAULT_STEPS: u32 = 6;

/// One day
pub const DEFAULT_DT: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParameters {
    pub steps: u32, // number of integration steps
    pub dt: f64, // step size (s)
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            dt: DEFAULT_DT,
        }
    }
}
