//! Run loop
//!
//! Each step integrates every reachable star system in declaration order,
//! then on even steps attempts one quantum event. Systems do not interact.

use log::{debug, info};

use crate::simulation::params::RunParameters;
use crate::simulation::quantum::{measure, EventSource, QuantumEvent};
use crate::simulation::universe::Universe;

/// What a run did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub steps: u32,
    pub integrations: usize, // StarSystem::integrate calls
    pub quantum_attempts: usize,
    pub events: Vec<QuantumEvent>, // successful measurements, in step order
}

impl Universe {
    /// Propagate for `steps` steps of `dt` seconds.
    /// `source` drives the quantum events only; it never touches body state.
    pub fn run<S: EventSource + ?Sized>(&mut self, steps: u32, dt: f64, source: &mut S) -> RunReport {
        let mut report = RunReport {
            steps,
            ..Default::default()
        };
        info!("running universe simulation for {steps} steps (dt = {dt} s)");

        for k in 0..steps {
            let mut integrated = 0;
            for ss in self.star_systems_mut() {
                ss.integrate(dt);
                integrated += 1;
            }
            report.integrations += integrated;
            debug!("[step {k:02}] integrated {integrated} star systems");

            if k % 2 == 0 {
                report.quantum_attempts += 1;
                match measure(self, source, k) {
                    Some(ev) => {
                        info!("[step {k:02}] quantum spin measurement on {}: {}", ev.primary, ev.spin);
                        report.events.push(ev);
                    }
                    None => debug!("[step {k:02}] quantum event skipped: no star system reached"),
                }
            }
        }

        info!(
            "simulation complete: {} integrations, {} quantum events",
            report.integrations,
            report.events.len()
        );
        report
    }

    /// [`Universe::run`] with a [`RunParameters`] bundle
    pub fn run_with<S: EventSource + ?Sized>(&mut self, params: &RunParameters, source: &mut S) -> RunReport {
        self.run(params.steps, params.dt, source)
    }
}
