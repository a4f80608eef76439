//! Random quantum spin measurements
//!
//! Observational only: an event picks a star system by walking the hierarchy
//! at random and records a spin for its primary. Nothing dynamical changes.

use std::fmt;

use rand::Rng;

use crate::simulation::universe::Universe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Up,
    Down,
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spin::Up => f.write_str("up"),
            Spin::Down => f.write_str("down"),
        }
    }
}

/// Source of randomness for quantum events
///
/// Implemented for every `rand::Rng`; tests can supply a scripted source.
pub trait EventSource {
    /// Uniform index in `0..len`, `None` when `len == 0`
    fn pick(&mut self, len: usize) -> Option<usize>;
    /// Fair coin between up and down
    fn spin(&mut self) -> Spin;
}

impl<R: Rng> EventSource for R {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.gen_range(0..len))
    }

    fn spin(&mut self) -> Spin {
        if self.gen_bool(0.5) {
            Spin::Up
        } else {
            Spin::Down
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuantumEvent {
    pub step: u32,
    pub system: String,
    pub primary: String, // body the measurement is attributed to
    pub spin: Spin,
}

fn choose<'a, T, S: EventSource + ?Sized>(source: &mut S, items: &'a [T]) -> Option<&'a T> {
    let i = source.pick(items.len())?;
    items.get(i)
}

/// Walk supercluster → galaxy cluster → galaxy → star system at random.
/// Returns `None` at the first empty level.
pub fn measure<S: EventSource + ?Sized>(
    universe: &Universe,
    source: &mut S,
    step: u32,
) -> Option<QuantumEvent> {
    let sc = choose(source, &universe.superclusters)?;
    let gc = choose(source, &sc.galaxy_clusters)?;
    let galaxy = choose(source, &gc.galaxies)?;
    let system = choose(source, &galaxy.star_systems)?;

    Some(QuantumEvent {
        step,
        system: system.name.clone(),
        primary: system.primary().name.clone(),
        spin: source.spin(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::hierarchy::{Galaxy, GalaxyCluster, SuperCluster};
    use crate::simulation::star_system::StarSystem;
    use crate::simulation::states::{Body, BodyRole, NVec2};
    use std::collections::VecDeque;

    /// Replays fixed picks and spins
    struct Scripted {
        picks: VecDeque<usize>,
        spins: VecDeque<Spin>,
    }

    impl EventSource for Scripted {
        fn pick(&mut self, len: usize) -> Option<usize> {
            if len == 0 {
                return None;
            }
            self.picks.pop_front()
        }

        fn spin(&mut self) -> Spin {
            self.spins.pop_front().unwrap_or(Spin::Down)
        }
    }

    fn system(name: &str, star: &str) -> StarSystem {
        let primary = Body::at_rest(star, BodyRole::Star, 1.0e30, NVec2::zeros());
        StarSystem::new(name, primary).unwrap()
    }

    fn universe_with_two_systems() -> Universe {
        let mut galaxy = Galaxy::new("g");
        galaxy.add_star_system(system("alpha", "alpha-star"));
        galaxy.add_star_system(system("beta", "beta-star"));
        let mut gc = GalaxyCluster::new("gc");
        gc.add_galaxy(galaxy);
        let mut sc = SuperCluster::new("sc");
        sc.add_galaxy_cluster(gc);
        let mut u = Universe::new();
        u.add_supercluster(sc);
        u
    }

    #[test]
    fn scripted_source_selects_system_and_spin() {
        let u = universe_with_two_systems();
        let mut src = Scripted {
            picks: VecDeque::from(vec![0, 0, 0, 1]),
            spins: VecDeque::from(vec![Spin::Up]),
        };

        let ev = measure(&u, &mut src, 4).unwrap();
        assert_eq!(ev.step, 4);
        assert_eq!(ev.system, "beta");
        assert_eq!(ev.primary, "beta-star");
        assert_eq!(ev.spin, Spin::Up);
    }

    #[test]
    fn empty_universe_yields_no_event() {
        let u = Universe::new();
        let mut src = Scripted {
            picks: VecDeque::new(),
            spins: VecDeque::new(),
        };
        assert!(measure(&u, &mut src, 0).is_none());
    }

    #[test]
    fn galaxy_without_systems_yields_no_event() {
        let mut gc = GalaxyCluster::new("gc");
        gc.add_galaxy(Galaxy::new("empty"));
        let mut sc = SuperCluster::new("sc");
        sc.add_galaxy_cluster(gc);
        let mut u = Universe::new();
        u.add_supercluster(sc);

        let mut src = Scripted {
            picks: VecDeque::from(vec![0, 0, 0]),
            spins: VecDeque::new(),
        };
        assert!(measure(&u, &mut src, 2).is_none());
    }

    #[test]
    fn out_of_range_pick_is_skipped() {
        let u = universe_with_two_systems();
        let mut src = Scripted {
            picks: VecDeque::from(vec![0, 0, 0, 7]),
            spins: VecDeque::new(),
        };
        assert!(measure(&u, &mut src, 0).is_none());
    }

    #[test]
    fn spin_displays_as_up_or_down() {
        assert_eq!(Spin::Up.to_string(), "up");
        assert_eq!(Spin::Down.to_string(), "down");
    }
}
