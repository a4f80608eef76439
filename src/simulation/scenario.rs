//! Build a validated runtime catalog from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`:
//! - run parameters (`RunParameters`)
//! - the optional seed and perturbation magnitude
//! - the populated `Universe`
//!
//! Everything the run loop relies on is checked here, so a malformed catalog
//! is rejected before the first step rather than discovered mid-run.

use anyhow::{ensure, Context, Result};
use rand::Rng;

use crate::configuration::config::{
    BodyConfig, GalaxyConfig, PrimaryKind, RemnantKind, ScenarioConfig, StarSystemConfig,
};
use crate::simulation::hierarchy::{Galaxy, GalaxyCluster, GlobularCluster, Nebula, Quasar, SuperCluster};
use crate::simulation::params::RunParameters;
use crate::simulation::star_system::StarSystem;
use crate::simulation::states::{Body, BodyRole, NVec2, Planet};
use crate::simulation::universe::Universe;

/// A fully-initialized scenario ready to run
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: RunParameters,
    pub seed: Option<u64>,
    pub perturbation: Option<f64>,
    pub universe: Universe,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self> {
        let run = cfg.run;
        ensure!(run.dt.is_finite() && run.dt > 0.0, "dt must be positive and finite, got {}", run.dt);
        if let Some(p) = run.perturbation {
            ensure!(p.is_finite() && p >= 0.0, "perturbation must be non-negative and finite, got {p}");
        }

        let mut universe = Universe::new();
        for sc_cfg in &cfg.superclusters {
            let mut sc = SuperCluster::new(&sc_cfg.name);
            for gc_cfg in &sc_cfg.galaxy_clusters {
                let mut gc = GalaxyCluster::new(&gc_cfg.name);
                for g_cfg in &gc_cfg.galaxies {
                    let galaxy = build_galaxy(g_cfg).with_context(|| {
                        format!("in supercluster {} / galaxy cluster {}", sc_cfg.name, gc_cfg.name)
                    })?;
                    gc.add_galaxy(galaxy);
                }
                sc.add_galaxy_cluster(gc);
            }
            universe.add_supercluster(sc);
        }

        Ok(Self {
            parameters: RunParameters {
                steps: run.steps,
                dt: run.dt,
            },
            seed: run.seed,
            perturbation: run.perturbation,
            universe,
        })
    }
}

fn vec2(name: &str, field: &str, v: &[f64]) -> Result<NVec2> {
    ensure!(v.len() == 2, "{name}: {field} must have 2 components, got {}", v.len());
    ensure!(v.iter().all(|c| c.is_finite()), "{name}: {field} must be finite, got {v:?}");
    Ok(NVec2::new(v[0], v[1]))
}

fn finite(name: &str, field: &str, v: f64) -> Result<f64> {
    ensure!(v.is_finite(), "{name}: {field} must be finite, got {v}");
    Ok(v)
}

fn mass(name: &str, m: f64) -> Result<f64> {
    ensure!(m.is_finite() && m >= 0.0, "{name}: mass must be non-negative and finite, got {m}");
    Ok(m)
}

// Map `BodyConfig` -> runtime `Body` using nalgebra vectors
fn build_body(bc: &BodyConfig, role: BodyRole) -> Result<Body> {
    let m = mass(&bc.name, bc.m)?;
    let x = vec2(&bc.name, "position", &bc.x)?;
    let v = vec2(&bc.name, "velocity", &bc.v)?;
    Ok(Body::new(&bc.name, role, m, x, v))
}

fn build_star_system(cfg: &StarSystemConfig) -> Result<StarSystem> {
    let role = match cfg.primary.kind {
        PrimaryKind::Star => BodyRole::Star,
        PrimaryKind::BlackHole => BodyRole::BlackHole,
    };
    let mut ss = StarSystem::new(&cfg.name, build_body(&cfg.primary.body, role)?)?;

    for p_cfg in &cfg.planets {
        let b = build_body(&p_cfg.body, BodyRole::Planet)?;
        let mut planet = Planet::new(b.name, b.m, b.x, b.v);
        for m_cfg in &p_cfg.moons {
            // moons are given relative to their planet
            let rel = build_body(m_cfg, BodyRole::Moon)?;
            planet.add_moon(rel.name, rel.m, rel.x, rel.v);
        }
        ss.add_planet(planet);
    }

    for a_cfg in &cfg.asteroids {
        ss.add_asteroid(build_body(a_cfg, BodyRole::Asteroid)?)?;
    }

    for r_cfg in &cfg.stellar_remnants {
        let role = match r_cfg.kind {
            RemnantKind::WhiteDwarf => BodyRole::WhiteDwarf,
            RemnantKind::NeutronStar => BodyRole::NeutronStar,
        };
        ss.add_stellar_remnant(build_body(&r_cfg.body, role)?)?;
    }

    Ok(ss)
}

fn build_galaxy(cfg: &GalaxyConfig) -> Result<Galaxy> {
    let mut galaxy = Galaxy::new(&cfg.name);

    for ss_cfg in &cfg.star_systems {
        let ss = build_star_system(ss_cfg)
            .with_context(|| format!("in galaxy {} / star system {}", cfg.name, ss_cfg.name))?;
        galaxy.add_star_system(ss);
    }

    // Decoration: validated the same way, never simulated
    for n_cfg in &cfg.nebulae {
        galaxy.add_nebula(Nebula {
            name: n_cfg.name.clone(),
            kind: n_cfg.kind,
            mass: mass(&n_cfg.name, n_cfg.mass)?,
            x: vec2(&n_cfg.name, "position", &n_cfg.x)?,
            size: finite(&n_cfg.name, "size", n_cfg.size)?,
        });
    }

    for gc_cfg in &cfg.globular_clusters {
        galaxy.add_globular_cluster(GlobularCluster {
            name: gc_cfg.name.clone(),
            star_count: gc_cfg.star_count,
            mass: mass(&gc_cfg.name, gc_cfg.mass)?,
            x: vec2(&gc_cfg.name, "position", &gc_cfg.x)?,
        });
    }

    if let Some(q) = &cfg.quasar {
        galaxy.quasar = Some(Quasar {
            name: q.name.clone(),
            luminosity: finite(&q.name, "luminosity", q.luminosity)?,
            central_black_hole_mass: mass(&q.name, q.central_black_hole_mass)?,
            x: vec2(&q.name, "position", &q.x)?,
        });
    }

    if let Some(bh) = &cfg.central_black_hole {
        galaxy.central_black_hole = Some(build_body(bh, BodyRole::BlackHole)?);
    }

    Ok(galaxy)
}

/// Jitter every simulated body's position and velocity components:
/// `c <- c * (1 + u1) + u2 * c` with `u1`, `u2` uniform in `[-magnitude, magnitude]`.
/// Moons are jittered as offsets from their planet and re-attached to the
/// jittered planet. Zero components stay zero and decoration is left alone.
///
/// Fails without touching the universe if `magnitude` is negative or not finite.
pub fn perturb<R: Rng>(universe: &mut Universe, magnitude: f64, rng: &mut R) -> Result<()> {
    ensure!(
        magnitude.is_finite() && magnitude >= 0.0,
        "perturbation must be non-negative and finite, got {magnitude}"
    );

    let mut jitter = |c: f64| {
        let u1 = rng.gen_range(-magnitude..=magnitude);
        let u2 = rng.gen_range(-magnitude..=magnitude);
        c * (1.0 + u1) + u2 * c
    };

    for ss in universe.star_systems_mut() {
        ss.jitter(&mut jitter);
    }
    Ok(())
}
