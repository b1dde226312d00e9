//! The galaxy: the roster of star systems shown on the galaxy map.

use crate::star_system::StarSystem;
use engine_core::{Color, Vec2};
use rand::prelude::*;

/// Hover/click radius around a system icon on the galaxy map.
pub const SYSTEM_PICK_RADIUS: f32 = 15.0;

/// Blueprint for one system of the galaxy.
#[derive(Debug, Clone, Copy)]
pub struct SystemBlueprint {
    pub name: &'static str,
    pub galaxy_position: Vec2,
    pub star_color: Color,
    pub planet_count: usize,
}

/// The five systems every galaxy starts with.
pub const DEFAULT_ROSTER: [SystemBlueprint; 5] = [
    SystemBlueprint {
        name: "Solara Prime",
        galaxy_position: Vec2::new(150.0, 200.0),
        star_color: Color::YELLOW,
        planet_count: 4,
    },
    SystemBlueprint {
        name: "Cygnus X-1",
        galaxy_position: Vec2::new(600.0, 150.0),
        star_color: Color::BLUE,
        planet_count: 2,
    },
    SystemBlueprint {
        name: "Kepler-186f System",
        galaxy_position: Vec2::new(300.0, 500.0),
        star_color: Color::RED,
        planet_count: 5,
    },
    SystemBlueprint {
        name: "Andromeda Gateway",
        galaxy_position: Vec2::new(700.0, 450.0),
        star_color: Color::WHITE,
        planet_count: 3,
    },
    SystemBlueprint {
        name: "Nebula Core",
        galaxy_position: Vec2::new(450.0, 300.0),
        star_color: Color::PURPLE,
        planet_count: 6,
    },
];

/// All star systems of a run.
#[derive(Debug, Clone)]
pub struct Universe {
    pub systems: Vec<StarSystem>,
}

impl Universe {
    /// Generate the systems described by `blueprints`, in order.
    pub fn generate(blueprints: &[SystemBlueprint], rng: &mut impl Rng) -> Self {
        let systems: Vec<StarSystem> = blueprints
            .iter()
            .map(|bp| StarSystem::generate(bp.name, bp.galaxy_position, bp.star_color, bp.planet_count, rng))
            .collect();

        let planets: usize = systems.iter().map(|s| s.planets.len()).sum();
        log::info!("Generated galaxy: {} systems, {} planets", systems.len(), planets);

        Self { systems }
    }

    /// Generate the default five-system galaxy.
    pub fn default_roster(rng: &mut impl Rng) -> Self {
        Self::generate(&DEFAULT_ROSTER, rng)
    }

    /// First system whose galaxy-map icon is within the pick radius of `point`.
    pub fn system_at(&self, point: Vec2) -> Option<usize> {
        system_at(&self.systems, point)
    }

    pub fn into_systems(self) -> Vec<StarSystem> {
        self.systems
    }
}

/// First system in `systems` whose icon is within the pick radius of `point`.
pub fn system_at(systems: &[StarSystem], point: Vec2) -> Option<usize> {
    systems
        .iter()
        .position(|s| s.galaxy_position.distance(point) < SYSTEM_PICK_RADIUS)
}
