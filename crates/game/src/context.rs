//! World state shared by every view: the galaxy roster, the current selection, and the actors.

use crate::character::PlayerCharacter;
use crate::ship::PlayerShip;
use crate::views::{TransitionParams, ViewId};
use procgen::{Planet, Region, StarSystem, Universe};
use rand::prelude::*;

pub struct GameContext {
    /// The galaxy. Built once; only orbit and rotation fields change afterwards.
    pub systems: Vec<StarSystem>,
    pub current_star_system_idx: usize,
    pub current_planet_idx: Option<usize>,
    pub current_region_idx: Option<usize>,
    pub ship: PlayerShip,
    pub character: PlayerCharacter,
    /// Name of the system the star system view was last entered for.
    pub last_visited_system: Option<String>,
    /// Runtime randomness (exhaust, ground levels).
    pub rng: StdRng,
}

impl GameContext {
    pub fn new(systems: Vec<StarSystem>, rng: StdRng) -> Self {
        Self {
            systems,
            current_star_system_idx: 0,
            current_planet_idx: None,
            current_region_idx: None,
            ship: PlayerShip::new(),
            character: PlayerCharacter::new(),
            last_visited_system: None,
            rng,
        }
    }

    /// Build the default galaxy. A seed makes the whole run reproducible.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::info!("Creating star systems...");
        let systems = Universe::default_roster(&mut rng).into_systems();
        log::info!("Star systems created ({} systems)", systems.len());
        Self::new(systems, rng)
    }

    pub fn current_system(&self) -> Option<&StarSystem> {
        self.systems.get(self.current_star_system_idx)
    }

    pub fn current_system_mut(&mut self) -> Option<&mut StarSystem> {
        self.systems.get_mut(self.current_star_system_idx)
    }

    pub fn current_planet(&self) -> Option<&Planet> {
        self.current_system()?.planet(self.current_planet_idx?)
    }

    pub fn current_planet_mut(&mut self) -> Option<&mut Planet> {
        let idx = self.current_planet_idx?;
        self.current_system_mut()?.planet_mut(idx)
    }

    pub fn current_region(&self) -> Option<&Region> {
        self.current_planet()?.region(self.current_region_idx?)
    }

    /// Record the selection a transition carries. Each target consumes only its own index.
    /// System indices outside the roster are ignored; planet and region indices are stored
    /// as given and validated by the view that reads them.
    pub fn apply_transition(&mut self, target: &ViewId, params: &TransitionParams) {
        match target {
            ViewId::StarSystem => {
                if let Some(idx) = params.system_idx {
                    if idx < self.systems.len() {
                        self.current_star_system_idx = idx;
                    } else {
                        log::warn!("Ignoring out-of-range system index {}", idx);
                    }
                }
            }
            ViewId::PlanetOverhead => {
                if let Some(idx) = params.planet_idx {
                    self.current_planet_idx = Some(idx);
                }
            }
            ViewId::Ground => {
                if let Some(idx) = params.region_idx {
                    self.current_region_idx = Some(idx);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> GameContext {
        GameContext::from_seed(Some(5))
    }

    #[test]
    fn starts_at_first_system_without_selection() {
        let ctx = context();
        assert_eq!(ctx.systems.len(), 5);
        assert_eq!(ctx.current_star_system_idx, 0);
        assert_eq!(ctx.current_system().map(|s| s.name.as_str()), Some("Solara Prime"));
        assert!(ctx.current_planet().is_none());
        assert!(ctx.current_region().is_none());
    }

    #[test]
    fn same_seed_same_galaxy() {
        let a = context();
        let b = context();
        for (x, y) in a.systems.iter().zip(&b.systems) {
            assert_eq!(x.jump_gate, y.jump_gate);
            assert_eq!(x.planets.len(), y.planets.len());
        }
    }

    #[test]
    fn each_target_consumes_only_its_index() {
        let mut ctx = context();
        let params = TransitionParams {
            system_idx: Some(3),
            planet_idx: Some(1),
            region_idx: Some(0),
            ..Default::default()
        };

        ctx.apply_transition(&ViewId::Galaxy, &params);
        assert_eq!(ctx.current_star_system_idx, 0);
        assert_eq!(ctx.current_planet_idx, None);

        ctx.apply_transition(&ViewId::StarSystem, &params);
        assert_eq!(ctx.current_star_system_idx, 3);
        assert_eq!(ctx.current_planet_idx, None);

        ctx.apply_transition(&ViewId::PlanetOverhead, &params);
        assert_eq!(ctx.current_planet_idx, Some(1));
        assert_eq!(ctx.current_region_idx, None);

        ctx.apply_transition(&ViewId::Ground, &params);
        assert_eq!(ctx.current_region_idx, Some(0));
    }

    #[test]
    fn out_of_range_system_is_ignored() {
        let mut ctx = context();
        let params = TransitionParams {
            system_idx: Some(99),
            ..Default::default()
        };
        ctx.apply_transition(&ViewId::StarSystem, &params);
        assert_eq!(ctx.current_star_system_idx, 0);
    }

    #[test]
    fn missing_index_keeps_selection() {
        let mut ctx = context();
        ctx.current_planet_idx = Some(2);
        ctx.apply_transition(&ViewId::PlanetOverhead, &TransitionParams::default());
        assert_eq!(ctx.current_planet_idx, Some(2));
    }
}
