//! The five game views and the protocol they use to hand control to each other.
//!
//! A view never switches itself. It returns a [`TransitionRequest`] from `on_enter`,
//! `handle_input`, or `update`; the [`ViewController`](crate::controller::ViewController)
//! applies the latest one after the frame has been rendered.

mod draw;
pub mod galaxy;
pub mod ground;
pub mod hyperspace;
pub mod planet;
pub mod star_system;

pub use galaxy::GalaxyView;
pub use ground::GroundView;
pub use hyperspace::HyperspaceView;
pub use planet::PlanetView;
pub use star_system::StarSystemView;

use crate::context::GameContext;
use crate::error::FrameError;
use crate::starfield::Starfield;
use input::InputState;
use renderer::DrawSurface;
use std::fmt;

/// Identifies a view as a transition target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewId {
    Galaxy,
    StarSystem,
    PlanetOverhead,
    Ground,
    Hyperspace,
    /// A name no view answers to. Transitions here end up on the galaxy map.
    Unknown(String),
}

impl ViewId {
    pub fn name(&self) -> &str {
        match self {
            ViewId::Galaxy => "GALAXY_VIEW",
            ViewId::StarSystem => "STAR_SYSTEM_VIEW",
            ViewId::PlanetOverhead => "PLANET_OVERHEAD_VIEW",
            ViewId::Ground => "GROUND_VIEW",
            ViewId::Hyperspace => "HYPERSPACE_TRANSITION",
            ViewId::Unknown(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "GALAXY_VIEW" => ViewId::Galaxy,
            "STAR_SYSTEM_VIEW" => ViewId::StarSystem,
            "PLANET_OVERHEAD_VIEW" => ViewId::PlanetOverhead,
            "GROUND_VIEW" => ViewId::Ground,
            "HYPERSPACE_TRANSITION" => ViewId::Hyperspace,
            other => ViewId::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters carried by a transition. Absent fields mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionParams {
    /// Star system to make current (consumed on entering STAR_SYSTEM).
    pub system_idx: Option<usize>,
    /// Planet to make current (consumed on entering PLANET_OVERHEAD).
    pub planet_idx: Option<usize>,
    /// Region to make current (consumed on entering GROUND).
    pub region_idx: Option<usize>,
    /// Destination of a hyperspace jump.
    pub target_system_idx: Option<usize>,
    /// Planet the ship just left; the star system view parks the ship beside it.
    pub from_planet_idx: Option<usize>,
    pub from_galaxy_map_entry: bool,
    pub from_hyperspace: bool,
    pub reset_ship: bool,
}

impl fmt::Display for TransitionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        let indices = [
            ("system_idx", self.system_idx),
            ("planet_idx", self.planet_idx),
            ("region_idx", self.region_idx),
            ("target_system_idx", self.target_system_idx),
            ("from_planet_idx", self.from_planet_idx),
        ];
        for (key, value) in indices {
            if let Some(v) = value {
                parts.push(format!("{}: {}", key, v));
            }
        }
        let flags = [
            ("from_galaxy_map_entry", self.from_galaxy_map_entry),
            ("from_hyperspace", self.from_hyperspace),
            ("reset_ship", self.reset_ship),
        ];
        for (key, set) in flags {
            if set {
                parts.push(format!("{}: true", key));
            }
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Request to switch views, produced by the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub target: ViewId,
    pub params: TransitionParams,
}

impl TransitionRequest {
    pub fn new(target: ViewId, params: TransitionParams) -> Self {
        Self { target, params }
    }

    /// Request without parameters.
    pub fn to(target: ViewId) -> Self {
        Self::new(target, TransitionParams::default())
    }
}

/// Per-frame inputs shared by every view.
pub struct Frame<'a> {
    pub input: &'a InputState,
    /// Seconds since the previous frame.
    pub dt: f32,
    pub frame_count: u64,
    pub starfield: &'a Starfield,
}

pub type ViewResult = Result<Option<TransitionRequest>, FrameError>;

/// Capabilities every view provides.
pub trait ViewState {
    fn id(&self) -> ViewId;

    /// Called once the view is installed. May ask to leave again straight away.
    fn on_enter(&mut self, _ctx: &mut GameContext, _params: &TransitionParams) -> Option<TransitionRequest> {
        None
    }

    /// Called before the view is dropped.
    fn on_exit(&mut self, _ctx: &mut GameContext) {}

    /// Discrete input of this frame (clicks, key presses).
    fn handle_input(&mut self, _ctx: &mut GameContext, _frame: &Frame) -> Option<TransitionRequest> {
        None
    }

    fn update(&mut self, ctx: &mut GameContext, frame: &Frame) -> ViewResult;

    fn render(&self, ctx: &GameContext, frame: &Frame, surface: &mut dyn DrawSurface) -> Result<(), FrameError>;
}

/// The active view.
pub enum View {
    Galaxy(GalaxyView),
    StarSystem(StarSystemView),
    PlanetOverhead(PlanetView),
    Ground(GroundView),
    Hyperspace(HyperspaceView),
}

impl View {
    /// Fresh view for `id`; `None` for unknown identifiers.
    pub fn for_id(id: &ViewId) -> Option<Self> {
        let view = match id {
            ViewId::Galaxy => View::Galaxy(GalaxyView::new()),
            ViewId::StarSystem => View::StarSystem(StarSystemView::new()),
            ViewId::PlanetOverhead => View::PlanetOverhead(PlanetView::new()),
            ViewId::Ground => View::Ground(GroundView::new()),
            ViewId::Hyperspace => View::Hyperspace(HyperspaceView::new()),
            ViewId::Unknown(_) => return None,
        };
        Some(view)
    }

    pub fn state(&self) -> &dyn ViewState {
        match self {
            View::Galaxy(v) => v,
            View::StarSystem(v) => v,
            View::PlanetOverhead(v) => v,
            View::Ground(v) => v,
            View::Hyperspace(v) => v,
        }
    }

    pub fn state_mut(&mut self) -> &mut dyn ViewState {
        match self {
            View::Galaxy(v) => v,
            View::StarSystem(v) => v,
            View::PlanetOverhead(v) => v,
            View::Ground(v) => v,
            View::Hyperspace(v) => v,
        }
    }

    pub fn id(&self) -> ViewId {
        self.state().id()
    }
}
