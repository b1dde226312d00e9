//! Procedural generation for the galaxy: star systems, planets, surface regions,
//! planet textures, and ground levels.
//!
//! Every generator takes an explicit `&mut impl Rng`; seed a `StdRng` for reproducible worlds.

pub mod biome;
pub mod ground;
pub mod orbit;
pub mod planet;
pub mod star_system;
pub mod textures;
pub mod universe;

pub use biome::*;
pub use ground::*;
pub use orbit::*;
pub use planet::*;
pub use star_system::*;
pub use textures::*;
pub use universe::*;
