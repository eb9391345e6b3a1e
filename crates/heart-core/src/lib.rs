//! Heart particle field: simulation, projection and the two button state
//! machines. No platform APIs here; front-ends draw through [`DrawSurface`].

pub mod camera;
pub mod celebration;
pub mod constants;
pub mod evasion;
pub mod field;
pub mod heart;
pub mod params;
pub mod particle;
pub mod projection;
pub mod scene;
pub mod surface;

pub use camera::{CameraController, CameraState};
pub use celebration::{Celebration, SimulationMode};
pub use evasion::{Evasion, EvasionState};
pub use field::{particle_count_for_width, ParticleField};
pub use heart::{heart_xy, sample_target};
pub use params::{ParamsError, SceneParams};
pub use particle::Particle;
pub use projection::{rotate, Projector, ScreenPoint};
pub use scene::Scene;
pub use surface::{BlendMode, DrawSurface, Hsl, Rgba, Viewport};
