pub mod evolve;
pub mod render_state;

pub use evolve::{Evolution, EvolutionMode, Orbit, PointerSample};
pub use render_state::RenderState;
