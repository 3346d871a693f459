pub mod graphics;
pub mod shader;
pub mod snapshot;
pub mod startup;
