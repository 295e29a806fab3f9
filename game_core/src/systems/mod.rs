pub mod ai;
pub mod collision;
pub mod input;
pub mod scoring;
pub mod serve;

pub use ai::*;
pub use collision::*;
pub use input::*;
pub use scoring::*;
pub use serve::*;
