pub mod candidate;
pub mod component;
pub mod path;

pub use candidate::*;
pub use component::*;
pub use path::*;
