pub mod constants;
pub mod dialogue;
pub mod error;
pub mod parallax;
pub mod script;
pub mod timeline;
pub mod tracking;

pub use dialogue::*;
pub use error::*;
pub use parallax::*;
pub use script::*;
pub use timeline::*;
pub use tracking::*;
