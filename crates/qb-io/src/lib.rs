pub mod assets;
pub mod bridge;
pub mod bundle;
pub mod error;
pub mod fonts;
pub mod metadata;
pub mod writer;

pub use bridge::{BridgeJob, BridgeReport};
pub use error::{BridgeError, Result};
pub use fonts::{FontConsumer, FontManifest};
pub use metadata::load_metadata;
