pub mod events;
pub mod local;
pub mod properties;
pub mod queue;

pub use events::PlayerEvent;
pub use local::LocalPlayer;
pub use properties::{Artwork, EntryProperty, PlayableEntry, TrackInfo};
pub use queue::{LocalQueue, MirrorQueue};
