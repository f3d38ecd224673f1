pub mod core;
pub mod mover;
pub mod prober;
pub mod router;
pub mod topology;

// re-export commonly used types
pub use self::core::{Explorer, Traversal};
pub use mover::move_along;
pub use prober::probe_current_room;
pub use topology::RoomMap;
