pub mod errors;
pub mod types;

pub use errors::{ExploreError, MapError, MoveError, Result, SettingsError};
pub use types::{Direction, RoomId, format_path};
