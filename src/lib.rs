mod components;
pub mod settings;
mod utils;

pub use components::explorer::{Explorer, RoomMap, Traversal, move_along, probe_current_room};
pub use components::verify::{ReplayReport, replay};
pub use components::world::generate::grid_maze;
pub use components::world::init::{build_world, from_edges, load_map, parse_map};
pub use components::world::{Room, RoomGraphWorld, World};
pub use utils::{Direction, ExploreError, MapError, MoveError, Result, RoomId, SettingsError, format_path};
