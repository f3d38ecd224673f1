use logging_utils::{ActorType, log_fn_call, log_warning};

use crate::components::world::World;
use crate::utils::{Direction, ExploreError, Result, format_path};

/// Moves the agent along `directions`, one world move per entry.
///
/// Stops at the first move the world rejects and returns it as
/// [`ExploreError::InvalidMove`] with its index. Moves already made are not
/// undone.
pub fn move_along<W: World>(world: &mut W, directions: &[Direction]) -> Result<()> {
    let route = format_path(directions);
    log_fn_call!(dir ActorType::Explorer, 0u32, "move_along()", route);

    for (step, &direction) in directions.iter().enumerate() {
        if let Err(source) = world.travel(direction) {
            let room = world.current_room();
            log_warning!(dir ActorType::Explorer, 0u32, "move rejected", source, "move_along()", step, room);
            return Err(ExploreError::InvalidMove { step, source });
        }
    }
    Ok(())
}
