use logging_utils::{ActorType, log_fn_call, log_internal_op, log_warning};

use super::topology::RoomMap;
use crate::components::world::World;
use crate::settings::ProbeMode;
use crate::utils::{ExploreError, MoveError, Result, RoomId};

/// Learns every exit of the agent's current room and records it in `topology`.
///
/// In [`ProbeMode::RoundTrip`] each exit is walked through and straight back,
/// two moves per exit. In [`ProbeMode::Peek`] the world is asked directly and
/// the agent does not move. Either way the agent ends where it started.
///
/// Returns the probed room. Any exit the world reports but cannot honour, a
/// return step that lands elsewhere, or an edge contradicting the recorded map
/// is a fatal inconsistency.
pub fn probe_current_room<W: World>(
    world: &mut W,
    topology: &mut RoomMap,
    mode: ProbeMode,
) -> Result<RoomId> {
    let room = world.current_room();
    let exits = world.exits_of(room);
    log_fn_call!(dir ActorType::Explorer, 0u32, "probe_current_room()", room; "exits" => exits.len(), "mode" => mode);

    topology.mark_probed(room);
    for (step, direction) in exits.into_iter().enumerate() {
        let neighbor = match mode {
            ProbeMode::RoundTrip => {
                world
                    .travel(direction)
                    .map_err(|source| fail(ExploreError::InvalidMove { step, source }))?;
                let neighbor = world.current_room();
                world
                    .travel(direction.inverse())
                    .map_err(|source| fail(ExploreError::InvalidMove { step, source }))?;
                let landed = world.current_room();
                if landed != room {
                    return Err(fail(ExploreError::BrokenReturn {
                        room,
                        direction,
                        landed,
                    }));
                }
                neighbor
            }
            ProbeMode::Peek => world.peek(direction).ok_or_else(|| {
                fail(ExploreError::InvalidMove {
                    step,
                    source: MoveError::NoExit { room, direction },
                })
            })?,
        };

        topology
            .record_edge(room, direction, neighbor)
            .map_err(fail)?;
        log_internal_op!(dir ActorType::Explorer, 0u32,
            "action" => "exit recorded",
            "room" => room,
            "direction" => direction,
            "neighbor" => neighbor,
        );
    }

    Ok(room)
}

fn fail(err: ExploreError) -> ExploreError {
    log_warning!(dir ActorType::Explorer, 0u32, "probe aborted", err, "probe_current_room()");
    err
}
