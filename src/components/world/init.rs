use std::fs;
use std::path::Path;

use logging_utils::{ActorType, log_fn_call, log_internal_op, log_warning};
use rustc_hash::FxHashMap;

use super::{Room, RoomGraphWorld};
use crate::utils::{Direction, MapError, RoomId};

//World initialization functions

/// Load a world from a map file.
///
/// One room per line, `#` starts a comment, blank lines are skipped:
///
/// ```text
/// start 0
/// 0 @ 3,5 : n=1 s=5 e=3 w=7
/// 1 : s=0
/// ```
///
/// The `@ x,y` part is optional. Without a `start` line the start room is `0`.
/// Returns Err if the file cannot be read or does not describe a consistent
/// undirected map (see [`build_world`]).
pub fn load_map(path: impl AsRef<Path>) -> Result<RoomGraphWorld, MapError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    log_fn_call!(dir ActorType::World, 0u32, "load_map()", path_str);

    let input = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path_str.clone(),
        source,
    })?;
    parse_map(&input)
}

/// Parse the content of a map file. See [`load_map`] for the format.
pub fn parse_map(input: &str) -> Result<RoomGraphWorld, MapError> {
    let mut rooms = Vec::new();
    let mut start = None;

    for (line_num, raw_line) in input.lines().enumerate() {
        let line_num = line_num + 1;
        let line = match raw_line.split_once('#') {
            Some((content, _comment)) => content.trim(),
            None => raw_line.trim(),
        };
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("start") {
            if start.is_some() {
                return Err(parse_err(line_num, "start room declared twice"));
            }
            start = Some(parse_id(rest, line_num)?);
            continue;
        }

        rooms.push(parse_room_line(line, line_num)?);
    }

    build_world(rooms, start.unwrap_or(RoomId(0)))
}

/// Builds a world from undirected edges `(from, direction, to)`. Each edge
/// also creates its inverse. The start room always exists, even with no edges.
pub fn from_edges(start: u32, edges: &[(u32, Direction, u32)]) -> Result<RoomGraphWorld, MapError> {
    let mut by_id: FxHashMap<RoomId, Room> = FxHashMap::default();
    by_id.insert(RoomId(start), Room::new(RoomId(start)));

    for &(from, direction, to) in edges {
        let (from, to) = (RoomId(from), RoomId(to));
        by_id
            .entry(from)
            .or_insert_with(|| Room::new(from))
            .exits
            .insert(direction, to);
        by_id
            .entry(to)
            .or_insert_with(|| Room::new(to))
            .exits
            .insert(direction.inverse(), from);
    }

    build_world(by_id.into_values().collect(), RoomId(start))
}

/// Validates the rooms and wraps them into a world positioned at `start`.
///
/// Returns Err if:
/// - no room is given
/// - a room id appears twice
/// - an exit points to an undeclared room
/// - an exit has no matching inverse exit on the other side
/// - the start room is not declared
pub fn build_world(rooms: Vec<Room>, start: RoomId) -> Result<RoomGraphWorld, MapError> {
    if rooms.is_empty() {
        return Err(MapError::Empty);
    }

    let mut by_id: FxHashMap<RoomId, Room> = FxHashMap::default();
    for room in rooms {
        if by_id.contains_key(&room.id) {
            return Err(MapError::DuplicateRoom(room.id));
        }
        by_id.insert(room.id, room);
    }

    for room in by_id.values() {
        for (&direction, &target) in &room.exits {
            let Some(other) = by_id.get(&target) else {
                return Err(MapError::DanglingExit {
                    room: room.id,
                    direction,
                    target,
                });
            };
            if other.exit(direction.inverse()) != Some(room.id) {
                let room_id = room.id;
                log_warning!(
                    dir ActorType::World,
                    0u32,
                    "asymmetric exit",
                    "no inverse exit",
                    "build_world()",
                    room_id,
                    direction,
                    target
                );
                return Err(MapError::AsymmetricExit {
                    room: room.id,
                    direction,
                    target,
                });
            }
        }
    }

    if !by_id.contains_key(&start) {
        return Err(MapError::MissingStartRoom(start));
    }

    let world = RoomGraphWorld::from_rooms(by_id, start);
    log_internal_op!(dir ActorType::World, 0u32,
        "action" => "world built",
        "rooms" => world.room_count(),
        "edges" => world.edge_count(),
        "start" => start,
    );
    Ok(world)
}

fn parse_room_line(line: &str, line_num: usize) -> Result<Room, MapError> {
    let (header, exits) = line
        .split_once(':')
        .ok_or_else(|| parse_err(line_num, "missing ':' between room and exits"))?;

    let mut room = match header.split_once('@') {
        Some((id, coords)) => {
            let id = parse_id(id, line_num)?;
            let (x, y) = coords
                .split_once(',')
                .ok_or_else(|| parse_err(line_num, "coordinates must be 'x,y'"))?;
            Room::with_position(id, parse_coord(x, line_num)?, parse_coord(y, line_num)?)
        }
        None => Room::new(parse_id(header, line_num)?),
    };

    for token in exits.split_whitespace() {
        let (dir, target) = token
            .split_once('=')
            .ok_or_else(|| parse_err(line_num, format!("exit '{token}' must be 'dir=id'")))?;
        let direction: Direction = dir
            .parse()
            .map_err(|_| parse_err(line_num, format!("'{dir}' is not a direction")))?;
        let target = parse_id(target, line_num)?;
        if room.exits.insert(direction, target).is_some() {
            return Err(parse_err(
                line_num,
                format!("exit {direction} declared twice"),
            ));
        }
    }

    Ok(room)
}

fn parse_id(raw: &str, line_num: usize) -> Result<RoomId, MapError> {
    raw.trim()
        .parse::<u32>()
        .map(RoomId)
        .map_err(|_| parse_err(line_num, format!("value '{}' is not a room id", raw.trim())))
}

fn parse_coord(raw: &str, line_num: usize) -> Result<i64, MapError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| parse_err(line_num, format!("value '{}' is not a coordinate", raw.trim())))
}

fn parse_err(line: usize, reason: impl Into<String>) -> MapError {
    MapError::Parse {
        line,
        reason: reason.into(),
    }
}
