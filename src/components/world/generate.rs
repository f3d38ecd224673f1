use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use strum::IntoEnumIterator;

use logging_utils::{ActorType, log_fn_call};

use super::init::build_world;
use super::{Room, RoomGraphWorld};
use crate::utils::{Direction, MapError, RoomId};

/// Random grid maze.
///
/// Carves a spanning tree over a `width` x `height` grid with a randomized
/// depth-first walk, then opens up to `extra_links` more walls between
/// neighboring cells to create loops. Room ids are `y * width + x`, the start
/// room is `0` (south-west corner). The same seed always gives the same maze.
pub fn grid_maze(
    width: u32,
    height: u32,
    extra_links: u32,
    seed: u64,
) -> Result<RoomGraphWorld, MapError> {
    log_fn_call!(dir ActorType::World, 0u32, "grid_maze()", width, height, extra_links, seed);
    if width == 0 || height == 0 {
        return Err(MapError::Empty);
    }
    // every cell id must fit in a RoomId
    if width.checked_mul(height).is_none() {
        return Err(MapError::TooLarge { width, height });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut rooms: Vec<Room> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| Room::with_position(cell_id(width, x, y), x as i64, y as i64))
        .collect();

    // depth-first carving
    let mut visited = FxHashSet::default();
    let mut stack = vec![(0u32, 0u32)];
    visited.insert((0u32, 0u32));
    while let Some(&(x, y)) = stack.last() {
        let mut candidates: Vec<(Direction, (u32, u32))> = Direction::iter()
            .filter_map(|d| step(width, height, x, y, d).map(|cell| (d, cell)))
            .filter(|(_, cell)| !visited.contains(cell))
            .collect();
        if candidates.is_empty() {
            stack.pop();
            continue;
        }
        candidates.shuffle(&mut rng);
        let (direction, next) = candidates[0];
        link(&mut rooms, width, (x, y), direction, next);
        visited.insert(next);
        stack.push(next);
    }

    // loops
    let mut walls: Vec<((u32, u32), Direction, (u32, u32))> = Vec::new();
    for y in 0..height {
        for x in 0..width {
            for direction in [Direction::North, Direction::East] {
                if let Some(next) = step(width, height, x, y, direction) {
                    let room = &rooms[cell_id(width, x, y).value() as usize];
                    if room.exit(direction).is_none() {
                        walls.push(((x, y), direction, next));
                    }
                }
            }
        }
    }
    walls.shuffle(&mut rng);
    for &(from, direction, to) in walls.iter().take(extra_links as usize) {
        link(&mut rooms, width, from, direction, to);
    }

    build_world(rooms, RoomId(0))
}

fn cell_id(width: u32, x: u32, y: u32) -> RoomId {
    RoomId(y * width + x)
}

fn step(width: u32, height: u32, x: u32, y: u32, direction: Direction) -> Option<(u32, u32)> {
    let (dx, dy) = direction.offset();
    let nx = x as i64 + dx;
    let ny = y as i64 + dy;
    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
        return None;
    }
    Some((nx as u32, ny as u32))
}

fn link(rooms: &mut [Room], width: u32, from: (u32, u32), direction: Direction, to: (u32, u32)) {
    let from_id = cell_id(width, from.0, from.1);
    let to_id = cell_id(width, to.0, to.1);
    rooms[from_id.value() as usize].exits.insert(direction, to_id);
    rooms[to_id.value() as usize]
        .exits
        .insert(direction.inverse(), from_id);
}
