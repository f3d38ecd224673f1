use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::generate::grid_maze;
use super::init::{from_edges, load_map, parse_map};
use super::{RoomGraphWorld, World};
use crate::utils::{Direction, MapError, MoveError, RoomId};

use Direction::{East, North, South, West};

const LOOP_FORK: &str = "
# test_loop_fork
start 0
0 @ 3,5 : n=1 s=5 w=7 e=3
1 @ 3,6 : n=2 s=0 w=15 e=12
2 @ 3,7 : s=1
3 @ 4,5 : w=0 e=4
4 @ 5,5 : w=3
5 @ 3,4 : n=0 s=6
6 @ 3,3 : n=5 w=11
7 @ 2,5 : w=8 e=0
8 @ 1,5 : e=7 s=9
9 @ 1,4 : n=8 s=10
10 @ 1,3 : n=9 e=11
11 @ 2,3 : w=10 e=6
12 @ 4,6 : w=1 e=13
13 @ 5,6 : w=12 n=14
14 @ 5,7 : s=13
15 @ 2,6 : w=16 e=1
16 @ 1,6 : n=17 e=15
17 @ 1,7 : s=16
";

fn reachable_from_start(world: &RoomGraphWorld) -> usize {
    let mut seen = FxHashSet::default();
    let mut queue = VecDeque::from([world.starting_room()]);
    seen.insert(world.starting_room());
    while let Some(room) = queue.pop_front() {
        for exit in world.room(room).unwrap().exits.values() {
            if seen.insert(*exit) {
                queue.push_back(*exit);
            }
        }
    }
    seen.len()
}

#[test]
fn parses_the_loop_fork_map() -> Result<(), String> {
    let world = parse_map(LOOP_FORK).map_err(|e| e.to_string())?;
    assert_eq!(world.room_count(), 18);
    assert_eq!(world.edge_count(), 18);
    assert_eq!(world.starting_room(), RoomId(0));
    assert_eq!(world.current_room(), RoomId(0));
    assert_eq!(world.exits_of(RoomId(0)), vec![North, South, West, East]);
    assert_eq!(world.room(RoomId(6)).unwrap().position, Some((3, 3)));
    Ok(())
}

#[test]
fn travel_follows_exits_and_counts_moves() {
    let mut world = parse_map(LOOP_FORK).unwrap();
    world.travel(East).unwrap();
    world.travel(East).unwrap();
    assert_eq!(world.current_room(), RoomId(4));
    assert_eq!(world.moves_made(), 2);

    let err = world.travel(North).unwrap_err();
    assert_eq!(
        err,
        MoveError::NoExit {
            room: RoomId(4),
            direction: North
        }
    );
    // failed moves leave the agent in place and are not counted
    assert_eq!(world.current_room(), RoomId(4));
    assert_eq!(world.moves_made(), 2);

    world.reset();
    assert_eq!(world.current_room(), RoomId(0));
    assert_eq!(world.moves_made(), 0);
}

#[test]
fn peek_does_not_move() {
    let world = parse_map(LOOP_FORK).unwrap();
    assert_eq!(world.peek(West), Some(RoomId(7)));
    assert_eq!(world.peek(North), Some(RoomId(1)));
    assert_eq!(world.current_room(), RoomId(0));
    assert_eq!(world.moves_made(), 0);
}

#[test]
fn teleport_rejects_unknown_rooms() {
    let mut world = parse_map(LOOP_FORK).unwrap();
    world.teleport(RoomId(14)).unwrap();
    assert_eq!(world.current_room(), RoomId(14));
    assert_eq!(world.teleport(RoomId(99)), Err(MoveError::UnknownRoom(RoomId(99))));
    assert_eq!(world.exits_of(RoomId(99)), Vec::<Direction>::new());
}

#[test]
fn start_defaults_to_zero_and_comments_are_ignored() {
    let world = parse_map("0 : e=1   # first\n\n1 : w=0\n").unwrap();
    assert_eq!(world.starting_room(), RoomId(0));
    assert_eq!(world.room_count(), 2);
}

#[test]
fn explicit_start_room_is_used() {
    let world = parse_map("start 1\n0 : e=1\n1 : w=0\n").unwrap();
    assert_eq!(world.current_room(), RoomId(1));
}

#[test]
fn rejects_inconsistent_maps() {
    assert!(matches!(
        parse_map("0 : e=1\n1 : s=0\n"),
        Err(MapError::AsymmetricExit { room, .. }) if room == RoomId(0) || room == RoomId(1)
    ));
    assert!(matches!(
        parse_map("0 : e=1\n"),
        Err(MapError::DanglingExit { target: RoomId(1), .. })
    ));
    assert!(matches!(
        parse_map("0 : \n0 : \n"),
        Err(MapError::DuplicateRoom(RoomId(0)))
    ));
    assert!(matches!(
        parse_map("start 3\n0 : \n"),
        Err(MapError::MissingStartRoom(RoomId(3)))
    ));
    assert!(matches!(parse_map("# nothing\n"), Err(MapError::Empty)));
}

#[test]
fn reports_parse_errors_with_line_numbers() {
    assert!(matches!(
        parse_map("0 : e=1\n1 w=0\n"),
        Err(MapError::Parse { line: 2, .. })
    ));
    assert!(matches!(
        parse_map("0 : up=1\n"),
        Err(MapError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        parse_map("0 : e=1 e=2\n"),
        Err(MapError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        parse_map("x : \n"),
        Err(MapError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        parse_map("0 @ 1 : \n"),
        Err(MapError::Parse { line: 1, .. })
    ));
}

#[test]
fn from_edges_adds_inverse_exits() {
    let world = from_edges(0, &[(0, East, 1), (1, South, 2)]).unwrap();
    assert_eq!(world.room(RoomId(1)).unwrap().exit(West), Some(RoomId(0)));
    assert_eq!(world.room(RoomId(2)).unwrap().exit(North), Some(RoomId(1)));
    assert_eq!(world.edge_count(), 2);

    let single = from_edges(5, &[]).unwrap();
    assert_eq!(single.room_count(), 1);
    assert!(single.exits_of(RoomId(5)).is_empty());
}

#[test]
fn generated_mazes_are_connected_and_deterministic() {
    for seed in 0..10 {
        let world = grid_maze(6, 5, 4, seed).unwrap();
        assert_eq!(world.room_count(), 30);
        // spanning tree plus the extra links
        assert_eq!(world.edge_count(), 29 + 4);
        assert_eq!(reachable_from_start(&world), 30);

        let again = grid_maze(6, 5, 4, seed).unwrap();
        for id in world.room_ids() {
            assert_eq!(world.room(id), again.room(id));
        }
    }
}

#[test]
fn degenerate_mazes() {
    assert!(matches!(grid_maze(0, 3, 0, 1), Err(MapError::Empty)));
    assert!(matches!(
        grid_maze(u32::MAX, 2, 0, 1),
        Err(MapError::TooLarge { width: u32::MAX, height: 2 })
    ));
    let line = grid_maze(5, 1, 10, 1).unwrap();
    // a corridor has no wall left to open
    assert_eq!(line.edge_count(), 4);
}

#[test]
fn loads_the_bundled_maps() {
    let maps_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("maps");
    for (file, rooms) in [
        ("test_line.txt", 4),
        ("test_cross.txt", 9),
        ("test_loop.txt", 12),
        ("test_loop_fork.txt", 18),
    ] {
        let world = load_map(maps_dir.join(file)).unwrap();
        assert_eq!(world.room_count(), rooms, "{file}");
        assert_eq!(reachable_from_start(&world), rooms, "{file}");
    }
}

#[test]
fn missing_map_file_is_an_io_error() {
    assert!(matches!(
        load_map("maps/does_not_exist.txt"),
        Err(MapError::Io { .. })
    ));
}
