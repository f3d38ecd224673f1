use room_explorer::settings::{self, Settings};
use room_explorer::{Explorer, RoomGraphWorld, grid_maze, load_map, replay};

//This main let us terminate in an elegant and simple way, returning the error message
fn main() -> Result<(), String> {
    env_logger::init();

    // also loads .env
    settings::set_settings(Settings::from_env().map_err(|e| e.to_string())?);
    let settings = settings::get_settings();

    let world = load_world(&settings)?;
    let total_rooms = world.room_count();
    log::info!(
        "world ready: {} rooms, {} edges, start {}",
        total_rooms,
        world.edge_count(),
        world.starting_room()
    );

    let mut explorer = Explorer::new(0, world).with_probe_mode(settings.probe_mode);
    let traversal = explorer.explore().map_err(|e| e.to_string())?;

    // replay from the start room on the same world
    let mut world = explorer.into_world();
    world.reset();
    let report = replay(&mut world, &traversal.path).map_err(|e| e.to_string())?;

    if report.covers(total_rooms) {
        println!(
            "TESTS PASSED: {} moves, {} rooms visited",
            traversal.path.len(),
            report.distinct
        );
        Ok(())
    } else {
        println!("TESTS FAILED: INCOMPLETE TRAVERSAL");
        println!("{} unvisited rooms", total_rooms - report.distinct);
        Err("incomplete traversal".to_string())
    }
}

fn load_world(settings: &Settings) -> Result<RoomGraphWorld, String> {
    match &settings.map_file {
        Some(path) => load_map(path).map_err(|e| e.to_string()),
        None => {
            log::info!(
                "MAP_FILE not set, generating a {}x{} maze (seed {})",
                settings.maze_width,
                settings.maze_height,
                settings.maze_seed
            );
            grid_maze(
                settings.maze_width,
                settings.maze_height,
                settings.maze_extra_links,
                settings.maze_seed,
            )
            .map_err(|e| e.to_string())
        }
    }
}
