//! Slime Rush main entry point.
//!
//! A 2D action game written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A slime walks through a chain of rooms, fighting the monsters each room
//! spawns, until the boss room is cleared or its hearts run out.
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini`, open the window
//! 2. Load every image named by the sprite catalog (fatal on failure)
//! 3. Insert resources, register observers and state enter hooks
//! 4. Run the schedule once per frame until the window closes or the game
//!    reaches the quitting state
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --assets ./data
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use clap::Parser;
use std::path::PathBuf;

use slimerush::assets::{load_assets, load_catalog};
use slimerush::components::persistent::Persistent;
use slimerush::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use slimerush::events::switchdebug::switch_debug_observer;
use slimerush::game;
use slimerush::resources::debugmode::DebugMode;
use slimerush::resources::gameconfig::GameConfig;
use slimerush::resources::gamestate::{GameState, GameStates, NextGameState};
use slimerush::resources::input::InputState;
use slimerush::resources::rooms::RoomDirector;
use slimerush::resources::screensize::ScreenSize;
use slimerush::resources::spawnrng::SpawnRng;
use slimerush::resources::systemsstore::{SystemsStore, enter_hook_name};
use slimerush::systems::button::button_system;
use slimerush::systems::gamestate::{check_pending_state, outcome_system};
use slimerush::systems::input::update_input_state;
use slimerush::systems::player::player_control_system;
use slimerush::systems::render::render_system;
use slimerush::systems::tick::{add_gameplay_systems, register_gameplay_observers};

/// Slime Rush
#[derive(Parser)]
#[command(version, about = "Slime Rush: clear the rooms, beat the boss.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Asset directory; overrides `[assets] dir` from the config file.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Seed for monster spawns, for reproducible runs.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Start with the debug overlay on.
    #[arg(long)]
    debug: bool,
}

/// Register `system` as the enter hook of `state`, surviving screen changes.
fn register_enter_hook<M>(
    world: &mut World,
    store: &mut SystemsStore,
    state: GameStates,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id: SystemId = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(enter_hook_name(state), id);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Config ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{} ({:?}), using defaults", e, config.config_path);
    }
    if let Some(dir) = cli.assets {
        config.assets_dir = dir;
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Slime Rush")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    let loaded = load_catalog(&config.assets_dir)
        .and_then(|catalog| load_assets(&mut rl, &thread, &config.assets_dir, &catalog));
    let (textures, sheets) = match loaded {
        Ok(stores) => stores,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(ScreenSize {
        w: window_width as i32,
        h: window_height as i32,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(RoomDirector::standard());
    world.insert_resource(SpawnRng::new(cli.seed));
    world.insert_resource(textures);
    world.insert_resource(sheets);
    world.insert_resource(config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // Game state enter hooks
    // NOTE: In bevy_ecs 0.18, registered systems are stored as entities.
    // We must mark them as Persistent so they survive scene transitions.
    let mut store = SystemsStore::new();
    register_enter_hook(&mut world, &mut store, GameStates::Title, game::enter_title);
    register_enter_hook(&mut world, &mut store, GameStates::Playing, game::enter_play);
    register_enter_hook(&mut world, &mut store, GameStates::GameOver, game::enter_game_over);
    register_enter_hook(&mut world, &mut store, GameStates::Victory, game::enter_victory);
    register_enter_hook(&mut world, &mut store, GameStates::Quitting, game::quit_game);
    world.insert_resource(store);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    register_gameplay_observers(&mut world);
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Title);
    world.trigger(GameStateChangedEvent {}); // Enter the title screen right away
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (update_input_state, button_system, check_pending_state)
            .chain()
            .before(player_control_system),
    );
    add_gameplay_systems(&mut update);
    update.add_systems(render_system.after(outcome_system));

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {:?}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        update.run(&mut world);

        world.clear_trackers();
    }
    log::info!("Bye");
}
