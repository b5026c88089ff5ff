//! Screen setup for each game state.
//!
//! Every function here is registered as an enter hook in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and runs
//! once when its state is entered. Each one starts by despawning every
//! entity without the [`Persistent`] marker.

use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::prelude::Vector2;

use crate::assets::keys;
use crate::components::animationsheets::AnimationSheets;
use crate::components::boxcollider::BoxCollider;
use crate::components::button::{BUTTON_HEIGHT, BUTTON_WIDTH, Button, ButtonAction};
use crate::components::facing::Facing;
use crate::components::framesequence::FrameSequence;
use crate::components::heart::{HEART_SIZE, Heart, heart_position};
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::player::Player;
use crate::components::visual::StaticImage;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rooms::RoomDirector;
use crate::resources::screensize::ScreenSize;
use crate::resources::sheetstore::SheetStore;

const LOGO_SIZE: Vector2 = Vector2 { x: 1500.0, y: 500.0 };
const BANNER_SIZE: f32 = 500.0;

fn clean_non_persistent(commands: &mut Commands, entities: &Query<Entity, Without<Persistent>>) {
    for entity in entities.iter() {
        commands.entity(entity).despawn();
    }
}

fn spawn_image(commands: &mut Commands, key: &str, position: Vector2, size: Vector2, z: ZIndex) {
    commands.spawn((
        StaticImage::new(key, size.x, size.y),
        MapPosition::new(position.x, position.y),
        z,
    ));
}

fn spawn_backdrop(commands: &mut Commands, key: &str, screen: &ScreenSize) {
    spawn_image(
        commands,
        key,
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 {
            x: screen.width(),
            y: screen.height(),
        },
        ZIndex::BACKDROP,
    );
}

fn spawn_button(commands: &mut Commands, action: ButtonAction, label: &str, position: Vector2) {
    commands.spawn((
        Button::new(action, label),
        StaticImage::new(keys::BUTTON, BUTTON_WIDTH, BUTTON_HEIGHT),
        BoxCollider::new(BUTTON_WIDTH, BUTTON_HEIGHT),
        MapPosition::new(position.x, position.y),
        ZIndex::HUD,
    ));
}

/// Primary and exit buttons, stacked in the lower middle of the screen.
fn spawn_menu(commands: &mut Commands, screen: &ScreenSize, primary: ButtonAction, label: &str) {
    let x = screen.width() / 2.5;
    spawn_button(
        commands,
        primary,
        label,
        Vector2 {
            x,
            y: screen.height() / 1.5,
        },
    );
    spawn_button(
        commands,
        ButtonAction::Exit,
        "Exit",
        Vector2 {
            x,
            y: screen.height() / 1.2,
        },
    );
}

/// Spawn the player at the centre of the play area with full health.
pub fn spawn_player(
    commands: &mut Commands,
    sheets: &SheetStore,
    config: &GameConfig,
    screen: &ScreenSize,
) -> Option<Entity> {
    let Some(walk) = sheets.get(keys::PLAYER) else {
        error!("Cannot spawn player: sheet '{}' not loaded", keys::PLAYER);
        return None;
    };
    let playback = config.playback();
    let size = playback.frame_size;
    let entity = commands
        .spawn((
            Player::new(config.player_health, config.player_damage, config.player_speed),
            MapPosition::new((screen.width() - size) / 2.0, (screen.height() - size) / 2.0),
            BoxCollider::square(size),
            FrameSequence::build(walk, playback, Facing::Left),
            AnimationSheets::new(keys::PLAYER, keys::PLAYER_ATTACK),
            ZIndex::PLAYER,
        ))
        .id();
    Some(entity)
}

/// One heart per point of maximum health.
pub fn spawn_hearts(commands: &mut Commands, max_health: i32, screen: &ScreenSize) {
    for slot in 0..max_health.max(0) as usize {
        let position = heart_position(slot, screen.width());
        commands.spawn((
            Heart { slot },
            StaticImage::new(keys::HEART, HEART_SIZE, HEART_SIZE),
            MapPosition::new(position.x, position.y),
            ZIndex::HUD,
        ));
    }
}

pub fn enter_title(
    mut commands: Commands,
    entities: Query<Entity, Without<Persistent>>,
    screen: Res<ScreenSize>,
) {
    clean_non_persistent(&mut commands, &entities);
    spawn_backdrop(&mut commands, keys::TITLE_BACKDROP, &screen);
    spawn_image(
        &mut commands,
        keys::LOGO,
        Vector2 {
            x: screen.width() / 9.0,
            y: screen.height() / 7.0,
        },
        LOGO_SIZE,
        ZIndex::HUD,
    );
    spawn_menu(&mut commands, &screen, ButtonAction::Start, "Start");
    info!("Title screen ready");
}

/// Start a fresh run: new rooms, new player, full hearts.
pub fn enter_play(
    mut commands: Commands,
    entities: Query<Entity, Without<Persistent>>,
    mut rooms: ResMut<RoomDirector>,
    sheets: Res<SheetStore>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
) {
    clean_non_persistent(&mut commands, &entities);
    *rooms = RoomDirector::standard();

    spawn_backdrop(&mut commands, keys::MAP, &screen);
    spawn_player(&mut commands, &sheets, &config, &screen);
    spawn_hearts(&mut commands, config.player_health, &screen);
    info!("Run started with {} rooms", rooms.len());
}

fn spawn_outcome_screen(
    commands: &mut Commands,
    entities: &Query<Entity, Without<Persistent>>,
    screen: &ScreenSize,
    banner: &str,
) {
    clean_non_persistent(commands, entities);
    spawn_backdrop(commands, keys::MAP, screen);
    spawn_image(
        commands,
        banner,
        Vector2 {
            x: screen.width() / 2.6,
            y: screen.height() / 7.0,
        },
        Vector2 {
            x: BANNER_SIZE,
            y: BANNER_SIZE,
        },
        ZIndex::HUD,
    );
    spawn_menu(commands, screen, ButtonAction::Restart, "Restart");
}

pub fn enter_game_over(
    mut commands: Commands,
    entities: Query<Entity, Without<Persistent>>,
    screen: Res<ScreenSize>,
) {
    spawn_outcome_screen(&mut commands, &entities, &screen, keys::GAME_OVER);
    info!("Game over");
}

pub fn enter_victory(
    mut commands: Commands,
    entities: Query<Entity, Without<Persistent>>,
    screen: Res<ScreenSize>,
) {
    spawn_outcome_screen(&mut commands, &entities, &screen, keys::VICTORY);
    info!("Victory");
}

/// The main loop watches for [`GameStates::Quitting`](crate::resources::gamestate::GameStates)
/// and exits; this only clears the screen entities.
pub fn quit_game(mut commands: Commands, entities: Query<Entity, Without<Persistent>>) {
    clean_non_persistent(&mut commands, &entities);
    info!("Quitting game");
}
