//! Gameplay tick integration tests: combat windows, room gating, removal,
//! hearts and run outcome.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use slimerush::assets::keys;
use slimerush::components::animationsheets::AnimationSheets;
use slimerush::components::boxcollider::BoxCollider;
use slimerush::components::button::{Button, ButtonAction};
use slimerush::components::facing::Facing;
use slimerush::components::framesequence::{FrameSequence, Playback};
use slimerush::components::heart::Heart;
use slimerush::components::mapposition::MapPosition;
use slimerush::components::monster::{Monster, MonsterKind, MonsterState};
use slimerush::components::player::Player;
use slimerush::components::visual::StaticImage;
use slimerush::components::zindex::ZIndex;
use slimerush::resources::gameconfig::GameConfig;
use slimerush::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use slimerush::resources::input::InputState;
use slimerush::resources::rooms::{RoomDirector, RoomKind};
use slimerush::resources::screensize::ScreenSize;
use slimerush::resources::sheetstore::{AlphaMask, SheetStore, SpriteSheet};
use slimerush::resources::spawnrng::SpawnRng;
use slimerush::systems::button::button_system;
use slimerush::systems::hud::hearts_system;
use slimerush::systems::player::player_control_system;
use slimerush::systems::tick::{add_gameplay_systems, register_gameplay_observers};

fn sheet(key: &str, columns: u32, facing: Facing) -> SpriteSheet {
    SpriteSheet::new(key, columns, 1, facing, AlphaMask::solid(columns * 10, 10)).unwrap()
}

fn test_sheets() -> SheetStore {
    let mut sheets = SheetStore::new();
    sheets.insert(sheet(keys::PLAYER, 4, Facing::Left));
    sheets.insert(sheet(keys::PLAYER_ATTACK, 6, Facing::Right));
    for kind in [
        MonsterKind::Ratatouille,
        MonsterKind::Skeleton,
        MonsterKind::Zombie,
        MonsterKind::Boss,
    ] {
        sheets.insert(sheet(kind.walk_sheet(), 4, Facing::Left));
        sheets.insert(sheet(kind.attack_sheet(), 5, Facing::Left));
    }
    sheets
}

fn make_world(rooms: RoomDirector) -> World {
    let mut world = World::new();
    world.insert_resource(ScreenSize { w: 1920, h: 1080 });
    world.insert_resource(GameConfig::new());
    world.insert_resource(InputState::default());
    let mut state = GameState::new();
    state.set(GameStates::Playing);
    world.insert_resource(state);
    world.insert_resource(NextGameState::new());
    world.insert_resource(rooms);
    world.insert_resource(SpawnRng::new(Some(7)));
    world.insert_resource(test_sheets());
    register_gameplay_observers(&mut world);
    world
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    let walk = world.resource::<SheetStore>().get(keys::PLAYER).unwrap().clone();
    world
        .spawn((
            Player::new(5, 1, 7.0),
            MapPosition::new(x, y),
            BoxCollider::square(150.0),
            FrameSequence::build(&walk, Playback::default(), Facing::Left),
            AnimationSheets::new(keys::PLAYER, keys::PLAYER_ATTACK),
            ZIndex::PLAYER,
        ))
        .id()
}

fn spawn_monster(world: &mut World, room: usize, hp: i32, x: f32, y: f32) -> Entity {
    let kind = MonsterKind::Zombie;
    let walk = world
        .resource::<SheetStore>()
        .get(kind.walk_sheet())
        .unwrap()
        .clone();
    world
        .spawn((
            Monster::new(kind, hp, room, Facing::Left),
            MapPosition::new(x, y),
            BoxCollider::square(150.0),
            FrameSequence::build(&walk, Playback::default(), Facing::Left),
            AnimationSheets::new(kind.walk_sheet(), kind.attack_sheet()),
            ZIndex::MONSTERS,
        ))
        .id()
}

fn tick_gameplay(world: &mut World) {
    let mut schedule = Schedule::default();
    add_gameplay_systems(&mut schedule);
    schedule.run(world);
}

fn tick_control(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_control_system);
    schedule.run(world);
}

fn tick_hearts(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(hearts_system);
    schedule.run(world);
}

fn tick_buttons(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(button_system);
    schedule.run(world);
}

fn player(world: &World, entity: Entity) -> &Player {
    world.get::<Player>(entity).unwrap()
}

fn monsters_in_room(world: &mut World, room: usize) -> usize {
    let mut q = world.query::<&Monster>();
    q.iter(world).filter(|m| m.room == room).count()
}

fn set_attack_input(world: &mut World, down: bool) {
    world.resource_mut::<InputState>().attack.update(down);
}

#[test]
fn uncleared_room_blocks_until_monsters_die() {
    let mut rooms = RoomDirector::new(&[RoomKind::Hostile, RoomKind::Hostile, RoomKind::Boss]);
    rooms.mark_populated(0);
    let mut world = make_world(rooms);

    let p = spawn_player(&mut world, 1785.0, 100.0);
    world.get_mut::<Player>(p).unwrap().horizontal = Some(Facing::Right);
    let monsters: Vec<Entity> = (0..3)
        .map(|i| spawn_monster(&mut world, 0, 3, 200.0 + 200.0 * i as f32, 800.0))
        .collect();

    for _ in 0..3 {
        tick_gameplay(&mut world);
        assert_eq!(world.resource::<RoomDirector>().current_index(), 0);
        assert_eq!(world.get::<MapPosition>(p).unwrap().pos.x, 1785.0);
    }

    for m in &monsters {
        world.get_mut::<Monster>(*m).unwrap().hp = 0;
    }
    tick_gameplay(&mut world);

    assert_eq!(world.resource::<RoomDirector>().current_index(), 1);
    assert_eq!(world.get::<MapPosition>(p).unwrap().pos.x, 0.0);
    assert_eq!(monsters_in_room(&mut world, 0), 0);
    let spawned = monsters_in_room(&mut world, 1);
    assert!((1..=6).contains(&spawned), "spawned {spawned}");
}

#[test]
fn left_edge_of_first_room_is_a_wall() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, -15.0, 100.0);
    world.get_mut::<Player>(p).unwrap().horizontal = Some(Facing::Left);

    tick_gameplay(&mut world);

    assert_eq!(world.resource::<RoomDirector>().current_index(), 0);
    assert_eq!(world.get::<MapPosition>(p).unwrap().pos.x, -15.0);
}

#[test]
fn vertical_movement_is_clamped() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, 500.0, 3.0);
    world.get_mut::<Player>(p).unwrap().vertical =
        Some(slimerush::components::player::Vertical::Up);
    tick_gameplay(&mut world);
    assert_eq!(world.get::<MapPosition>(p).unwrap().pos.y, 0.0);

    world.get_mut::<MapPosition>(p).unwrap().pos.y = 926.0;
    world.get_mut::<Player>(p).unwrap().vertical =
        Some(slimerush::components::player::Vertical::Down);
    tick_gameplay(&mut world);
    assert_eq!(world.get::<MapPosition>(p).unwrap().pos.y, 930.0);
}

#[test]
fn monster_hits_at_tick_50_and_recovers_at_tick_80() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, 500.0, 500.0);
    let m = spawn_monster(&mut world, 0, 3, 500.0, 500.0);

    // Tick T: contact, attack window opens.
    tick_gameplay(&mut world);
    assert_eq!(
        world.get::<Monster>(m).unwrap().state,
        MonsterState::Attacking { elapsed: 0 }
    );

    for _ in 0..49 {
        tick_gameplay(&mut world);
    }
    assert_eq!(player(&world, p).health, 5);

    // T+50
    tick_gameplay(&mut world);
    assert_eq!(player(&world, p).health, 4);
    assert_eq!(
        world.get::<FrameSequence>(m).unwrap().sheet_key(),
        MonsterKind::Zombie.attack_sheet()
    );

    // Walk away; the window still runs to its end.
    world.get_mut::<MapPosition>(p).unwrap().pos = Vector2 { x: 1500.0, y: 100.0 };
    for _ in 0..29 {
        tick_gameplay(&mut world);
        assert!(world.get::<Monster>(m).unwrap().is_attacking());
    }

    // T+80
    tick_gameplay(&mut world);
    let monster = world.get::<Monster>(m).unwrap();
    assert_eq!(monster.state, MonsterState::Chasing);
    assert_eq!(player(&world, p).health, 4);
    assert_eq!(
        world.get::<FrameSequence>(m).unwrap().sheet_key(),
        MonsterKind::Zombie.walk_sheet()
    );
}

#[test]
fn attack_pose_and_recovery_keep_right_facing() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, 500.0, 500.0);
    // Left of the player: chases right, turning away from the native art.
    let m = spawn_monster(&mut world, 0, 3, 340.0, 500.0);

    let mut engaged = false;
    for _ in 0..20 {
        tick_gameplay(&mut world);
        if world.get::<Monster>(m).unwrap().is_attacking() {
            engaged = true;
            break;
        }
    }
    assert!(engaged);
    assert_eq!(world.get::<Monster>(m).unwrap().facing, Facing::Right);
    assert!(world.get::<FrameSequence>(m).unwrap().is_flipped());

    for _ in 0..50 {
        tick_gameplay(&mut world);
    }
    assert_eq!(player(&world, p).health, 4);
    let frames = world.get::<FrameSequence>(m).unwrap();
    assert_eq!(frames.sheet_key(), MonsterKind::Zombie.attack_sheet());
    assert!(frames.is_flipped());

    for _ in 0..30 {
        tick_gameplay(&mut world);
    }
    assert_eq!(world.get::<Monster>(m).unwrap().state, MonsterState::Chasing);
    let frames = world.get::<FrameSequence>(m).unwrap();
    assert_eq!(frames.sheet_key(), MonsterKind::Zombie.walk_sheet());
    assert!(frames.is_flipped());
}

#[test]
fn monster_blow_misses_when_contact_is_lost() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, 500.0, 500.0);
    let m = spawn_monster(&mut world, 0, 3, 500.0, 500.0);

    tick_gameplay(&mut world);
    world.get_mut::<MapPosition>(p).unwrap().pos = Vector2 { x: 1500.0, y: 100.0 };
    for _ in 0..50 {
        tick_gameplay(&mut world);
    }
    assert_eq!(player(&world, p).health, 5);
    assert_eq!(
        world.get::<FrameSequence>(m).unwrap().sheet_key(),
        MonsterKind::Zombie.walk_sheet()
    );
}

#[test]
fn chasing_monster_steps_toward_player() {
    let mut world = make_world(RoomDirector::standard());
    spawn_player(&mut world, 100.0, 900.0);
    let m = spawn_monster(&mut world, 0, 3, 1000.0, 100.0);

    tick_gameplay(&mut world);

    let pos = world.get::<MapPosition>(m).unwrap().pos;
    assert_eq!((pos.x, pos.y), (997.0, 103.0));
    assert_eq!(world.get::<Monster>(m).unwrap().facing, Facing::Left);
}

#[test]
fn monsters_of_other_rooms_are_frozen() {
    let mut world = make_world(RoomDirector::standard());
    spawn_player(&mut world, 100.0, 900.0);
    let m = spawn_monster(&mut world, 2, 3, 1000.0, 100.0);

    tick_gameplay(&mut world);

    let pos = world.get::<MapPosition>(m).unwrap().pos;
    assert_eq!((pos.x, pos.y), (1000.0, 100.0));
    assert_eq!(world.get::<FrameSequence>(m).unwrap().cursor(), 0);
}

#[test]
fn second_click_during_attack_is_ignored() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, 500.0, 500.0);
    {
        let mut q = world.query::<(&mut Player, &mut FrameSequence)>();
        let (mut player, mut frames) = q.single_mut(&mut world).unwrap();
        player.steer(Facing::Right, &mut frames);
        player.release(Facing::Right);
    }
    // In the sweep path: (500 + j, 500 + j) enters at j = 100.
    let m = spawn_monster(&mut world, 0, 3, 600.0, 600.0);

    set_attack_input(&mut world, true);
    tick_gameplay(&mut world);
    assert!(player(&world, p).attacking);
    assert_eq!(world.get::<Monster>(m).unwrap().hp, 2);
    assert_eq!(
        world.get::<FrameSequence>(p).unwrap().sheet_key(),
        keys::PLAYER_ATTACK
    );

    for _ in 0..4 {
        set_attack_input(&mut world, true);
        tick_gameplay(&mut world);
    }
    // Release and click again inside the window.
    set_attack_input(&mut world, false);
    tick_gameplay(&mut world);
    set_attack_input(&mut world, true);
    tick_gameplay(&mut world);
    assert_eq!(world.get::<Monster>(m).unwrap().hp, 2);
    assert_eq!(player(&world, p).attack_ticks, 7);

    for _ in 0..13 {
        set_attack_input(&mut world, true);
        tick_gameplay(&mut world);
    }
    assert!(player(&world, p).attacking);

    // Tick 21 after the click ends the attack.
    tick_gameplay(&mut world);
    let state = player(&world, p);
    assert!(!state.attacking);
    assert_eq!(state.facing, Facing::Right);
    let frames = world.get::<FrameSequence>(p).unwrap();
    assert_eq!(frames.sheet_key(), keys::PLAYER);
    assert!(frames.is_flipped());
}

#[test]
fn killing_blow_removes_monster_in_same_tick() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, 500.0, 500.0);
    // Facing left: sweep from (650, 500) along (650 - j, 500 + j).
    let m = spawn_monster(&mut world, 0, 1, 420.0, 600.0);

    set_attack_input(&mut world, true);
    tick_gameplay(&mut world);

    assert!(world.get::<Monster>(m).is_none());
    assert_eq!(player(&world, p).health, 5);
}

#[test]
fn dead_monster_is_never_updated() {
    let mut world = make_world(RoomDirector::standard());
    spawn_player(&mut world, 500.0, 500.0);
    let m = spawn_monster(&mut world, 0, 0, 1000.0, 100.0);

    tick_gameplay(&mut world);

    assert!(world.get::<Monster>(m).is_none());
    assert_eq!(monsters_in_room(&mut world, 0), 0);
}

#[test]
fn one_flip_per_reversal_while_keys_stay_held() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, 500.0, 500.0);
    let flipped = |world: &World| world.get::<FrameSequence>(p).unwrap().is_flipped();

    world.resource_mut::<InputState>().left.update(true);
    tick_control(&mut world);
    assert!(!flipped(&world));

    {
        let mut input = world.resource_mut::<InputState>();
        input.left.update(true);
        input.right.update(true);
    }
    tick_control(&mut world);
    assert!(flipped(&world));
    assert_eq!(player(&world, p).horizontal, Some(Facing::Right));

    for _ in 0..10 {
        {
            let mut input = world.resource_mut::<InputState>();
            input.left.update(true);
            input.right.update(true);
        }
        tick_control(&mut world);
        assert!(flipped(&world));
    }

    // Let go of right while left is still down: back to left, one flip.
    {
        let mut input = world.resource_mut::<InputState>();
        input.left.update(true);
        input.right.update(false);
    }
    tick_control(&mut world);
    assert!(!flipped(&world));
    assert_eq!(player(&world, p).horizontal, Some(Facing::Left));
}

#[test]
fn hearts_track_health() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, 500.0, 500.0);
    for slot in 0..5 {
        world.spawn((Heart { slot }, StaticImage::new(keys::HEART, 128.0, 128.0)));
    }

    for health in (0..=5).rev() {
        world.get_mut::<Player>(p).unwrap().health = health;
        tick_hearts(&mut world);
        let mut q = world.query::<(&Heart, &StaticImage)>();
        let images: Vec<(usize, String)> = q
            .iter(&world)
            .map(|(h, i)| (h.slot, i.tex_key.to_string()))
            .collect();
        assert_eq!(images.len(), 5);
        let broken = images
            .iter()
            .filter(|(_, key)| key == keys::HEART_BROKEN)
            .count();
        assert_eq!(broken as i32, 5 - health);
        for (slot, key) in images {
            assert_eq!(key == keys::HEART_BROKEN, slot as i32 >= health);
        }
    }
}

#[test]
fn player_death_requests_game_over() {
    let mut world = make_world(RoomDirector::standard());
    let p = spawn_player(&mut world, 500.0, 500.0);
    world.get_mut::<Player>(p).unwrap().health = 0;

    tick_gameplay(&mut world);

    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::GameOver)
    );
}

#[test]
fn clearing_boss_room_requests_victory() {
    let mut world = make_world(RoomDirector::new(&[RoomKind::Start, RoomKind::Boss]));
    let p = spawn_player(&mut world, 1785.0, 100.0);
    world.get_mut::<Player>(p).unwrap().horizontal = Some(Facing::Right);

    tick_gameplay(&mut world);
    assert_eq!(world.resource::<RoomDirector>().current_index(), 1);
    world.get_mut::<Player>(p).unwrap().horizontal = None;

    let bosses: Vec<Entity> = {
        let mut q = world.query::<(Entity, &Monster)>();
        q.iter(&world)
            .filter(|(_, m)| m.kind == MonsterKind::Boss)
            .map(|(e, _)| e)
            .collect()
    };
    assert_eq!(bosses.len(), 1);
    assert_eq!(world.get::<Monster>(bosses[0]).unwrap().hp, 10);
    assert_eq!(world.resource::<NextGameState>().get(), &NextGameStates::Unchanged);

    world.get_mut::<Monster>(bosses[0]).unwrap().hp = 0;
    tick_gameplay(&mut world);

    assert!(world.resource::<RoomDirector>().is_won());
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Victory)
    );
}

#[test]
fn gameplay_is_paused_outside_playing_state() {
    let mut world = make_world(RoomDirector::standard());
    world.resource_mut::<GameState>().set(GameStates::Title);
    let m = spawn_monster(&mut world, 0, 3, 1000.0, 100.0);
    spawn_player(&mut world, 100.0, 900.0);

    tick_gameplay(&mut world);

    let pos = world.get::<MapPosition>(m).unwrap().pos;
    assert_eq!((pos.x, pos.y), (1000.0, 100.0));
}

#[test]
fn clicking_hovered_button_requests_its_state() {
    let mut world = make_world(RoomDirector::standard());
    let b = world
        .spawn((
            Button::new(ButtonAction::Exit, "Exit"),
            StaticImage::new(keys::BUTTON, 384.0, 96.0),
            BoxCollider::new(384.0, 96.0),
            MapPosition::new(100.0, 100.0),
        ))
        .id();

    world.resource_mut::<InputState>().pointer = Vector2 { x: 150.0, y: 150.0 };
    tick_buttons(&mut world);
    assert!(world.get::<Button>(b).unwrap().hovered);
    assert_eq!(
        world.get::<StaticImage>(b).unwrap().tex_key.as_ref(),
        keys::BUTTON_PRESSED
    );
    assert_eq!(world.resource::<NextGameState>().get(), &NextGameStates::Unchanged);

    set_attack_input(&mut world, true);
    tick_buttons(&mut world);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Quitting)
    );
}
