//! Room Director.
//!
//! Rooms are chained left to right. The director owns the room list and the
//! current index, decides whether the player may leave the current room and
//! what has to be spawned on entry. It never touches entities itself:
//! callers act on the returned [`Transition`] and report the live monster
//! count back through [`RoomDirector::note_live_monsters`].

use bevy_ecs::prelude::Resource;
use log::{debug, info};

/// Fewest and most regular monsters a hostile room is populated with.
pub const MIN_ROOM_MONSTERS: u32 = 1;
pub const MAX_ROOM_MONSTERS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    /// Where a run begins. Starts cleared.
    Start,
    Hostile,
    /// Terminal room holding the boss.
    Boss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub index: usize,
    pub kind: RoomKind,
    pub cleared: bool,
    /// Set once monsters have been spawned for the room.
    pub populated: bool,
}

impl Room {
    pub fn new(index: usize, kind: RoomKind) -> Self {
        Self {
            index,
            kind,
            cleared: kind == RoomKind::Start,
            populated: false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == RoomKind::Boss
    }
}

/// Edge of the current room the player walked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Monsters to create for a room being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnPlan {
    Nothing,
    /// That many regular monsters.
    Monsters(u32),
    Boss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No room on that side.
    OutOfRange,
    /// Monsters of the current room are still alive.
    RoomNotCleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Denied(DenyReason),
    Entered { index: usize, spawn: SpawnPlan },
}

impl Transition {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Transition::Entered { .. })
    }
}

#[derive(Resource, Debug, Clone)]
pub struct RoomDirector {
    rooms: Vec<Room>,
    current: usize,
}

impl Default for RoomDirector {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoomDirector {
    /// Director over `layout`, starting in room 0.
    ///
    /// An empty layout falls back to a single start room.
    pub fn new(layout: &[RoomKind]) -> Self {
        let rooms: Vec<Room> = if layout.is_empty() {
            vec![Room::new(0, RoomKind::Start)]
        } else {
            layout
                .iter()
                .enumerate()
                .map(|(index, kind)| Room::new(index, *kind))
                .collect()
        };
        Self { rooms, current: 0 }
    }

    /// `[Start, Hostile, Hostile, Boss]`.
    pub fn standard() -> Self {
        Self::new(&[
            RoomKind::Start,
            RoomKind::Hostile,
            RoomKind::Hostile,
            RoomKind::Boss,
        ])
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Room {
        &self.rooms[self.current]
    }

    /// Index of the neighbour on `side`, if it exists.
    pub fn target_index(&self, side: Side) -> Option<usize> {
        let target = match side {
            Side::Left => self.current.checked_sub(1)?,
            Side::Right => self.current + 1,
        };
        (target < self.rooms.len()).then_some(target)
    }

    /// Whether the current room lets the player out.
    pub fn can_leave(&self) -> bool {
        let room = self.current();
        room.cleared || room.is_terminal()
    }

    /// Try to walk through `side` of the current room.
    ///
    /// All checks run before anything changes, so a denied request leaves the
    /// director untouched. A room is populated only the first time it is
    /// entered.
    pub fn request_transition(&mut self, side: Side, rng: &mut fastrand::Rng) -> Transition {
        let Some(target) = self.target_index(side) else {
            debug!("Room transition {:?} from {} denied: out of range", side, self.current);
            return Transition::Denied(DenyReason::OutOfRange);
        };
        if !self.can_leave() {
            debug!("Room transition {:?} from {} denied: room not cleared", side, self.current);
            return Transition::Denied(DenyReason::RoomNotCleared);
        }

        self.current = target;
        let room = &mut self.rooms[target];
        let spawn = if room.populated {
            SpawnPlan::Nothing
        } else {
            match room.kind {
                RoomKind::Start => SpawnPlan::Nothing,
                RoomKind::Hostile => {
                    SpawnPlan::Monsters(rng.u32(MIN_ROOM_MONSTERS..=MAX_ROOM_MONSTERS))
                }
                RoomKind::Boss => SpawnPlan::Boss,
            }
        };
        if spawn != SpawnPlan::Nothing {
            room.populated = true;
        }
        info!("Entered room {} ({:?}), spawning {:?}", target, room.kind, spawn);
        Transition::Entered {
            index: target,
            spawn,
        }
    }

    /// Flag a room as populated when its monsters were placed some other way.
    pub fn mark_populated(&mut self, index: usize) {
        if let Some(room) = self.rooms.get_mut(index) {
            room.populated = true;
        }
    }

    /// Report the number of live monsters in the current room.
    ///
    /// A populated room with none left becomes cleared. Returns `true` on the
    /// call that clears it.
    pub fn note_live_monsters(&mut self, count: usize) -> bool {
        let room = &mut self.rooms[self.current];
        if room.populated && !room.cleared && count == 0 {
            room.cleared = true;
            info!("Room {} cleared", room.index);
            return true;
        }
        false
    }

    /// True once the terminal room is current and cleared.
    pub fn is_won(&self) -> bool {
        let room = self.current();
        room.is_terminal() && room.cleared
    }
}
