use bitflags::bitflags;

use super::BombId;

bitflags! {
    /// Render bookkeeping carried by every decor and character.
    ///
    /// `MODIFIED` tells the view the object changed since the last render;
    /// `DELETED` tells it to drop the sprite.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ObjectFlags: u8 {
        const MODIFIED = 1 << 0;
        const DELETED  = 1 << 1;
    }
}

/// Content of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecorKind {
    /// Indestructible obstacle.
    Stone,
    /// Indestructible obstacle.
    Tree,
    /// Destructible obstacle.
    Box,
    Key,
    Heart,
    Princess,
    /// Changes the player's bomb range by the signed delta.
    BombRange(i32),
    /// Changes the player's bomb bag by the signed delta.
    BombNumber(i32),
    /// `offset` is the signed level jump taken when traversing.
    Door { locked: bool, offset: i32 },
    Bomb(BombId),
}

/// How a blast treats a cell holding a given decor kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlastEffect {
    /// Cell is affected, decor survives, blast keeps going.
    Pass,
    /// Decor is destroyed, blast keeps going.
    Destroy,
    /// Decor is destroyed, blast stops after this cell.
    DestroyAndStop,
    /// Decor survives, blast stops after this cell.
    Stop,
    /// Another bomb: detonate it too, blast keeps going.
    Chain,
}

impl DecorKind {
    /// Whether the player may step onto a cell holding this decor.
    pub const fn is_walkable(&self) -> bool {
        match self {
            DecorKind::Key
            | DecorKind::Heart
            | DecorKind::Princess
            | DecorKind::BombRange(_)
            | DecorKind::BombNumber(_) => true,
            DecorKind::Door { locked, .. } => !*locked,
            DecorKind::Stone | DecorKind::Tree | DecorKind::Box | DecorKind::Bomb(_) => false,
        }
    }

    pub const fn blast_effect(&self) -> BlastEffect {
        match self {
            DecorKind::Stone | DecorKind::Tree | DecorKind::Door { .. } => BlastEffect::Stop,
            DecorKind::Box => BlastEffect::DestroyAndStop,
            DecorKind::Key
            | DecorKind::Heart
            | DecorKind::BombRange(_)
            | DecorKind::BombNumber(_) => BlastEffect::Destroy,
            DecorKind::Princess => BlastEffect::Pass,
            DecorKind::Bomb(_) => BlastEffect::Chain,
        }
    }

    pub const fn is_bonus(&self) -> bool {
        matches!(
            self,
            DecorKind::Key
                | DecorKind::Heart
                | DecorKind::Princess
                | DecorKind::BombRange(_)
                | DecorKind::BombNumber(_)
        )
    }

    /// Short stable label for views and logs.
    pub const fn label(&self) -> &'static str {
        match self {
            DecorKind::Stone => "stone",
            DecorKind::Tree => "tree",
            DecorKind::Box => "box",
            DecorKind::Key => "key",
            DecorKind::Heart => "heart",
            DecorKind::Princess => "princess",
            DecorKind::BombRange(delta) if *delta < 0 => "bomb_range_dec",
            DecorKind::BombRange(_) => "bomb_range_inc",
            DecorKind::BombNumber(delta) if *delta < 0 => "bomb_number_dec",
            DecorKind::BombNumber(_) => "bomb_number_inc",
            DecorKind::Door { locked: true, .. } => "door_closed",
            DecorKind::Door { offset, .. } if *offset < 0 => "door_prev",
            DecorKind::Door { .. } => "door_next",
            DecorKind::Bomb(_) => "bomb",
        }
    }
}

/// Entity occupying one grid cell.
///
/// Decor never stores its own position; the grid key is the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decor {
    kind: DecorKind,
    flags: ObjectFlags,
}

impl Decor {
    /// New decor starts modified so the first render picks it up.
    pub fn new(kind: DecorKind) -> Self {
        Self {
            kind,
            flags: ObjectFlags::MODIFIED,
        }
    }

    pub fn kind(&self) -> DecorKind {
        self.kind
    }

    pub fn flags(&self) -> ObjectFlags {
        self.flags
    }

    pub fn is_modified(&self) -> bool {
        self.flags.contains(ObjectFlags::MODIFIED)
    }

    pub fn is_deleted(&self) -> bool {
        self.flags.contains(ObjectFlags::DELETED)
    }

    pub fn set_modified(&mut self) {
        self.flags.insert(ObjectFlags::MODIFIED);
    }

    pub fn clear_modified(&mut self) {
        self.flags.remove(ObjectFlags::MODIFIED);
    }

    /// Marks the decor consumed or destroyed.
    pub fn mark_deleted(&mut self) {
        self.flags.insert(ObjectFlags::DELETED | ObjectFlags::MODIFIED);
    }

    /// Unlocks a door. Returns false if the decor is not a locked door.
    pub fn unlock(&mut self) -> bool {
        match &mut self.kind {
            DecorKind::Door { locked, .. } if *locked => {
                *locked = false;
                self.flags.insert(ObjectFlags::MODIFIED);
                true
            }
            _ => false,
        }
    }
}
