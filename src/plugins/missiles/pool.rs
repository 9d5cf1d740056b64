//! Fixed-capacity missile arena.
//!
//! A `MissilePool` lives on its launcher entity. It owns a vector of slots (one per
//! missile ever created) and a LIFO list of free slot indices. Missiles refer back to
//! their slot by index (`PooledMissile`), never to the pool itself.
//!
//! # Invariants
//! - `slots.len() <= capacity`.
//! - Every slot is either `Free` or `InUse`.
//! - `free` holds exactly the indices of the `Free` slots, each once.
//!
//! Overflow policy: **reject**. Once every slot is in use, `acquire` returns
//! `PoolError::Exhausted` and the caller skips the spawn.

use avian3d::prelude::*;
use bevy::prelude::*;
use thiserror::Error;

use crate::common::layers::Layer;

/// Index of a missile slot inside its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Free,
    InUse,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    entity: Entity,
    state: SlotState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("missile pool exhausted ({capacity} in flight)")]
    Exhausted { capacity: usize },
    #[error("slot {0:?} does not exist in this pool")]
    UnknownSlot(SlotIndex),
    #[error("slot {0:?} is already free")]
    AlreadyReleased(SlotIndex),
}

/// Result of a successful acquire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquired {
    /// A pooled missile was reused; the caller must reinit it.
    Recycled(SlotIndex, Entity),
    /// The factory built a new missile for a fresh slot.
    Created(SlotIndex, Entity),
}

impl Acquired {
    #[inline]
    pub fn slot(self) -> SlotIndex {
        match self {
            Self::Recycled(slot, _) | Self::Created(slot, _) => slot,
        }
    }
}

#[derive(Component, Debug)]
pub struct MissilePool {
    slots: Vec<Slot>,
    free: Vec<SlotIndex>,
    capacity: usize,
}

impl MissilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Missiles created so far (free + in use).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn state(&self, slot: SlotIndex) -> Option<SlotState> {
        self.slots.get(slot.0).map(|s| s.state)
    }

    pub fn entity(&self, slot: SlotIndex) -> Option<Entity> {
        self.slots.get(slot.0).map(|s| s.entity)
    }

    /// All missiles owned by this pool, in slot order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slots.iter().map(|s| s.entity)
    }

    /// Take a free missile, or build one with `create` while under capacity.
    ///
    /// `create` receives the slot index the new missile will occupy.
    pub fn acquire(
        &mut self,
        create: impl FnOnce(SlotIndex) -> Entity,
    ) -> Result<Acquired, PoolError> {
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot.0];
            debug_assert_eq!(entry.state, SlotState::Free, "free list held an in-use slot");
            entry.state = SlotState::InUse;
            return Ok(Acquired::Recycled(slot, entry.entity));
        }

        if self.slots.len() >= self.capacity {
            return Err(PoolError::Exhausted { capacity: self.capacity });
        }

        let slot = SlotIndex(self.slots.len());
        let entity = create(slot);
        self.slots.push(Slot { entity, state: SlotState::InUse });
        Ok(Acquired::Created(slot, entity))
    }

    /// Pre-create up to `count` missiles straight into the free list.
    ///
    /// Stops at capacity. Returns how many were created.
    pub fn warm(&mut self, count: usize, mut create: impl FnMut(SlotIndex) -> Entity) -> usize {
        let room = self.capacity.saturating_sub(self.slots.len());
        let n = count.min(room);

        for _ in 0..n {
            let slot = SlotIndex(self.slots.len());
            let entity = create(slot);
            self.slots.push(Slot { entity, state: SlotState::Free });
            self.free.push(slot);
        }
        n
    }

    /// Return an in-use slot to the free list. Returns the missile entity.
    pub fn release(&mut self, slot: SlotIndex) -> Result<Entity, PoolError> {
        let entry = self
            .slots
            .get_mut(slot.0)
            .ok_or(PoolError::UnknownSlot(slot))?;

        if entry.state == SlotState::Free {
            return Err(PoolError::AlreadyReleased(slot));
        }

        entry.state = SlotState::Free;
        self.free.push(slot);
        Ok(entry.entity)
    }
}

#[inline]
pub fn active_missile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Missile, [Layer::World, Layer::Target])
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_missile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Missile, [] as [Layer; 0])
}
