use bevy::prelude::*;

use super::pool::SlotIndex;

/// Marker for anything a missile may home in on.
#[derive(Component)]
pub struct Target;

/// Offset from a target's origin to the point missiles should aim at
/// (e.g. the centre of a character capsule rather than its feet).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AimOffset(pub Vec3);

/// Pool membership: which launcher owns this missile and which slot it occupies.
///
/// The launcher is the single subscriber of the missile's retirement signal.
/// It is fixed when the factory creates the missile and never rewired.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PooledMissile {
    pub launcher: Entity,
    pub slot: SlotIndex,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissileState {
    /// In the pool: hidden, collides with nothing, not guided.
    #[default]
    Inactive,
    Active,
    /// Retirement signalled, waiting for the pool commit.
    PendingReturn,
}

/// Flight configuration.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Missile {
    /// Units/second along the missile's forward axis.
    pub speed: f32,
    /// Maximum orientation change, degrees/second.
    pub turn_rate_degrees: f32,
    /// Force along the missile's up axis for the first fixed step of a flight.
    pub launch_force: f32,
}

impl Default for Missile {
    fn default() -> Self {
        Self {
            speed: 1.0,
            turn_rate_degrees: 360.0,
            launch_force: 10.0,
        }
    }
}

impl Missile {
    #[inline]
    pub fn max_turn_radians(&self, dt: f32) -> f32 {
        (self.turn_rate_degrees * dt).to_radians()
    }
}

/// Frame the missile was created in. Set once by the factory; there is no mutator.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    translation: Vec3,
    rotation: Quat,
}

impl Origin {
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self { translation, rotation }
    }

    pub fn from_transform(tf: &Transform) -> Self {
        Self::new(tf.translation, tf.rotation)
    }

    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }
}

/// Non-owning handle to the entity being chased. Checked for validity every tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomingTarget(pub Option<Entity>);

/// Impulse queued by a reinit, consumed on the next fixed step.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct LaunchImpulse(pub Vec3);

/// Where a reinit places the missile.
///
/// Kept explicit so "use the origin" can't be confused with "spawn at `Vec3::ZERO`".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SpawnPoint {
    #[default]
    Origin,
    At(Vec3),
}

/// Values a reinit writes into a missile's components.
///
/// Computed up front so the allocator and the factory apply the same reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reinit {
    pub translation: Vec3,
    pub rotation: Quat,
    pub impulse: Vec3,
    pub target: Option<Entity>,
}

impl Reinit {
    pub fn new(origin: &Origin, at: SpawnPoint, target: Option<Entity>, missile: &Missile) -> Self {
        let translation = match at {
            SpawnPoint::Origin => origin.translation(),
            SpawnPoint::At(p) => p,
        };
        let rotation = origin.rotation();

        Self {
            translation,
            rotation,
            impulse: rotation * Vec3::Y * missile.launch_force,
            target,
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_rotation(self.rotation)
    }
}
