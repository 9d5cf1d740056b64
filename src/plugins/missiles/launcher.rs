//! Launchers: spawn cadence, default target, pool warm-up.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::allocator::inactive_missile_bundle;
use super::components::{Missile, Origin};
use super::messages::{LauncherAction, LauncherCommand, SpawnMissileRequest};
use super::pool::MissilePool;

#[derive(Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    pub capacity: usize,
    pub cooldown_secs: f32,
    pub target: Option<Entity>,
    pub spawning: bool,
    /// Missiles created inactive as soon as the pool appears.
    pub prewarm: usize,
    pub missile: Missile,
}

impl LauncherConfig {
    pub fn from_tunables(tunables: &Tunables, target: Option<Entity>) -> Self {
        Self {
            capacity: tunables.launcher_capacity,
            cooldown_secs: tunables.launcher_cooldown,
            target,
            spawning: tunables.launcher_spawning,
            prewarm: tunables.launcher_prewarm,
            missile: Missile {
                speed: tunables.missile_speed,
                turn_rate_degrees: tunables.missile_turn_rate,
                launch_force: tunables.missile_launch_force,
            },
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::from_tunables(&Tunables::default(), None)
    }
}

#[derive(Component, Debug, Clone)]
pub struct MissileLauncher {
    pub cooldown_secs: f32,
    pub target: Option<Entity>,
    pub spawning: bool,
    pub prewarm: usize,
    /// Template copied into every missile this launcher creates.
    pub missile: Missile,
    timer: f32,
}

impl MissileLauncher {
    #[inline]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Advance the cooldown timer. Returns `true` when a spawn is due.
    ///
    /// The timer restarts from exactly zero after a spawn; overshoot is dropped,
    /// so a long frame delays the next spawn rather than causing a catch-up burst.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.spawning {
            return false;
        }

        self.timer += dt;
        if self.timer >= self.cooldown_secs {
            self.timer = 0.0;
            return true;
        }
        false
    }

    pub fn apply(&mut self, action: LauncherAction) {
        match action {
            LauncherAction::ToggleSpawning => self.spawning = !self.spawning,
            LauncherAction::SetSpawning(on) => self.spawning = on,
            LauncherAction::SetTarget(target) => self.target = target,
        }
    }
}

/// Build the launcher side of a pool: cadence/target plus an empty arena.
pub fn configure(config: LauncherConfig) -> (MissileLauncher, MissilePool) {
    (
        MissileLauncher {
            cooldown_secs: config.cooldown_secs,
            target: config.target,
            spawning: config.spawning,
            prewarm: config.prewarm,
            missile: config.missile,
            timer: 0.0,
        },
        MissilePool::new(config.capacity),
    )
}

pub fn apply_launcher_commands(
    mut reader: MessageReader<LauncherCommand>,
    mut q: Query<&mut MissileLauncher>,
) {
    for cmd in reader.read() {
        let Ok(mut launcher) = q.get_mut(cmd.launcher) else {
            debug!("LauncherCommand for missing launcher {:?}", cmd.launcher);
            continue;
        };
        launcher.apply(cmd.action);
    }
}

/// Producer: turn elapsed time into spawn requests.
pub fn tick_launchers(
    time: Res<Time>,
    mut q: Query<(Entity, &mut MissileLauncher)>,
    mut writer: MessageWriter<SpawnMissileRequest>,
) {
    let dt = time.delta_secs();

    for (launcher, mut state) in &mut q {
        if state.advance(dt) {
            writer.write(SpawnMissileRequest { launcher });
        }
    }
}

/// Pre-create `prewarm` inactive missiles for newly added pools.
pub fn warm_launcher_pools(
    mut commands: Commands,
    mut q: Query<(Entity, &Transform, &MissileLauncher, &mut MissilePool), Added<MissilePool>>,
) {
    for (launcher, tf, state, mut pool) in &mut q {
        if state.prewarm == 0 {
            continue;
        }

        let origin = Origin::from_transform(tf);
        let created = pool.warm(state.prewarm, |slot| {
            commands
                .spawn(inactive_missile_bundle(launcher, slot, origin, state.missile))
                .id()
        });

        debug!("Warmed launcher {launcher:?} with {created} missiles");
    }
}
