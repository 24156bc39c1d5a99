//! Game engine — the core of each arcade game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! drains the scheduler, runs all systems, and produces `GameSnapshot`s.
//! Completely headless (no rendering dependency), enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arcade_core::commands::{InputSnapshot, PlayerCommand};
use arcade_core::components::{Player, Projectile};
use arcade_core::constants::*;
use arcade_core::enums::{EngineStatus, GameKind, Outcome, Phase};
use arcade_core::events::GameEvent;
use arcade_core::state::{GameSnapshot, RunState};
use arcade_core::types::{Position, SimTime};

use crate::games::{self, moonbase::MissionState};
use crate::scheduler::{Scheduler, TimerAction};
use crate::systems;
use crate::world_setup;

/// Configuration for a new game engine.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Which game to run.
    pub kind: GameKind,
    /// RNG seed for determinism. Same seed = same spawn pattern.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            kind: GameKind::Shooter,
            seed: 42,
        }
    }
}

/// The simulation engine for one game instance. Owns all run state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    kind: GameKind,
    status: EngineStatus,
    run: RunState,
    rng: ChaCha8Rng,
    scheduler: Scheduler,
    mission: MissionState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    due_actions: Vec<TimerAction>,
    events: Vec<GameEvent>,
    /// Fire state from the previous tick; firing is edge-triggered.
    prev_fire: bool,
}

impl GameEngine {
    /// Create a new engine with the given config. Idle until `StartGame`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            kind: config.kind,
            status: EngineStatus::default(),
            run: RunState::new(config.kind),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            scheduler: Scheduler::new(),
            mission: MissionState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            due_actions: Vec::new(),
            events: Vec::new(),
            prev_fire: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick given this frame's input
    /// snapshot, and return the resulting snapshot.
    pub fn tick(&mut self, input: InputSnapshot) -> GameSnapshot {
        self.process_commands();

        if self.status == EngineStatus::Live && self.run.outcome.is_running() {
            self.run_systems(&input);
            self.time.advance();
        }
        self.prev_fire = input.fire;

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, &self.time, self.kind, self.status, &self.run, events)
    }

    /// Which game this engine runs.
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// Current engine status.
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Current run state.
    pub fn run(&self) -> &RunState {
        &self.run
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.status == EngineStatus::Idle {
                    self.start_run();
                }
            }
            PlayerCommand::Restart => {
                // Click-to-restart: only valid on an end screen, and
                // resets the run wholesale.
                if self.status == EngineStatus::Live && self.run.outcome.is_terminal() {
                    self.start_run();
                }
            }
            PlayerCommand::Pause => {
                if self.status == EngineStatus::Live {
                    self.status = EngineStatus::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.status == EngineStatus::Paused {
                    self.status = EngineStatus::Live;
                }
            }
        }
    }

    /// Build a fresh world and run state and arm the game's timers.
    fn start_run(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.run = RunState::new(self.kind);
        self.scheduler.clear();
        self.mission = MissionState::default();
        self.events.push(GameEvent::PhaseChanged {
            phase: self.run.phase,
        });

        match self.kind {
            GameKind::Shooter => {
                games::shooter::start(&mut self.world, &mut self.scheduler, self.time.tick);
            }
            GameKind::Moonbase => {
                games::moonbase::start(
                    &mut self.world,
                    &mut self.rng,
                    &mut self.scheduler,
                    self.time.tick,
                );
            }
            GameKind::Lander => games::lander::start(&mut self.world),
        }

        self.status = EngineStatus::Live;
    }

    /// Run all systems in order for one tick.
    fn run_systems(&mut self, input: &InputSnapshot) {
        // 1. Scheduled events (spawns, phase delays)
        let mut due = std::mem::take(&mut self.due_actions);
        due.clear();
        self.scheduler.drain_due(self.time.tick, &mut due);
        for action in due.drain(..) {
            self.apply_action(action);
        }
        self.due_actions = due;

        // 2. Steering / thrust from the input snapshot
        match self.kind {
            GameKind::Shooter | GameKind::Moonbase => {
                systems::movement::steer(&mut self.world, input);
                if input.fire && !self.prev_fire {
                    self.try_fire();
                }
            }
            GameKind::Lander => {
                systems::movement::lander_physics(&mut self.world, input, &mut self.events);
            }
        }

        // 3. Kinematic integration + field clamping
        systems::movement::integrate(&mut self.world);
        systems::movement::clamp_to_field(&mut self.world);

        // 4. Collision resolution over the game's registered pairs
        match self.kind {
            GameKind::Shooter => {
                systems::collision::projectiles_vs_hostiles(
                    &mut self.world,
                    &mut self.run,
                    &mut self.events,
                    &mut self.despawn_buffer,
                );
                systems::collision::player_vs_hostiles(
                    &mut self.world,
                    SHOOTER_HOSTILE_DAMAGE,
                    &mut self.run,
                    &mut self.events,
                    &mut self.despawn_buffer,
                );
            }
            GameKind::Moonbase => {
                systems::collision::projectiles_vs_hostiles(
                    &mut self.world,
                    &mut self.run,
                    &mut self.events,
                    &mut self.despawn_buffer,
                );
                systems::collision::player_vs_hostiles(
                    &mut self.world,
                    ASTEROID_DAMAGE,
                    &mut self.run,
                    &mut self.events,
                    &mut self.despawn_buffer,
                );
                systems::collision::hostiles_vs_moonbase(
                    &mut self.world,
                    MOONBASE_IMPACT_DAMAGE,
                    &mut self.run,
                    &mut self.events,
                    &mut self.despawn_buffer,
                );
            }
            GameKind::Lander => {}
        }

        // 5. Out-of-field culling (no score effect)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 6. Per-game rules: phase progression, win/lose evaluation.
        // A loss fired during collision resolution suspends these too:
        // a lost run must not accrue distance, change phase, or spawn
        // structures on its final tick.
        if self.run.outcome.is_running() {
            match self.kind {
                GameKind::Shooter => {}
                GameKind::Moonbase => games::moonbase::update(
                    &mut self.world,
                    &mut self.run,
                    &mut self.mission,
                    &mut self.scheduler,
                    &mut self.events,
                    self.time.tick,
                ),
                GameKind::Lander => games::lander::update(&mut self.world, &mut self.run),
            }
        }

        // 7. Terminal transition: emit the end event once and cancel all
        // pending timers so nothing fires against the frozen world.
        match self.run.outcome {
            Outcome::Running => {}
            Outcome::Won => {
                self.events.push(GameEvent::RunWon {
                    score: self.run.score,
                });
                self.scheduler.clear();
            }
            Outcome::Lost(reason) => {
                self.events.push(GameEvent::RunLost { reason });
                self.scheduler.clear();
            }
        }
    }

    /// Apply one due scheduler action.
    fn apply_action(&mut self, action: TimerAction) {
        match action {
            TimerAction::SpawnHostile => {
                // Spawns never populate a frozen world.
                if !self.run.outcome.is_running() {
                    return;
                }
                let table = match self.kind {
                    GameKind::Shooter => games::shooter::hostile_spawn(),
                    GameKind::Moonbase => games::moonbase::hostile_spawn(self.run.phase),
                    GameKind::Lander => return,
                };
                world_setup::spawn_hostile(&mut self.world, &mut self.rng, &table);
            }
            TimerAction::AdvancePhase(Phase::Travel) => {
                games::moonbase::enter_travel(
                    &mut self.world,
                    &mut self.run,
                    &mut self.mission,
                    &mut self.scheduler,
                    &mut self.events,
                    self.time.tick,
                    &mut self.despawn_buffer,
                );
            }
            TimerAction::AdvancePhase(_) => {}
        }
    }

    /// Spawn a projectile from the player's muzzle, respecting the pool cap.
    fn try_fire(&mut self) {
        let (speed, cap) = match self.kind {
            GameKind::Shooter => (SHOOTER_PROJECTILE_SPEED, SHOOTER_PROJECTILE_CAP),
            GameKind::Moonbase => (MOONBASE_PROJECTILE_SPEED, MOONBASE_PROJECTILE_CAP),
            GameKind::Lander => return,
        };

        let live = {
            let mut query = self.world.query::<&Projectile>();
            query.iter().count()
        };
        if live >= cap {
            return;
        }

        let muzzle = self
            .world
            .query::<(&Player, &Position)>()
            .iter()
            .next()
            .map(|(_, (_p, pos))| Position::new(pos.x, pos.y - PROJECTILE_MUZZLE_OFFSET));
        if let Some(muzzle) = muzzle {
            world_setup::spawn_projectile(&mut self.world, muzzle, speed);
        }
    }
}

#[cfg(test)]
impl GameEngine {
    /// Mutable run state access for scenario setup.
    pub fn run_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    /// Number of live (non-cancelled) scheduled timers.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Place the player at an exact position/velocity.
    pub fn set_player_kinematics(&mut self, x: f64, y: f64, vx: f64, vy: f64) {
        use arcade_core::types::Velocity;
        let entity = self
            .world
            .query::<&Player>()
            .iter()
            .next()
            .map(|(entity, _)| entity);
        if let Some(entity) = entity {
            if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                *pos = Position::new(x, y);
            }
            if let Ok(mut vel) = self.world.get::<&mut Velocity>(entity) {
                *vel = Velocity::new(vx, vy);
            }
        }
    }

    /// Set the lander's remaining fuel.
    pub fn set_player_fuel(&mut self, remaining: f64) {
        use arcade_core::components::FuelTank;
        for (_entity, fuel) in self.world.query_mut::<&mut FuelTank>() {
            fuel.remaining = remaining;
        }
    }

    /// Current player hull, if the game tracks one.
    pub fn player_health(&self) -> Option<f64> {
        use arcade_core::components::Health;
        self.world
            .query::<(&Player, &Health)>()
            .iter()
            .next()
            .map(|(_, (_p, health))| health.current)
    }

    /// Spawn a hostile at an exact position/velocity (bypasses the RNG).
    pub fn spawn_hostile_at(&mut self, x: f64, y: f64, vx: f64, vy: f64) -> hecs::Entity {
        use arcade_core::components::{Body, Hostile, Rotation, Spin};
        use arcade_core::types::Velocity;
        self.world.spawn((
            Hostile,
            Position::new(x, y),
            Velocity::new(vx, vy),
            Rotation::default(),
            Spin::default(),
            Body {
                half_w: SHOOTER_HOSTILE_HALF,
                half_h: SHOOTER_HOSTILE_HALF,
            },
        ))
    }

    /// Spawn a projectile at an exact position (bypasses the muzzle).
    pub fn spawn_projectile_at(&mut self, x: f64, y: f64, vy: f64) -> hecs::Entity {
        world_setup::spawn_projectile(&mut self.world, Position::new(x, y), -vy)
    }

    /// Despawn any entity directly (idempotence checks).
    pub fn despawn(&mut self, entity: hecs::Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }
}
