//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameSnapshot`s. Completely headless,
//! enabling deterministic testing: the same seed reproduces the same
//! session.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starsurge_core::commands::PlayerCommand;
use starsurge_core::components::OwnShip;
use starsurge_core::constants::{DT, SKILL_POINTS_PER_KILL};
use starsurge_core::enums::{GamePhase, ObjectiveKind};
use starsurge_core::events::GameEvent;
use starsurge_core::ship::{ShipState, ShipStats};
use starsurge_core::state::GameSnapshot;
use starsurge_core::types::{SimTime, UnitId};
use starsurge_core::weapon::Loadout;

use starsurge_ai::AiController;
use starsurge_procgen::{GeneratorConfig, ObjectiveManager, SystemLayout};
use starsurge_skills::factory::basic_ship_tree;
use starsurge_skills::SkillTree;

use crate::systems;
use crate::systems::spawner::{EnemySpawner, SpawnerConfig};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Difficulty scalar fed to objective and level generation.
    pub difficulty: f64,
    pub generator: GeneratorConfig,
    pub spawner: SpawnerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: 1.0,
            generator: GeneratorConfig::default(),
            spawner: SpawnerConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    difficulty: f64,
    generator_config: GeneratorConfig,
    rng: ChaCha8Rng,
    next_unit: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    skills: SkillTree,
    player_base_stats: ShipStats,
    objectives: ObjectiveManager,
    spawner: EnemySpawner,
    layout: Option<SystemLayout>,
}

impl GameEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            difficulty: config.difficulty,
            generator_config: config.generator,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_unit: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            skills: basic_ship_tree(),
            player_base_stats: ShipStats::default(),
            objectives: ObjectiveManager::new(),
            spawner: EnemySpawner::new(config.spawner),
            layout: None,
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

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        let objectives = self.objectives.objectives().iter().map(|o| o.view()).collect();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.skills.skill_points(),
            objectives,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn skills(&self) -> &SkillTree {
        &self.skills
    }

    pub fn objectives(&self) -> &ObjectiveManager {
        &self.objectives
    }

    /// The generated system layout, once a game has started.
    pub fn layout(&self) -> Option<&SystemLayout> {
        self.layout.as_ref()
    }

    pub fn spawner(&self) -> &EnemySpawner {
        &self.spawner
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
            PlayerCommand::NewGame { difficulty } => self.start_game(difficulty),
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Thrust { direction } => {
                if self.phase == GamePhase::Active {
                    self.player_command(|ship, _now, events| ship.thrust(direction, DT, events));
                }
            }
            PlayerCommand::Turn { amount } => {
                if self.phase == GamePhase::Active {
                    self.player_command(|ship, _now, events| ship.turn(amount, DT, events));
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Active {
                    self.player_command(|ship, now, events| {
                        ship.fire(now, events);
                    });
                }
            }
            PlayerCommand::DamageUnit { unit, amount } => {
                if self.phase == GamePhase::Active {
                    self.damage_unit(unit, amount);
                }
            }
            PlayerCommand::AssignTarget { unit, target } => {
                self.assign_target(unit, target);
            }
            PlayerCommand::UnlockSkill { id } => {
                if self.skills.unlock(&id, &mut self.events) {
                    self.apply_skill_effects();
                }
            }
            PlayerCommand::LevelUpSkill { id } => {
                if self.skills.level_up(&id, &mut self.events) {
                    self.apply_skill_effects();
                }
            }
            PlayerCommand::GrantSkillPoints { amount } => {
                self.skills.grant_points(amount, &mut self.events);
            }
            PlayerCommand::StartSpawning => self.spawner.start(),
            PlayerCommand::StopSpawning => self.spawner.stop(),
            PlayerCommand::SpawnWave {
                fighters,
                bombers,
                scouts,
                center,
                radius,
            } => {
                if self.phase == GamePhase::Active {
                    let target = systems::ai::candidate_pool(&self.world).into_iter().next();
                    let now = self.time.elapsed_secs;
                    let Self {
                        world,
                        rng,
                        next_unit,
                        events,
                        ..
                    } = self;
                    EnemySpawner::spawn_wave(
                        world, rng, fighters, bombers, scouts, center, radius, target, now,
                        next_unit, events,
                    );
                }
            }
            PlayerCommand::RecordProgress { kind, amount } => {
                self.objectives.record_progress(kind, amount, &mut self.events);
            }
        }
    }

    /// Start a fresh session: seeded layout and objectives, a new skill
    /// tree, the player ship, and a running spawner.
    fn start_game(&mut self, difficulty: f64) {
        self.world.clear();
        self.time = SimTime::default();
        self.difficulty = difficulty.max(0.0);
        self.next_unit = 0;

        self.layout = Some(SystemLayout::generate(&self.generator_config, &mut self.rng));
        self.objectives.generate(self.difficulty, &mut self.rng);
        self.skills = basic_ship_tree();
        self.player_base_stats = ShipStats::default();

        world_setup::spawn_player(&mut self.world, &mut self.next_unit);
        self.apply_skill_effects();
        self.spawner.start();
        self.phase = GamePhase::Active;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;

        // 1. Spawner (the player is the spawn anchor and wired target)
        let target = systems::ai::candidate_pool(&self.world).into_iter().next();
        self.spawner.run(
            &mut self.world,
            &mut self.rng,
            DT,
            target,
            now,
            &mut self.next_unit,
            &mut self.events,
        );

        // 2. AI agents
        systems::ai::run(&mut self.world, &self.time, &mut self.rng, &mut self.events);

        // 3. Objective progress that the sim itself observes
        self.objectives.tick_timed(DT, &mut self.events);
        if let Some(player) = systems::ai::candidate_pool(&self.world).into_iter().next() {
            self.objectives.reach_location(player.position, &mut self.events);
        }

        // 4. Cleanup and kill rewards
        let removed = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        for (unit, kind) in removed {
            self.events.push(GameEvent::EnemyDestroyed { unit, kind });
            self.objectives
                .record_progress(ObjectiveKind::DestroyEnemies, 1, &mut self.events);
            self.skills
                .grant_points(SKILL_POINTS_PER_KILL, &mut self.events);
        }

        // 5. End condition: losing the ship ends the session. Objective
        // completion only signals AllObjectivesCompleted; the frontend
        // decides what comes next.
        let player_alive = !systems::ai::candidate_pool(&self.world).is_empty();
        if !player_alive {
            self.phase = GamePhase::Complete;
        }
    }

    /// Run `f` against the player ship, if it exists.
    fn player_command(&mut self, f: impl FnOnce(&mut ShipState, f64, &mut Vec<GameEvent>)) {
        let now = self.time.elapsed_secs;
        let Self { world, events, .. } = self;
        if let Some((_entity, (_own, ship))) = world
            .query_mut::<(&OwnShip, &mut ShipState)>()
            .into_iter()
            .next()
        {
            f(ship, now, events);
        }
    }

    /// Apply raw damage to a unit; AI agents also get their threat
    /// response (TakeDamage, then HealthLow below the flee threshold).
    fn damage_unit(&mut self, unit: UnitId, amount: f64) {
        let candidates = systems::ai::candidate_pool(&self.world);
        let now = self.time.elapsed_secs;
        let Self {
            world,
            rng,
            events,
            ..
        } = self;

        for (_entity, (ship, controller)) in
            world.query_mut::<(&mut ShipState, Option<&mut AiController>)>()
        {
            if ship.unit != unit {
                continue;
            }
            ship.take_damage(amount, events);
            if let Some(controller) = controller {
                if !ship.is_destroyed() {
                    controller.on_damage_received(ship, &candidates, now, DT, rng, events);
                }
            }
            break;
        }
    }

    /// Assign or clear an AI agent's target.
    fn assign_target(&mut self, unit: UnitId, target: Option<UnitId>) {
        let candidates = systems::ai::candidate_pool(&self.world);
        let now = self.time.elapsed_secs;
        let Self {
            world,
            rng,
            events,
            ..
        } = self;

        for (_entity, (ship, controller)) in
            world.query_mut::<(&mut ShipState, &mut AiController)>()
        {
            if ship.unit != unit {
                continue;
            }
            controller.set_target(target, ship, &candidates, now, DT, rng, events);
            break;
        }
    }

    /// Recompute the player's stats and loadout from base values plus
    /// every unlocked node. Recomputing from base keeps the
    /// multiplicative stacking idempotent across repeated applications.
    fn apply_skill_effects(&mut self) {
        let mut stats = self.player_base_stats.clone();
        let mut loadout = Loadout::standard();
        self.skills.apply_all_effects(&mut stats, &mut loadout);

        for (_entity, (_own, ship, mounted)) in self
            .world
            .query_mut::<(&OwnShip, &mut ShipState, &mut Loadout)>()
        {
            ship.stats = stats.clone();
            ship.health = ship.health.min(ship.stats.max_health);
            *mounted = loadout.clone();
            break;
        }
    }
}
