//! Level objective generation and progress tracking.
//!
//! Objectives are generated fresh per level, scaled by a difficulty
//! scalar with per-kind clamps, and tracked until every one of them is
//! complete.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use starsurge_core::enums::ObjectiveKind;
use starsurge_core::events::GameEvent;
use starsurge_core::state::ObjectiveView;
use starsurge_core::types::Vec3;

/// One generated objective. `completed` is monotonic: it never reverts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelObjective {
    pub kind: ObjectiveKind,
    pub description: String,
    pub target_amount: u32,
    pub current_amount: u32,
    pub completed: bool,
    /// Seconds, for SurviveTime/DefendTarget.
    pub time_limit: Option<f64>,
    /// Fractional elapsed time backing `current_amount` for timed
    /// objectives; per-tick deltas are far below one second.
    elapsed_secs: f64,
    pub target_location: Option<Vec3>,
    pub reach_distance: f64,
}

impl LevelObjective {
    /// Advance progress toward the target. Returns whether this call
    /// completed the objective.
    fn update_progress(&mut self, amount: u32) -> bool {
        self.current_amount = (self.current_amount + amount).min(self.target_amount);
        if !self.completed && self.current_amount >= self.target_amount {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn view(&self) -> ObjectiveView {
        ObjectiveView {
            kind: self.kind,
            description: self.description.clone(),
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            completed: self.completed,
            time_limit: self.time_limit,
            target_location: self.target_location,
        }
    }
}

/// Tracks the current level's objectives and reports completion.
#[derive(Debug, Clone, Default)]
pub struct ObjectiveManager {
    objectives: Vec<LevelObjective>,
    all_complete_reported: bool,
}

impl ObjectiveManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objectives(&self) -> &[LevelObjective] {
        &self.objectives
    }

    pub fn all_complete(&self) -> bool {
        !self.objectives.is_empty() && self.objectives.iter().all(|o| o.completed)
    }

    /// Replace the current objectives with a fresh, difficulty-scaled set.
    pub fn generate(&mut self, difficulty: f64, rng: &mut ChaCha8Rng) {
        self.objectives.clear();
        self.all_complete_reported = false;

        let count = ((1.0 + difficulty / 2.0).floor() as u32).clamp(1, 4);
        for _ in 0..count {
            let objective = random_objective(difficulty, rng);
            self.objectives.push(objective);
        }
    }

    /// Report progress against every incomplete objective of `kind`.
    pub fn record_progress(&mut self, kind: ObjectiveKind, amount: u32, events: &mut Vec<GameEvent>) {
        for (index, objective) in self.objectives.iter_mut().enumerate() {
            if objective.kind != kind || objective.completed {
                continue;
            }
            if objective.update_progress(amount) {
                events.push(GameEvent::ObjectiveCompleted {
                    index,
                    kind: objective.kind,
                });
            }
            events.push(GameEvent::ObjectiveUpdated {
                index,
                kind: objective.kind,
            });
        }
        self.check_all_complete(events);
    }

    /// Complete any ReachLocation objective whose marker is within reach.
    pub fn reach_location(&mut self, position: Vec3, events: &mut Vec<GameEvent>) {
        for (index, objective) in self.objectives.iter_mut().enumerate() {
            if objective.kind != ObjectiveKind::ReachLocation || objective.completed {
                continue;
            }
            let Some(marker) = objective.target_location else {
                continue;
            };
            if position.distance(marker) <= objective.reach_distance {
                objective.completed = true;
                events.push(GameEvent::ObjectiveCompleted {
                    index,
                    kind: objective.kind,
                });
                events.push(GameEvent::ObjectiveUpdated {
                    index,
                    kind: objective.kind,
                });
            }
        }
        self.check_all_complete(events);
    }

    /// Advance SurviveTime/DefendTarget objectives by `dt` seconds.
    /// Progress is reported in whole seconds; updates are only emitted
    /// when the visible count changes.
    pub fn tick_timed(&mut self, dt: f64, events: &mut Vec<GameEvent>) {
        for (index, objective) in self.objectives.iter_mut().enumerate() {
            let timed = matches!(
                objective.kind,
                ObjectiveKind::SurviveTime | ObjectiveKind::DefendTarget
            );
            if !timed || objective.completed {
                continue;
            }
            let Some(limit) = objective.time_limit else {
                continue;
            };

            objective.elapsed_secs += dt;
            let whole = (objective.elapsed_secs.floor() as u32).min(objective.target_amount);
            let changed = whole != objective.current_amount;
            objective.current_amount = whole;

            if objective.elapsed_secs >= limit {
                objective.completed = true;
                events.push(GameEvent::ObjectiveCompleted {
                    index,
                    kind: objective.kind,
                });
            }
            if changed || objective.completed {
                events.push(GameEvent::ObjectiveUpdated {
                    index,
                    kind: objective.kind,
                });
            }
        }
        self.check_all_complete(events);
    }

    fn check_all_complete(&mut self, events: &mut Vec<GameEvent>) {
        if self.all_complete() && !self.all_complete_reported {
            self.all_complete_reported = true;
            events.push(GameEvent::AllObjectivesCompleted);
        }
    }
}

/// Roll one objective of a random kind, scaled by difficulty and
/// clamped to the kind's bounds.
fn random_objective(difficulty: f64, rng: &mut ChaCha8Rng) -> LevelObjective {
    let kind = ObjectiveKind::ALL[rng.gen_range(0..ObjectiveKind::ALL.len())];

    let mut objective = LevelObjective {
        kind,
        description: String::new(),
        target_amount: 1,
        current_amount: 0,
        completed: false,
        time_limit: None,
        elapsed_secs: 0.0,
        target_location: None,
        reach_distance: 0.0,
    };

    match kind {
        ObjectiveKind::DestroyEnemies => {
            let count = ((5.0 * difficulty).round() as u32).clamp(3, 30);
            objective.target_amount = count;
            objective.description = format!("Destroy {count} enemies");
        }
        ObjectiveKind::CollectItems => {
            let count = ((7.0 * difficulty).round() as u32).clamp(5, 20);
            objective.target_amount = count;
            objective.description = format!("Collect {count} resources");
        }
        ObjectiveKind::SurviveTime => {
            let minutes = (1.0 + difficulty * 0.5).clamp(1.0, 5.0);
            objective.time_limit = Some(minutes * 60.0);
            objective.target_amount = (minutes * 60.0) as u32;
            objective.description = format!("Survive {minutes:.1} minutes");
        }
        ObjectiveKind::ReachLocation => {
            let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let distance: f64 = rng.gen_range(0.0..500.0);
            objective.target_location = Some(Vec3::new(
                distance * angle.sin(),
                0.0,
                distance * angle.cos(),
            ));
            objective.reach_distance = 50.0;
            objective.description = "Reach the marked navigation point".to_string();
        }
        ObjectiveKind::DefendTarget => {
            let minutes = (2.0 + difficulty * 0.3).clamp(2.0, 4.0);
            objective.time_limit = Some(minutes * 60.0);
            objective.target_amount = (minutes * 60.0) as u32;
            objective.description = format!("Defend the station for {minutes:.1} minutes");
        }
        ObjectiveKind::EscortAlly => {
            objective.description = "Escort the ally ship to its destination".to_string();
        }
    }

    objective
}
