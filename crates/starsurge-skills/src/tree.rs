//! The skill tree: node arena, prerequisite gating, and point spending.

use std::collections::HashMap;

use starsurge_core::events::GameEvent;
use starsurge_core::ship::ShipStats;
use starsurge_core::weapon::Loadout;

use crate::effects::SkillEffect;
use crate::node::SkillNode;

/// DAG of upgrade nodes plus the pool of unspent skill points.
///
/// Spending is atomic with the unlock/level-up: either both happen or
/// neither does.
#[derive(Debug, Clone, Default)]
pub struct SkillTree {
    nodes: HashMap<String, SkillNode>,
    roots: Vec<String>,
    skill_points: u32,
}

impl SkillTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill_points(&self) -> u32 {
        self.skill_points
    }

    pub fn node(&self, id: &str) -> Option<&SkillNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &SkillNode> {
        self.nodes.values()
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Register a node. Ignored if the id already exists.
    pub fn add_node(&mut self, node: SkillNode, is_root: bool) {
        if self.nodes.contains_key(&node.id) {
            return;
        }
        if is_root {
            self.roots.push(node.id.clone());
        }
        self.nodes.insert(node.id.clone(), node);
    }

    /// Add the directed prerequisite edge parent -> child.
    ///
    /// Referencing unknown ids is a caller contract violation: it
    /// asserts in debug builds and is otherwise a no-op. Duplicate
    /// edges are ignored.
    pub fn connect(&mut self, parent_id: &str, child_id: &str) {
        let both_exist = self.nodes.contains_key(parent_id) && self.nodes.contains_key(child_id);
        debug_assert!(both_exist, "connect references an unknown node id");
        if !both_exist {
            return;
        }

        if let Some(parent) = self.nodes.get_mut(parent_id) {
            if !parent.children.iter().any(|c| c == child_id) {
                parent.children.push(child_id.to_string());
            }
        }
        if let Some(child) = self.nodes.get_mut(child_id) {
            if !child.parents.iter().any(|p| p == parent_id) {
                child.parents.push(parent_id.to_string());
            }
        }
    }

    /// A node can unlock iff it exists, is locked, and ALL of its
    /// parents are unlocked. Parentless nodes unlock immediately.
    pub fn can_unlock(&self, id: &str) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        if node.unlocked() {
            return false;
        }
        node.parents
            .iter()
            .all(|p| self.nodes.get(p).is_some_and(|parent| parent.unlocked()))
    }

    /// Unlock a node (level 0 -> 1), spending its cost. Fails with no
    /// state change unless the prerequisites hold and the pool covers
    /// the cost.
    pub fn unlock(&mut self, id: &str, events: &mut Vec<GameEvent>) -> bool {
        if !self.can_unlock(id) {
            return false;
        }
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        if self.skill_points < node.cost {
            return false;
        }

        node.current_level = 1;
        self.skill_points -= node.cost;
        events.push(GameEvent::NodeUnlocked { id: id.to_string() });
        events.push(GameEvent::NodeLevelChanged {
            id: id.to_string(),
            level: 1,
        });
        events.push(GameEvent::SkillPointsChanged {
            points: self.skill_points,
        });
        true
    }

    /// Raise an unlocked node's level by one, spending its cost. Fails
    /// with no state change unless the node is unlocked, below its max
    /// level, and the pool covers the cost.
    pub fn level_up(&mut self, id: &str, events: &mut Vec<GameEvent>) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        if !node.can_level_up() || self.skill_points < node.cost {
            return false;
        }

        node.current_level += 1;
        self.skill_points -= node.cost;
        events.push(GameEvent::NodeLevelChanged {
            id: id.to_string(),
            level: node.current_level,
        });
        events.push(GameEvent::SkillPointsChanged {
            points: self.skill_points,
        });
        true
    }

    /// Add to the unspent pool.
    pub fn grant_points(&mut self, amount: u32, events: &mut Vec<GameEvent>) {
        if amount == 0 {
            return;
        }
        self.skill_points += amount;
        events.push(GameEvent::SkillPointsChanged {
            points: self.skill_points,
        });
    }

    /// Apply every unlocked node's effect against `stats` and `loadout`.
    ///
    /// Weapon unlocks run first so damage boosts see the full loadout;
    /// within each phase iteration order is unspecified to callers,
    /// which is safe because the effects stack multiplicatively. (The
    /// walk is sorted by id internally so weapon mount order is
    /// reproducible.) Callers pass BASE stats and re-derive rather than
    /// feeding live stats back in.
    pub fn apply_all_effects(&self, stats: &mut ShipStats, loadout: &mut Loadout) {
        let mut unlocked: Vec<&SkillNode> = self.nodes.values().filter(|n| n.unlocked()).collect();
        unlocked.sort_by(|a, b| a.id.cmp(&b.id));

        for node in &unlocked {
            if matches!(node.effect, SkillEffect::WeaponUnlock { .. }) {
                node.effect.apply(node.current_level, stats, loadout);
            }
        }
        for node in &unlocked {
            if !matches!(node.effect, SkillEffect::WeaponUnlock { .. }) {
                node.effect.apply(node.current_level, stats, loadout);
            }
        }
    }

    /// Pre-order depth-first walk from each root.
    ///
    /// A node reachable via multiple parents is visited once per path
    /// (no deduplication); callers needing set semantics dedupe by id.
    pub fn traverse<F>(&self, mut visitor: F, unlocked_only: bool)
    where
        F: FnMut(&SkillNode, usize),
    {
        for root in &self.roots {
            self.traverse_node(root, &mut visitor, 0, unlocked_only);
        }
    }

    fn traverse_node<F>(&self, id: &str, visitor: &mut F, depth: usize, unlocked_only: bool)
    where
        F: FnMut(&SkillNode, usize),
    {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !unlocked_only || node.unlocked() {
            visitor(node, depth);
        }
        for child in &node.children {
            self.traverse_node(child, visitor, depth + 1, unlocked_only);
        }
    }
}
