//! Skill node data.
//!
//! Nodes live in the tree's arena keyed by id; parent/child edges store
//! ids rather than references, so the diamond-shaped graphs the factory
//! builds involve no ownership cycles.

use serde::{Deserialize, Serialize};

use crate::effects::SkillEffect;

/// One unlockable upgrade node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Points spent per unlock or level-up.
    pub cost: u32,
    pub max_level: u32,
    pub current_level: u32,
    /// Ids of prerequisite nodes. ALL must be unlocked (AND-gate).
    pub parents: Vec<String>,
    pub children: Vec<String>,
    pub effect: SkillEffect,
}

impl SkillNode {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: u32,
        max_level: u32,
        effect: SkillEffect,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            cost,
            max_level,
            current_level: 0,
            parents: Vec::new(),
            children: Vec::new(),
            effect,
        }
    }

    /// A node is unlocked once it has reached level 1.
    pub fn unlocked(&self) -> bool {
        self.current_level > 0
    }

    pub fn can_level_up(&self) -> bool {
        self.unlocked() && self.current_level < self.max_level
    }
}
