//! Preconfigured skill trees.

use starsurge_core::enums::WeaponKind;

use crate::effects::SkillEffect;
use crate::node::SkillNode;
use crate::tree::SkillTree;

/// The standard ship progression tree.
///
/// Three root branches (thrusters, hull, weapons), a second tier per
/// branch, weapon unlocks under the weapons branch, and two capstones
/// that each require two parents.
pub fn basic_ship_tree() -> SkillTree {
    let mut tree = SkillTree::new();

    tree.add_node(
        SkillNode::new(
            "speed_1",
            "Improved Thrusters I",
            "Increase ship velocity by 10%.",
            1,
            3,
            SkillEffect::SpeedBoost { percent: 10.0 },
        ),
        true,
    );
    tree.add_node(
        SkillNode::new(
            "health_1",
            "Reinforced Hull I",
            "Increase ship max health by 15%.",
            1,
            3,
            SkillEffect::HealthBoost { percent: 15.0 },
        ),
        true,
    );
    tree.add_node(
        SkillNode::new(
            "damage_1",
            "Weapons Booster I",
            "Increase weapons damage by 10%.",
            1,
            3,
            SkillEffect::DamageBoost { percent: 10.0 },
        ),
        true,
    );

    tree.add_node(
        SkillNode::new(
            "speed_2",
            "Improved Thrusters II",
            "Increase ship velocity by 20%.",
            2,
            2,
            SkillEffect::SpeedBoost { percent: 20.0 },
        ),
        false,
    );
    tree.connect("speed_1", "speed_2");

    tree.add_node(
        SkillNode::new(
            "health_2",
            "Reinforced Hull II",
            "Increase ship max health by 25%.",
            2,
            2,
            SkillEffect::HealthBoost { percent: 25.0 },
        ),
        false,
    );
    tree.connect("health_1", "health_2");

    tree.add_node(
        SkillNode::new(
            "damage_2",
            "Weapons Booster II",
            "Increase weapons damage by 20%.",
            2,
            2,
            SkillEffect::DamageBoost { percent: 20.0 },
        ),
        false,
    );
    tree.connect("damage_1", "damage_2");

    tree.add_node(
        SkillNode::new(
            "weapon_laser",
            "Precision Laser",
            "Unlocks the precision laser.",
            3,
            1,
            SkillEffect::WeaponUnlock {
                kind: WeaponKind::LaserBeam,
            },
        ),
        false,
    );
    tree.connect("damage_2", "weapon_laser");

    tree.add_node(
        SkillNode::new(
            "weapon_missile",
            "Missile Launcher",
            "Unlocks the AOE missile launcher.",
            3,
            1,
            SkillEffect::WeaponUnlock {
                kind: WeaponKind::MissileLauncher,
            },
        ),
        false,
    );
    tree.connect("damage_2", "weapon_missile");

    tree.add_node(
        SkillNode::new(
            "weapon_shotgun",
            "Spread Cannon",
            "Unlocks the spread cannon.",
            3,
            1,
            SkillEffect::WeaponUnlock {
                kind: WeaponKind::Shotgun,
            },
        ),
        false,
    );
    tree.connect("damage_2", "weapon_shotgun");

    tree.add_node(
        SkillNode::new(
            "speed_hyper",
            "Hyper-Propulsion",
            "Greatly increase ship velocity by 50%.",
            5,
            1,
            SkillEffect::SpeedBoost { percent: 50.0 },
        ),
        false,
    );
    tree.connect("speed_2", "speed_hyper");
    tree.connect("health_2", "speed_hyper");

    tree.add_node(
        SkillNode::new(
            "weapon_plasma",
            "Plasma Cannon",
            "Unlocks the devastating plasma cannon.",
            5,
            1,
            SkillEffect::WeaponUnlock {
                kind: WeaponKind::PlasmaCannon,
            },
        ),
        false,
    );
    tree.connect("weapon_laser", "weapon_plasma");
    tree.connect("weapon_missile", "weapon_plasma");

    tree
}
