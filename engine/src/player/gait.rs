//! Gait tiers

/// Movement tier. Exactly one applies per tick; it picks the speed, head-bob
/// and footstep cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gait {
    #[default]
    Walk,
    Sprint,
    Crouch,
}

impl Gait {
    /// Sprint wins over crouch, crouch over walk.
    pub fn resolve(sprinting: bool, crouching: bool) -> Gait {
        if sprinting {
            Gait::Sprint
        } else if crouching {
            Gait::Crouch
        } else {
            Gait::Walk
        }
    }
}
