/// Where a card's record is in its trip from the sleeve to the turntable.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum AnimationStage {
    #[default]
    Idle,           // Record hidden in the sleeve
    SlidingOut,     // Record leaving the sleeve
    MovingToPlayer, // Record flying to the platter
    Spinning,       // Record turning on the platter, never ends by itself
}

impl AnimationStage {
    /// Stage entered when the card becomes active.
    pub fn activate(self) -> Self {
        match self {
            AnimationStage::Idle => AnimationStage::SlidingOut,
            other => other,
        }
    }

    /// Stage entered when the current stage's motion reports completion.
    pub fn on_motion_complete(self) -> Self {
        match self {
            AnimationStage::SlidingOut => AnimationStage::MovingToPlayer,
            AnimationStage::MovingToPlayer => AnimationStage::Spinning,
            AnimationStage::Idle | AnimationStage::Spinning => self,
        }
    }

    /// Deactivation always lands in `Idle`.
    pub fn deactivate(self) -> Self {
        AnimationStage::Idle
    }

    pub fn is_active(self) -> bool {
        self != AnimationStage::Idle
    }
}
