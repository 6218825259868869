/// Action cards the player can commit to for a stage.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Walk,
    Jump,
    Concentrate,
}

impl Action {
    /// Does committing this action start a stage advance?
    /// Concentrate is the stay-put card: the player acts but the world
    /// does not scroll.
    pub fn advances(self) -> bool {
        !matches!(self, Action::Concentrate)
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Walk => "Walk",
            Action::Jump => "Jump",
            Action::Concentrate => "Focus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_concentrate_holds_the_stage() {
        assert!(Action::Walk.advances());
        assert!(Action::Jump.advances());
        assert!(!Action::Concentrate.advances());
    }
}
