//! Typed character states.
//!
//! Every state is an (action, facing) pair. The asset manifest keys its
//! animation runs by the `"<action>_<direction>"` label, so each state can
//! render as and parse from that form.

use std::fmt;
use std::str::FromStr;

use crate::error::StateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 2] = [Facing::Left, Facing::Right];

    pub fn name(self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Facing::Left),
            "right" => Some(Facing::Right),
            _ => None,
        }
    }
}

/// Selectable tools, in slot order (alphabetical, as the key bindings
/// expect: slot 1 = axe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Axe,
    Pickaxe,
    Shovel,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Axe, Tool::Pickaxe, Tool::Shovel];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Axe => "axe",
            Tool::Pickaxe => "pickaxe",
            Tool::Shovel => "shovel",
        }
    }

    /// Tool bound to the zero-based slot `index`.
    pub fn from_slot(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn slot(self) -> usize {
        match self {
            Tool::Axe => 0,
            Tool::Pickaxe => 1,
            Tool::Shovel => 2,
        }
    }
}

/// Anything the player can swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weapon {
    Tool(Tool),
    Sword,
}

impl Weapon {
    pub const ALL: [Weapon; 4] = [
        Weapon::Tool(Tool::Axe),
        Weapon::Tool(Tool::Pickaxe),
        Weapon::Tool(Tool::Shovel),
        Weapon::Sword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weapon::Tool(tool) => tool.name(),
            Weapon::Sword => "sword",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Idle,
    Move,
    Jump,
    /// Swinging a tool or the sword.
    Use(Weapon),
}

impl PlayerAction {
    pub fn name(self) -> &'static str {
        match self {
            PlayerAction::Idle => "idle",
            PlayerAction::Move => "move",
            PlayerAction::Jump => "jump",
            PlayerAction::Use(weapon) => weapon.name(),
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "idle" => Some(PlayerAction::Idle),
            "move" => Some(PlayerAction::Move),
            "jump" => Some(PlayerAction::Jump),
            _ => Weapon::ALL
                .into_iter()
                .find(|w| w.name() == s)
                .map(PlayerAction::Use),
        }
    }

    fn all() -> impl Iterator<Item = PlayerAction> {
        [PlayerAction::Idle, PlayerAction::Move, PlayerAction::Jump]
            .into_iter()
            .chain(Weapon::ALL.into_iter().map(PlayerAction::Use))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyAction {
    Move,
    Hit,
    Death,
}

impl EnemyAction {
    pub const ALL: [EnemyAction; 3] = [EnemyAction::Move, EnemyAction::Hit, EnemyAction::Death];

    pub fn name(self) -> &'static str {
        match self {
            EnemyAction::Move => "move",
            EnemyAction::Hit => "hit",
            EnemyAction::Death => "death",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == s)
    }
}

fn split_label(label: &str) -> Result<(&str, Facing), StateError> {
    let invalid = || StateError::InvalidState(label.to_string());
    let (action, direction) = label.split_once('_').ok_or_else(invalid)?;
    let facing = Facing::parse(direction).ok_or_else(invalid)?;
    Ok((action, facing))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerState {
    pub action: PlayerAction,
    pub facing: Facing,
}

impl PlayerState {
    pub const fn new(action: PlayerAction, facing: Facing) -> Self {
        Self { action, facing }
    }

    /// Same facing, different action.
    pub fn with_action(self, action: PlayerAction) -> Self {
        Self { action, ..self }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Every state the player can be in; each needs an animation run.
    pub fn all() -> impl Iterator<Item = PlayerState> {
        PlayerAction::all()
            .flat_map(|action| Facing::ALL.into_iter().map(move |facing| Self::new(action, facing)))
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.action.name(), self.facing.name())
    }
}

impl FromStr for PlayerState {
    type Err = StateError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let (action, facing) = split_label(label)?;
        let action = PlayerAction::parse(action)
            .ok_or_else(|| StateError::InvalidState(label.to_string()))?;
        Ok(Self::new(action, facing))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnemyState {
    pub action: EnemyAction,
    pub facing: Facing,
}

impl EnemyState {
    pub const fn new(action: EnemyAction, facing: Facing) -> Self {
        Self { action, facing }
    }

    pub fn is_dead(&self) -> bool {
        self.action == EnemyAction::Death
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn all() -> impl Iterator<Item = EnemyState> {
        EnemyAction::ALL
            .into_iter()
            .flat_map(|action| Facing::ALL.into_iter().map(move |facing| Self::new(action, facing)))
    }
}

impl fmt::Display for EnemyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.action.name(), self.facing.name())
    }
}

impl FromStr for EnemyState {
    type Err = StateError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let (action, facing) = split_label(label)?;
        let action = EnemyAction::parse(action)
            .ok_or_else(|| StateError::InvalidState(label.to_string()))?;
        Ok(Self::new(action, facing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for state in PlayerState::all() {
            assert_eq!(state.label().parse::<PlayerState>(), Ok(state));
        }
        for state in EnemyState::all() {
            assert_eq!(state.label().parse::<EnemyState>(), Ok(state));
        }
        assert_eq!(PlayerState::all().count(), 14);
        assert_eq!(EnemyState::all().count(), 6);
    }

    #[test]
    fn tool_labels() {
        let state = PlayerState::new(PlayerAction::Use(Weapon::Tool(Tool::Pickaxe)), Facing::Left);
        assert_eq!(state.label(), "pickaxe_left");
        let sword: PlayerState = "sword_right".parse().unwrap();
        assert_eq!(sword.action, PlayerAction::Use(Weapon::Sword));
    }

    #[test]
    fn malformed_labels_rejected() {
        for bad in ["idle", "idle_up", "dance_left", "_left", "move_left_extra", ""] {
            assert_eq!(
                bad.parse::<PlayerState>(),
                Err(StateError::InvalidState(bad.to_string())),
                "{bad}"
            );
        }
        assert!("sword_left".parse::<EnemyState>().is_err());
    }

    #[test]
    fn slots_are_alphabetical() {
        assert_eq!(Tool::from_slot(0), Some(Tool::Axe));
        assert_eq!(Tool::from_slot(1), Some(Tool::Pickaxe));
        assert_eq!(Tool::from_slot(2), Some(Tool::Shovel));
        assert_eq!(Tool::from_slot(3), None);
        let mut names: Vec<_> = Tool::ALL.iter().map(|t| t.name()).collect();
        names.sort();
        assert_eq!(names, vec!["axe", "pickaxe", "shovel"]);
    }
}
