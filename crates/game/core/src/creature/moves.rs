use crate::combat::Element;

/// Which stat pair a move reads when computing damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveCategory {
    /// Attack vs. Defense.
    #[default]
    Physical,
    /// Special Attack vs. Special Defense.
    Special,
}

/// Immutable attack template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDefinition {
    pub name: String,
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: MoveCategory,
    pub power: u32,
    /// Hit chance in percent. Carried as data; hits are never rolled.
    pub accuracy: u32,
    /// Uses available at the start of a battle.
    pub pp: u32,
}

impl MoveDefinition {
    pub fn new(
        name: impl Into<String>,
        element: Element,
        category: MoveCategory,
        power: u32,
        accuracy: u32,
        pp: u32,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            category,
            power,
            accuracy,
            pp,
        }
    }
}

/// A learned move with its remaining uses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    definition: MoveDefinition,
    pp: u32,
}

impl Move {
    pub fn new(definition: MoveDefinition) -> Self {
        let pp = definition.pp;
        Self { definition, pp }
    }

    pub fn definition(&self) -> &MoveDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn pp(&self) -> u32 {
        self.pp
    }

    pub fn max_pp(&self) -> u32 {
        self.definition.pp
    }

    pub(crate) fn spend(&mut self) {
        self.pp = self.pp.saturating_sub(1);
    }
}
