use crate::combat::Element;

/// Base stats of a species before level scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub const fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        sp_attack: u32,
        sp_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
        }
    }
}

/// Immutable species template shared by every creature of that kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species {
    pub name: String,
    pub primary: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary: Option<Element>,
    pub base: BaseStats,
}

impl Species {
    pub fn new(
        name: impl Into<String>,
        primary: Element,
        secondary: Option<Element>,
        base: BaseStats,
    ) -> Self {
        Self {
            name: name.into(),
            primary,
            secondary,
            base,
        }
    }
}
