//! Element type chart.

/// Elemental type of a species or move.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    #[default]
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
}

impl Element {
    /// Multiplier for a move of this element hitting a single `defender` element.
    ///
    /// Returns 2.0 (super effective), 0.5 (not very effective) or 1.0. The chart
    /// has no immunities, so every hit can deal damage.
    pub fn against(self, defender: Element) -> f32 {
        use Element::*;

        match (self, defender) {
            (Fire, Grass | Ice) => 2.0,
            (Fire, Fire | Water) => 0.5,

            (Water, Fire) => 2.0,
            (Water, Water | Grass) => 0.5,

            (Electric, Water) => 2.0,
            (Electric, Electric | Grass) => 0.5,

            (Grass, Water) => 2.0,
            (Grass, Fire | Grass | Poison) => 0.5,

            (Ice, Grass) => 2.0,
            (Ice, Fire | Water | Ice) => 0.5,

            (Fighting, Normal | Ice) => 2.0,
            (Fighting, Poison) => 0.5,

            (Poison, Grass) => 2.0,
            (Poison, Poison) => 0.5,

            _ => 1.0,
        }
    }
}

/// Combined multiplier against a (possibly dual-typed) defender.
pub fn type_multiplier(attack: Element, primary: Element, secondary: Option<Element>) -> f32 {
    let secondary = secondary.map_or(1.0, |element| attack.against(element));
    attack.against(primary) * secondary
}
