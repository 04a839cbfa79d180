use crate::creature::Creature;

use super::state::Side;

/// One side's in-battle representation: a creature plus the side tag the
/// presentation layer uses as its handle.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    side: Side,
    creature: Creature,
}

impl Unit {
    pub fn new(side: Side, creature: Creature) -> Self {
        Self { side, creature }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }

    pub fn name(&self) -> &str {
        self.creature.name()
    }
}
