//! Damage resolution.
//!
//! The orchestrator consumes damage only through the [`DamageResolver`]
//! trait. The formula in [`damage`] is the reference implementation; it takes
//! its random inputs as explicit [`DamageRolls`] so results stay reproducible.
//!
//! # Core Functions
//!
//! - `type_multiplier`: element chart lookup
//! - `calculate_damage`: HP delta and multipliers for one hit
//! - `resolve_hit`: calculate and apply to the defender

pub mod damage;
pub mod element;
pub mod outcome;

pub use damage::{DamageRolls, calculate_damage, resolve_hit};
pub use element::{Element, type_multiplier};
pub use outcome::{DamageOutcome, DamageResolver, Effectiveness};
