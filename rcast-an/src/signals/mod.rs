//! Signal extractors
//!
//! Pure functions over a [`MatchTimeline`](rcast_common::MatchTimeline) that
//! return the facts of one type falling in an inclusive `[start, end]`
//! window. Classification rules (what counts as a structure, a camp, an
//! alive hero) live in [`predicates`] and nowhere else.

pub mod deaths;
pub mod inputs;
pub mod objectives;
pub mod predicates;
pub mod proximity;

pub use deaths::{hero_deaths, kills_by, mercenary_deaths, structure_losses, HeroDeath, MercenaryDeath, StructureLoss};
pub use inputs::{taunts, Taunt, TauntKind};
pub use objectives::{camp_captures, objective_events, talent_picks, CampCapture, ObjectiveEvent, TalentPick};
pub use proximity::{hero_positions, proximity_facts, HeroPosition, ProximityFact, ProximityKind};
