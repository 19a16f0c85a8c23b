//! Combat domain: AI system modules for patrolling enemies.

pub(crate) mod patrol;

pub use patrol::{Monkey, Patrol, PatrolOutcome, standing_platform};

pub(crate) use patrol::drive_monkeys;
