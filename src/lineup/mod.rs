// Lineup construction: eligibility resolution, slot assignment, budget.

pub mod budget;
pub mod eligibility;
pub mod slot;
