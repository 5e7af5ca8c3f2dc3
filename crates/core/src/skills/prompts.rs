//! Prompt templates bundled at compile time.

use crate::catalog::PainPoint;

/// Idea Generator - asks for five business ideas for the selected pain points
pub const IDEA_GENERATOR: &str = include_str!("defaults/idea_generator.md");

/// Placeholder replaced with the comma-joined pain point names
const PAIN_POINTS_SLOT: &str = "{pain_points}";

/// Placeholder replaced with `IDEAS_PER_REQUEST`
const COUNT_SLOT: &str = "{count}";

/// Number of ideas the prompt asks for
pub const IDEAS_PER_REQUEST: usize = 5;

/// Render the idea prompt for a selection
pub fn idea_prompt(points: &[PainPoint]) -> String {
    let names = points
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    IDEA_GENERATOR
        .replace(COUNT_SLOT, &IDEAS_PER_REQUEST.to_string())
        .replace(PAIN_POINTS_SLOT, &names)
}
