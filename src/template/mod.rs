//! Designer templates and the 60/30/10 section assignment.

mod applicator;
mod set;

pub use applicator::{apply_template, ratio_counts, RatioCounts, SectionAssignment};
pub use set::{AccentTarget, RatioHint, Template, TemplateSet};
