//! Steps of the subscription form and the fields each one owns.

use std::fmt;

use super::field::Field;

/// Number of field steps. Step 0 is the intro screen and is not counted.
pub const TOTAL_STEPS: u8 = 6;

/// One discrete screen of the form, always within `0..=TOTAL_STEPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Step(u8);

impl Step {
    pub const INTRO: Step = Step(0);
    pub const FIRST: Step = Step(1);
    pub const FINAL: Step = Step(TOTAL_STEPS);

    /// Build a step from a raw index, rejecting anything past the final step.
    pub fn new(index: u8) -> Option<Self> {
        (index <= TOTAL_STEPS).then_some(Step(index))
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn is_intro(&self) -> bool {
        self.0 == 0
    }

    pub fn is_final(&self) -> bool {
        self.0 == TOTAL_STEPS
    }

    /// Following step, or `None` from the final step.
    pub fn next(&self) -> Option<Step> {
        Step::new(self.0 + 1)
    }

    /// Previous step, clamped so the form never falls back to the intro.
    pub fn previous(&self) -> Step {
        Step(self.0.saturating_sub(1).max(Step::FIRST.0))
    }

    /// Fields validated when leaving this step.
    pub fn fields(&self) -> &'static [Field] {
        match self.0 {
            1 => &[Field::Name, Field::Linkedin],
            2 => &[Field::Phone],
            3 => &[Field::Email],
            4 => &[Field::Nationality],
            5 => &[Field::Residence],
            6 => &[Field::Age],
            _ => &[],
        }
    }

    /// Step that owns a field.
    pub fn owning(field: Field) -> Step {
        match field {
            Field::Name | Field::Linkedin => Step(1),
            Field::Phone => Step(2),
            Field::Email => Step(3),
            Field::Nationality => Step(4),
            Field::Residence => Step(5),
            Field::Age => Step(6),
        }
    }

    /// Iterate over the field steps `1..=TOTAL_STEPS`.
    pub fn all_field_steps() -> impl Iterator<Item = Step> {
        (1..=TOTAL_STEPS).map(Step)
    }

    /// Fraction of the form completed, as drawn by the progress bar.
    pub fn progress(&self) -> f64 {
        f64::from(self.0) / f64::from(TOTAL_STEPS)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_intro() {
            write!(f, "intro")
        } else {
            write!(f, "step {}/{}", self.0, TOTAL_STEPS)
        }
    }
}
