//! System prompts for each assistant profile and mode.
//!
//! Every template spells out the persona and a fixed output layout so the
//! answers stay comparable between requests. Selection is an exhaustive
//! match over [`Profile`] and [`Mode`]; there is no fallback branch.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// UX writer persona: rewrite the text for readability.
pub const WRITING_REWRITE_PROMPT: &str = "You are a professional UX writer. Rewrite the user's text with a focus on readability, brevity and accuracy. Add a short explanation to any jargon and remove redundancy and ambiguity.\nOutput format:\n1) Heading (short and specific)\n2) Body (3-8 sentences, paragraphs allowed)\n3) Notes (1-2 lines on important caveats or assumptions, if any)";

/// Summarizer persona: structured bullet summary.
pub const WRITING_SUMMARY_PROMPT: &str = "You are a professional summarizer. Extract the important points, organize them hierarchically, remove duplication and present them as concise bullet points.\nOutput format:\n- Purpose/Background\n- Key points (3-6 items)\n- Decisions/Open items\n- Next actions (add owner and deadline when known)";

/// Chef persona: suggest a dish from ingredients or a request.
pub const COOKING_RECIPE_PROMPT: &str = "You are a professional chef. Suggest one dish that fits the user's ingredients or request, preferring simple home cooking with common equipment.\nOutput format:\n1) Dish (name and one-line description)\n2) Ingredients (with quantities for two servings)\n3) Steps (numbered, 4-8 steps)\n4) Tips (substitutions or timing advice)";

/// Dietitian persona: nutrition review of a meal.
pub const COOKING_NUTRITION_PROMPT: &str = "You are a registered dietitian. Review the meal or ingredient list the user describes and give practical, non-medical advice.\nOutput format:\n- Nutrition overview (energy, protein, fat, carbohydrates in plain words)\n- Balance improvements (2-4 concrete suggestions)\n- Suggested additions (one side dish or drink that completes the meal)";

/// Which of the two expert personas handles a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    A,
    B,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::A, Mode::B];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::A => "A",
            Mode::B => "B",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode {0:?}, expected A or B")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Mode::A),
            "B" | "b" => Ok(Mode::B),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Deployment-wide persona set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Writing,
    Cooking,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile {0:?}, expected writing or cooking")]
pub struct UnknownProfile(pub String);

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "writing" => Ok(Profile::Writing),
            "cooking" => Ok(Profile::Cooking),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Writing => f.write_str("writing"),
            Profile::Cooking => f.write_str("cooking"),
        }
    }
}

impl Profile {
    /// Short button label shown next to the mode letter.
    pub fn mode_label(self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Profile::Writing, Mode::A) => "Rewrite",
            (Profile::Writing, Mode::B) => "Summarize",
            (Profile::Cooking, Mode::A) => "Recipe",
            (Profile::Cooking, Mode::B) => "Nutrition",
        }
    }

    pub fn temperature(self) -> f32 {
        match self {
            Profile::Writing => 0.4,
            Profile::Cooking => 0.6,
        }
    }
}

pub fn select_template(profile: Profile, mode: Mode) -> &'static str {
    match (profile, mode) {
        (Profile::Writing, Mode::A) => WRITING_REWRITE_PROMPT,
        (Profile::Writing, Mode::B) => WRITING_SUMMARY_PROMPT,
        (Profile::Cooking, Mode::A) => COOKING_RECIPE_PROMPT,
        (Profile::Cooking, Mode::B) => COOKING_NUTRITION_PROMPT,
    }
}
