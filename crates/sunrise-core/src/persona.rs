//! Coach personas: the mood bucket picked from the polarity score.
//!
//! Bands partition the real line: `< -0.3` Supportive, `[-0.3, 0.3)` Encouraging,
//! `>= 0.3` HighEnergy.

use serde::{Deserialize, Serialize};

pub const LOW_MOOD_THRESHOLD: f64 = -0.3;
pub const GOOD_MOOD_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// The user is feeling low.
    Supportive,
    /// The user is feeling a bit off.
    Encouraging,
    /// The user is already in a good mood.
    HighEnergy,
}

impl Persona {
    /// Total over f64. NaN fails both strict comparisons and lands on Encouraging.
    pub fn from_polarity(score: f64) -> Self {
        if score < LOW_MOOD_THRESHOLD {
            Persona::Supportive
        } else if score >= GOOD_MOOD_THRESHOLD {
            Persona::HighEnergy
        } else {
            Persona::Encouraging
        }
    }

    /// System-role message sent with every chat request; also opens the user prompt.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Persona::Supportive => {
                "You are a very supportive life coach. The user is feeling low today."
            }
            Persona::Encouraging => {
                "You are an encouraging life coach. The user is feeling a bit off."
            }
            Persona::HighEnergy => {
                "You are a high-energy life coach. The user is already in a good mood!"
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Supportive => "supportive",
            Persona::Encouraging => "encouraging",
            Persona::HighEnergy => "high_energy",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
