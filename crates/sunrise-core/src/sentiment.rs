//! Sentiment Scorer: lexicon polarity averaging over the user's mood text.
//!
//! Each lexicon word yields an assessment in [-1, 1]. Intensifiers directly before a word
//! scale it. A negation flips and damps the next lexicon word (`p * -0.5`), reaching only
//! across intensifiers: any other word or clause punctuation (`, . ; ! ?`) drops it.
//! The score is the mean of all assessments, 0.0 when nothing matched.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

const NEGATION_FACTOR: f64 = -0.5;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z]+(?:'[a-z]+)?|[,.;!?]").expect("token pattern is valid")
});

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| POLARITY.iter().copied().collect());
static MODIFIERS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "without", "cannot",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.2),
    ("super", 1.4),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("totally", 1.4),
    ("completely", 1.4),
    ("absolutely", 1.5),
    ("utterly", 1.5),
    ("deeply", 1.4),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("rather", 1.1),
    ("kinda", 0.7),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("barely", 0.4),
    ("little", 0.6),
];

const POLARITY: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("excellent", 1.0),
    ("perfect", 1.0),
    ("happy", 0.8),
    ("glad", 0.5),
    ("joy", 0.8),
    ("joyful", 0.8),
    ("cheerful", 0.7),
    ("excited", 0.5),
    ("exciting", 0.5),
    ("eager", 0.4),
    ("energized", 0.6),
    ("energetic", 0.6),
    ("refreshed", 0.6),
    ("rested", 0.5),
    ("calm", 0.3),
    ("relaxed", 0.4),
    ("peaceful", 0.5),
    ("content", 0.4),
    ("fine", 0.4),
    ("okay", 0.1),
    ("ok", 0.1),
    ("nice", 0.6),
    ("lovely", 0.5),
    ("love", 0.5),
    ("loving", 0.6),
    ("grateful", 0.7),
    ("thankful", 0.6),
    ("hopeful", 0.5),
    ("optimistic", 0.6),
    ("motivated", 0.6),
    ("inspired", 0.6),
    ("confident", 0.5),
    ("proud", 0.6),
    ("ready", 0.2),
    ("strong", 0.4),
    ("better", 0.5),
    ("best", 1.0),
    ("bright", 0.7),
    ("sunny", 0.5),
    ("beautiful", 0.85),
    ("fun", 0.3),
    ("pleased", 0.5),
    ("delighted", 0.8),
    ("thrilled", 0.8),
    ("alive", 0.3),
    ("blessed", 0.6),
    ("productive", 0.5),
    ("positive", 0.4),
    ("well", 0.2),
    // negative
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.6),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("miserable", -0.9),
    ("depressed", -0.7),
    ("down", -0.3),
    ("low", -0.4),
    ("tired", -0.4),
    ("exhausted", -0.6),
    ("sleepy", -0.3),
    ("drained", -0.6),
    ("weary", -0.5),
    ("groggy", -0.4),
    ("lazy", -0.3),
    ("sluggish", -0.4),
    ("bored", -0.5),
    ("boring", -0.5),
    ("lonely", -0.6),
    ("anxious", -0.5),
    ("nervous", -0.4),
    ("worried", -0.5),
    ("stressed", -0.6),
    ("overwhelmed", -0.6),
    ("afraid", -0.6),
    ("scared", -0.6),
    ("dread", -0.7),
    ("dreading", -0.7),
    ("hopeless", -0.8),
    ("angry", -0.6),
    ("mad", -0.6),
    ("annoyed", -0.5),
    ("frustrated", -0.6),
    ("upset", -0.5),
    ("grumpy", -0.5),
    ("irritable", -0.5),
    ("cranky", -0.5),
    ("hate", -0.8),
    ("sick", -0.7),
    ("ill", -0.5),
    ("hurt", -0.5),
    ("pain", -0.6),
    ("painful", -0.7),
    ("crappy", -0.8),
    ("lousy", -0.7),
    ("meh", -0.2),
    ("blah", -0.3),
    ("off", -0.1),
    ("gloomy", -0.6),
    ("dull", -0.3),
    ("heavy", -0.2),
    ("stuck", -0.4),
    ("unmotivated", -0.5),
    ("hungover", -0.5),
    ("broken", -0.4),
    ("lost", -0.3),
    ("wrong", -0.5),
    ("difficult", -0.5),
    ("hard", -0.3),
    ("rough", -0.4),
];

/// Polarity of `text` in [-1.0, 1.0]. Deterministic; empty or unmatched text scores 0.0.
pub fn polarity(text: &str) -> f64 {
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    let mut assessments: Vec<f64> = Vec::new();
    let mut intensity = 1.0_f64;
    // Set by a negation; survives intensifiers only.
    let mut negated = false;

    for m in TOKEN_RE.find_iter(&lowered) {
        let word = m.as_str();

        if is_negation(word) {
            negated = true;
            intensity = 1.0;
            continue;
        }
        if let Some(factor) = MODIFIERS.get(word) {
            intensity *= factor;
            continue;
        }
        if let Some(&p) = LEXICON.get(word) {
            let mut score = p * intensity;
            if negated {
                score *= NEGATION_FACTOR;
            }
            assessments.push(score.clamp(-1.0, 1.0));
        }

        // Lexicon hits, plain words and punctuation all end a pending modifier run.
        negated = false;
        intensity = 1.0;
    }

    if assessments.is_empty() {
        return 0.0;
    }
    let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
    mean.clamp(-1.0, 1.0)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}
