//! Prompt templates for the motivation and image calls.
//!
//! User text goes in verbatim. Nothing here guards against prompt injection.

use crate::persona::Persona;

/// Instruction prompt for the chat model. Opens with the persona's framing; tone is lower-cased.
///
/// The instruction text reads as plain English rather than repeating the older template's
/// slips ("to explaining", "should excited"), so it is not byte-identical to that template.
pub fn motivation_prompt(user_text: &str, tone: &str, persona: Persona) -> String {
    format!(
        "{mood} The user has just woken up and feels: '{user_text}'. \
         Write your entire response in a {tone} tone. \
         Reply with a motivational message explaining to them why they should be excited for the day. \
         Also write a haiku that addresses the user's feelings and ends with optimism. \
         Also give 3 actionable steps to help them improve their morning. \
         Also include a cheerful, UNIQUE YouTube music video that fits their feelings. \
         PLEASE INCLUDE THE YOUTUBE URL ON A NEW LINE AT THE BOTTOM AND MAKE SURE THE VIDEO IS CURRENTLY AVAILABLE ON YOUTUBE. \
         DO NOT CHOOSE A SONG WRITTEN BY RICK ASTLEY!",
        mood = persona.system_prompt(),
        user_text = user_text,
        tone = tone.to_lowercase(),
    )
}

/// Image prompt; independent of the persona.
pub fn image_prompt(user_text: &str, tone: &str) -> String {
    format!(
        "A morning scene to help convince someone to get out of bed who is feeling {} with a {} tone",
        user_text,
        tone.to_lowercase()
    )
}
