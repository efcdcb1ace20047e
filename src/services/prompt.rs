// src/services/prompt.rs
//
// Prompt construction. Both builders are pure: same inputs, same string,
// no failure path.

const BASE_PROMPT: &str =
    "Your name is Waypointer, a travel assistant for Vancouver, British Columbia, Canada.";

const RELAXATION_PROMPT: &str = "Focus on suggesting quiet, peaceful, and scenic locations like spas, beaches, and tranquil parks. Provide specific place suggestions.";
const ADVENTURE_PROMPT: &str = "Recommend thrilling activities such as hiking, kayaking, zip-lining, and outdoor exploration. Provide specific place suggestions.";
const CULTURAL_PROMPT: &str = "Suggest historical sites, museums, art galleries, and local cultural experiences. Provide specific place suggestions.";
const GENERIC_PROMPT: &str = "Provide general travel recommendations.";

const ADDITIONAL_PROMPT: &str =
    "Please limit to 3 suggestions unless specified in my request. Provide specific place suggestions.";

/// System prompt for the chat endpoint. The style lookup is
/// case-insensitive; unknown styles get the generic instruction instead of
/// an error.
pub fn chat_system_prompt(travel_style: &str) -> String {
    let style_message = match travel_style.to_lowercase().as_str() {
        "relaxation" => RELAXATION_PROMPT,
        "adventure" => ADVENTURE_PROMPT,
        "cultural" => CULTURAL_PROMPT,
        _ => GENERIC_PROMPT,
    };

    format!("{BASE_PROMPT} {style_message} {ADDITIONAL_PROMPT}")
}

/// User prompt for the packing endpoint. The condition is lower-cased in
/// the prompt; `{:?}` keeps the trailing `.0` on whole-degree temperatures.
pub fn packing_prompt(city: &str, temperature: f64, condition: &str) -> String {
    format!(
        "You are a helpful travel assistant. Based on this weather: \
         {temperature:?}°C, {condition} in {city}, suggest what a traveler \
         should pack. Keep it short and under 3 sentences.",
        condition = condition.to_lowercase(),
    )
}
