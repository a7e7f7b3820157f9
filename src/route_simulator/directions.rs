use crate::domain::DirectionStep;

const CANNED_INSTRUCTIONS: [&str; 4] = [
    "Bulunduğunuz yerden kuzeye doğru 1.2 km ilerleyin",
    "Sağa dönün ve 800 metre devam edin",
    "Kavşakta sola dönün",
    "2.5 km düz devam edin",
];

/// Canned turn-by-turn steps towards `destination_name`, numbered from 1.
pub fn simulate_directions(destination_name: &str) -> Vec<DirectionStep> {
    CANNED_INSTRUCTIONS
        .iter()
        .map(|instruction| instruction.to_string())
        .chain(std::iter::once(format!("{}'na vardınız", destination_name)))
        .zip(1..)
        .map(|(instruction_text, step_number)| DirectionStep { step_number, instruction_text })
        .collect()
}
