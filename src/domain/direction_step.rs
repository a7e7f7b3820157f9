#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionStep {
    pub step_number: u32,
    pub instruction_text: String,
}
