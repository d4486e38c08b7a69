//! The editable form state shared by the GUI and CLI front-ends.

/// Current values of the lesson form. All fields are kept as entered text;
/// `num_slides` is only parsed at submission time.
#[derive(Debug, Clone)]
pub struct FormState {
    pub lesson_topic: String,
    pub district: String,
    pub grade_level: String,
    pub subject_focus: String,
    pub custom_prompt: String,
    pub num_slides: String,
    /// Status line shown after a submission attempt. Derived, never sent.
    pub message: String
}

impl Default for FormState {
    fn default() -> FormState {
        FormState {
            lesson_topic: String::default(),
            district: String::default(),
            grade_level: String::default(),
            subject_focus: String::default(),
            custom_prompt: String::default(),
            num_slides: format!("3"),
            message: String::default()
        }
    }
}

/// Parses a slide count entered as text. Returns `Some` iff the text is all
/// ASCII digits and the value is in 1..=10, so `"03"` passes and `""`,
/// signs, and decimals don't.
pub fn slide_count(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) { return None; }
    raw.parse().ok().filter(|n| (1..=10).contains(n))
}
