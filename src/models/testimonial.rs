use chrono::Local;
use serde::{Deserialize, Serialize};

/// Directory holding one portrait per submission, keyed by sequence number.
/// Whether the file actually exists is up to whoever maintains the assets;
/// a missing portrait renders as a broken image, nothing more.
pub const PORTRAIT_DIR: &str = "assets/img/temoignages";

/// What the form hands over on submit: raw field values plus the rating
/// that was selected at that moment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TestimonialDraft {
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
    pub rating: u8,
    pub comment: String,
}

/// One published testimonial. `seq` is 1-based, strictly increasing and
/// never reused; it only drives the portrait lookup and the display
/// ordinal, never identity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestimonialEntry {
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
    pub seq: u32,
}

impl TestimonialEntry {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn portrait_path(&self) -> String {
        format!("{PORTRAIT_DIR}/testimonials-{}.jpg", self.seq)
    }
}

/// Calendar date stamped on an entry at submit time, day/month/year as the
/// site displays it.
pub fn submission_date() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}
