/// In-memory testimonial store. The rendered list is a projection of this
/// board, never the other way around, so entries stay queryable and the
/// widget can be exercised without a DOM.
use crate::models::testimonial::{TestimonialDraft, TestimonialEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialBoard {
    entries: Vec<TestimonialEntry>,
    next_seq: u32,
}

impl Default for TestimonialBoard {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 1,
        }
    }
}

impl TestimonialBoard {
    /// Newest first.
    pub fn entries(&self) -> &[TestimonialEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Publishes a draft: stamps it with the next sequence number (the first
    /// submission gets 1) and the given date, then prepends it so the list
    /// stays most-recent-first. Sequence numbers are never reused, even if a
    /// caller later drops entries from a clone of the board.
    pub fn submit(&mut self, draft: TestimonialDraft, date: String) -> &TestimonialEntry {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.entries.insert(
            0,
            TestimonialEntry {
                first_name: draft.first_name,
                last_name: draft.last_name,
                occupation: draft.occupation,
                rating: draft.rating,
                comment: draft.comment,
                date,
                seq,
            },
        );
        &self.entries[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first_name: &str, rating: u8) -> TestimonialDraft {
        TestimonialDraft {
            first_name: first_name.to_string(),
            last_name: "Martin".to_string(),
            occupation: "Chef".to_string(),
            rating,
            comment: "Great work".to_string(),
        }
    }

    #[test]
    fn first_submission_gets_sequence_one() {
        let mut board = TestimonialBoard::default();
        let entry = board.submit(draft("Alice", 4), "01/08/2026".to_string());
        assert_eq!(entry.seq, 1);
    }

    #[test]
    fn sequence_numbers_increase_by_one() {
        let mut board = TestimonialBoard::default();
        for expected in 1..=5u32 {
            let seq = board
                .submit(draft("Alice", 3), "01/08/2026".to_string())
                .seq;
            assert_eq!(seq, expected);
        }
    }

    #[test]
    fn new_entry_is_prepended() {
        let mut board = TestimonialBoard::default();
        board.submit(draft("Alice", 4), "01/08/2026".to_string());
        board.submit(draft("Bruno", 5), "02/08/2026".to_string());

        let entries = board.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].first_name, "Bruno");
        // the previous head is now second
        assert_eq!(entries[1].first_name, "Alice");
        assert_eq!(entries[1].seq, 1);
    }

    #[test]
    fn submitted_values_are_carried_literally() {
        let mut board = TestimonialBoard::default();
        let entry = board.submit(draft("Alice", 4), "01/08/2026".to_string());

        assert_eq!(entry.full_name(), "Alice Martin");
        assert_eq!(entry.occupation, "Chef");
        assert_eq!(entry.rating, 4);
        assert_eq!(entry.comment, "Great work");
        assert_eq!(entry.date, "01/08/2026");
        assert!(entry.portrait_path().ends_with("testimonials-1.jpg"));
    }

    #[test]
    fn empty_fields_are_accepted_as_empty_strings() {
        let mut board = TestimonialBoard::default();
        let entry = board.submit(TestimonialDraft::default(), "01/08/2026".to_string());
        assert_eq!(entry.first_name, "");
        assert_eq!(entry.rating, 0);
        assert_eq!(entry.seq, 1);
    }
}
