//! Star row rendering, shared by the rating control and the published list.

pub const STAR_FILLED: &str = "bi bi-star-fill";
pub const STAR_EMPTY: &str = "bi bi-star";

/// Icon classes for a rating of `count`: `count` filled stars followed by
/// `5 - count` empty ones. The domain is not clamped; the caller guarantees
/// `count <= 5`, and anything larger yields an over-long all-filled row.
pub fn star_classes(count: u8) -> Vec<&'static str> {
    let mut classes = Vec::with_capacity(5);
    for _ in 0..count {
        classes.push(STAR_FILLED);
    }
    for _ in count..5 {
        classes.push(STAR_EMPTY);
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_domain_counts_yield_five_markers() {
        for count in 0..=5u8 {
            let classes = star_classes(count);
            assert_eq!(classes.len(), 5);
            assert!(classes[..count as usize]
                .iter()
                .all(|class| *class == STAR_FILLED));
            assert!(classes[count as usize..]
                .iter()
                .all(|class| *class == STAR_EMPTY));
        }
    }

    #[test]
    fn zero_is_all_empty_and_five_all_filled() {
        assert!(star_classes(0).iter().all(|class| *class == STAR_EMPTY));
        assert!(star_classes(5).iter().all(|class| *class == STAR_FILLED));
    }

    #[test]
    fn out_of_domain_is_degenerate_not_clamped() {
        let classes = star_classes(7);
        assert_eq!(classes.len(), 7);
        assert!(classes.iter().all(|class| *class == STAR_FILLED));
    }
}
