use feedback_admin_shared::FeedbackRecord;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const NAMES: &[&str] = &[
    "Alice", "bob", "Carol", "Dave", "erin", "Frank", "Grace", "Heidi", "Ivan", "judy", "Mallory",
    "Niaj", "olivia", "Peggy", "Rupert", "Sybil", "Trent", "Victor", "Walter",
];

const COMMENTS: &[&str] = &[
    "Search feels much faster since the last release.",
    "The export button is hard to find on mobile.",
    "Love the dark theme, please keep it.",
    "Pagination resets when I change the sort order.",
    "Could you add keyboard shortcuts for the reader?",
    "Checkout failed twice before it went through.",
    "Support replied within minutes, thank you!",
    "The onboarding emails are a bit too frequent.",
    "Charts take a long time to load on slow connections.",
];

// 2024-01-01T00:00:00Z
const EPOCH_MS: i64 = 1_704_067_200_000;
const NINETY_DAYS_MS: i64 = 90 * 24 * 60 * 60 * 1000;

/// Generate `count` feedback records; the same seed always yields the same set.
pub fn generate_feedbacks(count: usize, seed: u64) -> Vec<FeedbackRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let name = NAMES.choose(&mut rng).copied().unwrap_or_default();
            let email = rng
                .gen_bool(0.7)
                .then(|| format!("{}@example.com", name.to_lowercase()));
            FeedbackRecord {
                id: format!("fb-{:05}", i + 1),
                name: name.to_string(),
                email,
                rating: rng.gen_range(1..=5),
                comment: COMMENTS.choose(&mut rng).copied().unwrap_or_default().to_string(),
                created_at_ms: EPOCH_MS + rng.gen_range(0..NINETY_DAYS_MS),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::generate_feedbacks;

    #[test]
    fn same_seed_same_records() {
        assert_eq!(generate_feedbacks(20, 7), generate_feedbacks(20, 7));
        assert_ne!(generate_feedbacks(20, 7), generate_feedbacks(20, 8));
    }

    #[test]
    fn ratings_and_ids_are_well_formed() {
        let records = generate_feedbacks(100, 1);
        assert_eq!(records.len(), 100);
        assert!(records.iter().all(|r| (1..=5).contains(&r.rating)));
        assert_eq!(records[0].id, "fb-00001");
        assert_eq!(records[99].id, "fb-00100");
    }
}
