// Mock feedback used by the `mock` build, which ships without a backend.

use feedback_admin_shared::FeedbackRecord;

const MOCK_FEEDBACK_COUNT: usize = 43;
// 2024-01-01T00:00:00Z
const MOCK_EPOCH_MS: i64 = 1_704_067_200_000;
const HOUR_MS: i64 = 60 * 60 * 1000;

/// Deterministic feedback set; the same on every call so cached pages stay
/// consistent with fresh ones.
pub fn mock_feedbacks() -> Vec<FeedbackRecord> {
    let names = [
        "Alice", "bob", "Carol", "Dave", "erin", "Frank", "Grace", "Heidi", "Ivan", "judy", "",
    ];
    let comments = [
        "Search feels much faster since the last release.",
        "The export button is hard to find on mobile.",
        "Love the dark theme, please keep it.",
        "Pagination resets when I change the sort order.",
        "Could you add keyboard shortcuts for the reader?",
        "Checkout failed twice before it went through.",
        "Support replied within minutes, thank you!",
    ];

    (0..MOCK_FEEDBACK_COUNT)
        .map(|i| {
            let name = names[i % names.len()];
            FeedbackRecord {
                id: format!("fb-{:04}", i + 1),
                name: name.to_string(),
                email: (!name.is_empty() && i % 3 != 0)
                    .then(|| format!("{}@example.com", name.to_lowercase())),
                rating: (i * 7 % 5 + 1) as u8,
                comment: comments[i % comments.len()].to_string(),
                created_at_ms: MOCK_EPOCH_MS + (i as i64) * 13 * HOUR_MS,
            }
        })
        .collect()
}
