use crate::review::Review;

/// Reviews bundled with the client. They are always shown, even when the
/// shared document is empty or unreachable.
pub fn seed_reviews() -> Vec<Review> {
    vec![Review {
        id: 1,
        name: "BhuviSuri".to_string(),
        rating: 5,
        review: "After watching the raw statement, I'm completely blown away! Nani's transformation looks incredible. This is going to be a game-changer for Telugu cinema! 🔥".to_string(),
        date: "Feb 10, 2026".to_string(),
        avatar: "https://ui-avatars.com/api/?name=Bhuvi+Suri&background=dc2626&color=fff&bold=true".to_string(),
    }]
}
