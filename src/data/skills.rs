//! Skill ratings shown on the radar panel.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub subject: &'static str,
    /// Self-rating out of 100.
    pub score: u8,
}

pub const SKILLS: [Skill; 6] = [
    Skill { subject: "Analytics", score: 92 },
    Skill { subject: "Automation", score: 86 },
    Skill { subject: "Visualization", score: 90 },
    Skill { subject: "Communication", score: 88 },
    Skill { subject: "AI Curiosity", score: 84 },
    Skill { subject: "Mentorship", score: 87 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.score <= 100));
        assert_eq!(SKILLS[0].subject, "Analytics");
    }
}
