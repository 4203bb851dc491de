//! Header and footer copy.

/// Portfolio owner shown in the header, the simulator subtitle and the footer.
pub const DEFAULT_OWNER: &str = "Anusha Hegde";

pub const TITLE_SUFFIX: &str = "Analytics Portfolio";

pub const TAGLINE: &str = "Where data meets decisions. Explore interactive scenarios, live-style KPIs, and the stories behind the impact.";

/// Header link labels. Targets are not wired up.
pub const LINKS: [&str; 2] = ["Download Résumé", "Contact"];

pub const BUILT_WITH: &str = "Built with Rust, Ratatui, Plotters & clap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub owner: String,
}

impl Profile {
    pub fn new(owner: impl Into<String>) -> Self {
        Self { owner: owner.into() }
    }

    /// `"{owner} — Analytics Portfolio"`.
    pub fn title(&self) -> String {
        format!("{} — {TITLE_SUFFIX}", self.owner)
    }

    /// Simulator subtitle for the selected organization.
    pub fn simulator_pitch(&self, org: &str) -> String {
        format!(
            "Estimate how much time and value {} could unlock for your {org}.",
            self.owner
        )
    }

    /// `"© {year} {owner} — Built with ..."`.
    pub fn footer(&self, year: i32) -> String {
        format!("© {year} {} — {BUILT_WITH}", self.owner)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER)
    }
}
