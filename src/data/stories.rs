//! Case-study cards ("Data Stories").

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Story {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

pub const STORIES: [Story; 3] = [
    Story {
        title: "HR Analytics @ NJ Transit",
        bullets: &[
            "Contingent Workforce Dashboard (headcount, cost, tenure, DEI)",
            "HR Analytics Dashboard (hiring, retention, grievances, turnover)",
            "Saved 15+ hrs/month and flagged trends 30% faster",
        ],
    },
    Story {
        title: "BI Automation @ USEReady",
        bullets: &[
            "Migrated 100+ reports to Power BI & Snowflake",
            "DAX + RLS + incremental refresh → 30% faster processing",
            "Standard templates saved 100+ hrs/year",
        ],
    },
    Story {
        title: "Public Health @ BBMP",
        bullets: &[
            "Real-time dashboards for hospitalization & resources",
            "25% faster emergency allocation via data insights",
        ],
    },
];
