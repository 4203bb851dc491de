//! Static display data: profile copy, skill ratings, the generated KPI
//! series and the case-study stories.
//!
//! Everything here is constant or a deterministic function of an index.

pub mod kpi;
pub mod profile;
pub mod skills;
pub mod stories;

pub use kpi::{KPI_SERIES_LEN, KpiMetric, KpiPoint, kpi_point, live_series};
pub use profile::Profile;
pub use skills::{SKILLS, Skill};
pub use stories::{STORIES, Story};
