//! Population overview - statistics across every user in the system.

mod population;

pub use population::{
    summarize_population, LevelSlice, PopulationOverview, PopulationRow, PopulationStats,
    UserDetail, CURRENT_USER_CATEGORY, DEFAULT_CATEGORY, NOT_EVALUATED_COLOUR,
};
