pub mod prompts;
pub mod render;

pub use prompts::{
    DayMatch, collect_preferences, match_day, prompt_calorie_goal, prompt_yes_no, resolve_day,
};
pub use render::{
    display_calorie_progress, display_day, display_grocery_list, display_macro_split,
    display_weekly_summary,
};
