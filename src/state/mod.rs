mod manager;
mod persistence;

pub use manager::PlanStateManager;
pub use persistence::{
    export_grocery_csv, load_generation_response, load_weekly_plan, save_request,
    save_weekly_plan,
};
