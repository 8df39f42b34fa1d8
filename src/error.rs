use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Day not found: {0}")]
    DayNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Generation service error: {0}")]
    Generation(String),

    #[error("Generation response contained no meal plan")]
    MissingPlan,
}

pub type Result<T> = std::result::Result<T, PlanError>;
