// Module declarations
pub(crate) mod period_schedule;
pub(crate) mod period_state;
pub(crate) mod periods_errors;
pub(crate) mod periods_model;
pub(crate) mod periods_service;


// Re-export the public interface
pub use period_schedule::{first_of_month, month_start_of, resolve_schedule, PeriodSchedule};
pub use period_state::{evaluate_period, is_locked, PeriodStatus, TrackStatus};
pub use periods_model::{Quincena, SavingsPeriod};
pub use periods_service::{DueToggleOutcome, PeriodService, PeriodWithStatus};

// Re-export error types for convenience
pub use periods_errors::PeriodError;
