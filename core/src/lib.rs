pub mod config;
pub mod error;
pub mod format;
pub mod intake;
pub mod model;
pub mod schedule;
pub mod service;

pub use config::Settings;
pub use error::IntakeError;
pub use format::{format_elapsed, CurrencyFormat};
pub use intake::{Document, PayslipExtractor, PlaceholderExtractor, PlaceholderFigures};
pub use model::pay_record::PayRecord;
pub use model::timer_state::TimerState;
pub use schedule::Ticker;
pub use service::accrual_timer::AccrualTimer;
pub use service::intake_service::DocumentIntake;

/// Intake wired the way every front end uses it: placeholder figures, configured types.
pub fn placeholder_intake(settings: &Settings) -> DocumentIntake<PlaceholderExtractor> {
    DocumentIntake::new(
        PlaceholderExtractor::new(settings.placeholder),
        settings.accepted_types.clone(),
    )
}
