pub mod accrual_timer;
pub mod intake_service;
