pub mod pay_record;
pub mod timer_state;
