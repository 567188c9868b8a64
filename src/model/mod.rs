pub mod notes;
pub mod period;
pub mod record;
