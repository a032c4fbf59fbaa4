pub mod clock;

pub use clock::{local_day, reference_day, today_in};
