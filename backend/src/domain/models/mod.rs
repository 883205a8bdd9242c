pub mod booking;
pub mod session_id;
pub mod slot_date;

pub use booking::*;
pub use session_id::*;
pub use slot_date::*;
