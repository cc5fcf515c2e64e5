pub mod display;
pub mod session;

pub use display::DisplayBill;
pub use session::{Session, UserType};
