pub mod page;

pub use page::{Body, NavIcon, Page};
