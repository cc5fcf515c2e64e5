pub mod intent;
pub mod router;
pub mod routes;

pub use intent::Intent;
pub use router::{Navigation, Router};
pub use routes::RoutePath;
