pub mod wiring;

pub use wiring::{build_handler, build_service, LiveHandler, LiveService};
