pub mod airports;
pub mod app_config;
pub mod mock;

pub use airports::MockAirportLookup;
pub use app_config::Config;
pub use mock::MockFlightSource;
