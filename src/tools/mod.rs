//! Tools module - mock travel tools for the agents
//!
//! Contains the tool registry and the four travel lookups.

pub mod attractions;
pub mod fixtures;
pub mod flights;
pub mod hotels;
pub mod registry;
pub mod restaurants;

pub use attractions::{attraction_report, AttractionsTool};
pub use flights::{flight_report, FlightsTool};
pub use hotels::{hotel_report, HotelsTool};
pub use registry::{Tool, ToolRegistry};
pub use restaurants::{restaurant_report, RestaurantsTool};

/// Trailer on every response built from simulated bookings
pub const SIMULATED_MARKER: &str = "*Simulated data*";
