//! Flight search tool
//!
//! Returns the same simulated schedule for every route.

use serde_json::json;

use crate::core::{Result, ToolCall, ToolResult};
use crate::tools::fixtures::FLIGHTS;
use crate::tools::registry::{required_arg, Tool};
use crate::tools::SIMULATED_MARKER;

/// Format the flight offers between two cities
pub fn flight_report(origin: &str, destination: &str, travel_date: &str) -> String {
    let mut response = format!(
        "Flights from {} to {} on {}:\n\n",
        origin, destination, travel_date
    );
    for flight in FLIGHTS {
        response.push_str(&format!(
            "- {} ({}): {} to {}, {}\n",
            flight.airline,
            flight.flight_no,
            flight.departure_time,
            flight.arrival_time,
            flight.price
        ));
    }
    response.push('\n');
    response.push_str(SIMULATED_MARKER);
    response
}

/// `get_flights` tool
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightsTool;

impl Tool for FlightsTool {
    fn name(&self) -> &str {
        "get_flights"
    }

    fn description(&self) -> &str {
        "Mock flight information tool"
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "origin": {
                    "type": "string",
                    "description": "City the traveller departs from"
                },
                "destination": {
                    "type": "string",
                    "description": "City the traveller flies to"
                },
                "travel_date": {
                    "type": "string",
                    "description": "Date of travel, e.g. 2024-01-01"
                }
            },
            "required": ["origin", "destination", "travel_date"]
        })
    }

    fn execute(&self, tool_call: &ToolCall) -> Result<ToolResult> {
        let origin = required_arg(tool_call, "origin")?;
        let destination = required_arg(tool_call, "destination")?;
        let travel_date = required_arg(tool_call, "travel_date")?;

        Ok(ToolResult::success(
            self.name(),
            flight_report(&origin, &destination, &travel_date),
        ))
    }
}
