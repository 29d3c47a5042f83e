//! Hotel suggestion tool

use serde_json::json;

use crate::core::{Result, ToolCall, ToolResult};
use crate::tools::fixtures::hotels_for;
use crate::tools::registry::{required_arg, Tool};
use crate::tools::SIMULATED_MARKER;

/// Format hotel offers for a budget tier
///
/// Unknown tiers fall back to mid-range; the header still echoes the budget
/// as the caller wrote it.
pub fn hotel_report(destination: &str, budget: &str) -> String {
    let mut response = format!("Hotels in {} ({}):\n\n", destination, budget);
    for hotel in hotels_for(budget) {
        response.push_str(&format!(
            "- {}: {}/night, Rating: {}\n",
            hotel.name, hotel.price, hotel.rating
        ));
    }
    response.push('\n');
    response.push_str(SIMULATED_MARKER);
    response
}

/// `suggest_hotels` tool
#[derive(Debug, Clone, Copy, Default)]
pub struct HotelsTool;

impl Tool for HotelsTool {
    fn name(&self) -> &str {
        "suggest_hotels"
    }

    fn description(&self) -> &str {
        "Mock hotels tool"
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "destination": {
                    "type": "string",
                    "description": "City to stay in"
                },
                "budget": {
                    "type": "string",
                    "description": "Budget tier: economy, mid-range or luxury"
                }
            },
            "required": ["destination", "budget"]
        })
    }

    fn execute(&self, tool_call: &ToolCall) -> Result<ToolResult> {
        let destination = required_arg(tool_call, "destination")?;
        let budget = required_arg(tool_call, "budget")?;

        Ok(ToolResult::success(
            self.name(),
            hotel_report(&destination, &budget),
        ))
    }
}
