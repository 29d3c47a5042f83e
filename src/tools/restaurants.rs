//! Restaurant recommendation tool

use serde_json::json;

use crate::core::{Result, ToolCall, ToolResult};
use crate::tools::fixtures::{restaurants_for, ANY_CUISINE};
use crate::tools::registry::{required_arg, Tool};

/// Format restaurant suggestions for a city and cuisine
pub fn restaurant_report(city: &str, cuisine: &str) -> String {
    match restaurants_for(city, cuisine) {
        Some(suggestions) => format!(
            "Restaurants in {} ({}):\n- {}",
            city,
            cuisine,
            suggestions.join("\n- ")
        ),
        None => format!("No restaurant data for {}", city),
    }
}

/// `get_restaurants` tool
#[derive(Debug, Clone, Copy, Default)]
pub struct RestaurantsTool;

impl Tool for RestaurantsTool {
    fn name(&self) -> &str {
        "get_restaurants"
    }

    fn description(&self) -> &str {
        "Mock restaurants tool"
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City to find restaurants in"
                },
                "cuisine": {
                    "type": "string",
                    "description": "Preferred cuisine, or \"any\"",
                    "default": ANY_CUISINE
                }
            },
            "required": ["city"]
        })
    }

    fn execute(&self, tool_call: &ToolCall) -> Result<ToolResult> {
        let city = required_arg(tool_call, "city")?;
        let cuisine = tool_call
            .get_string("cuisine")
            .unwrap_or_else(|| ANY_CUISINE.to_string());

        Ok(ToolResult::success(
            self.name(),
            restaurant_report(&city, &cuisine),
        ))
    }
}
