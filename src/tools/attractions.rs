//! Attraction recommendation tool
//!
//! Samples the city's attractions so repeated questions get some variety.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde_json::json;

use crate::core::{Result, ToolCall, ToolResult};
use crate::tools::fixtures::attractions_for;
use crate::tools::registry::{required_arg, Tool};

/// How many attractions to suggest per city
pub const ATTRACTION_SAMPLE_SIZE: usize = 3;

/// Format a random sample of a city's attractions
pub fn attraction_report<R: Rng + ?Sized>(city: &str, rng: &mut R) -> String {
    match attractions_for(city) {
        Some(attractions) => {
            let picks: Vec<&str> = attractions
                .choose_multiple(rng, ATTRACTION_SAMPLE_SIZE)
                .copied()
                .collect();
            format!("Attractions in {}:\n- {}", city, picks.join("\n- "))
        }
        None => format!("No attraction data for {}", city),
    }
}

/// `get_attractions` tool
#[derive(Debug, Clone, Copy, Default)]
pub struct AttractionsTool;

impl Tool for AttractionsTool {
    fn name(&self) -> &str {
        "get_attractions"
    }

    fn description(&self) -> &str {
        "Mock attractions tool"
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City to find attractions in"
                }
            },
            "required": ["city"]
        })
    }

    fn execute(&self, tool_call: &ToolCall) -> Result<ToolResult> {
        let city = required_arg(tool_call, "city")?;
        Ok(ToolResult::success(
            self.name(),
            attraction_report(&city, &mut rand::rng()),
        ))
    }
}
