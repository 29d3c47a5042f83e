//! The travel crew
//!
//! Three specialists behind one orchestrator. Only the orchestrator is
//! returned; the specialists are reachable through its handoffs.

use std::sync::Arc;

use crate::agent::definition::AgentDefinition;
use crate::core::config::ModelConfig;
use crate::core::Result;
use crate::tools::{AttractionsTool, FlightsTool, HotelsTool, RestaurantsTool};

pub const TRAVEL_DESIGNER: &str = "Travel Designer";
pub const DESTINATION_EXPERT: &str = "Destination Expert";
pub const BOOKING_AGENT: &str = "Booking Agent";
pub const LOCAL_GUIDE: &str = "Local Guide";

/// Build the orchestrator and its specialists
pub fn build_travel_crew(models: &ModelConfig) -> Result<Arc<AgentDefinition>> {
    let destination_agent = AgentDefinition::builder(DESTINATION_EXPERT)
        .instructions("Suggest travel destinations based on user preferences")
        .model(&models.specialist)
        .handoff_description("Use for choosing where to travel.")
        .build()?;

    let booking_agent = AgentDefinition::builder(BOOKING_AGENT)
        .instructions("Help with flight and hotel bookings")
        .model(&models.specialist)
        .handoff_description("Use for flights and hotels.")
        .tool(FlightsTool)
        .tool(HotelsTool)
        .build()?;

    let explore_agent = AgentDefinition::builder(LOCAL_GUIDE)
        .instructions("Provide attraction and restaurant recommendations")
        .model(&models.specialist)
        .handoff_description("Use for sights and places to eat.")
        .tool(AttractionsTool)
        .tool(RestaurantsTool)
        .build()?;

    let orchestrator = AgentDefinition::builder(TRAVEL_DESIGNER)
        .instructions("Coordinate between specialized agents to plan trips")
        .model(&models.orchestrator)
        .handoff(Arc::new(destination_agent))
        .handoff(Arc::new(booking_agent))
        .handoff(Arc::new(explore_agent))
        .build()?;

    Ok(Arc::new(orchestrator))
}

/// Render the crew as an indented tree for display
pub fn describe_crew(orchestrator: &AgentDefinition) -> String {
    let mut out = format!("{} [{}]\n", orchestrator.name(), orchestrator.model());
    for agent in orchestrator.handoffs() {
        let tools = agent.tools().names();
        let tools = if tools.is_empty() {
            "no tools".to_string()
        } else {
            tools.join(", ")
        };
        out.push_str(&format!(
            "  -> {} [{}]: {}\n",
            agent.name(),
            agent.model(),
            tools
        ));
    }
    out
}
