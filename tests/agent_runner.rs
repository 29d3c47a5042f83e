//! Runner and session behaviour against a scripted provider
//!
//! The provider replays canned responses and records every request so the
//! tests can check which agent, model and tools each turn used.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use wayfarer::agent::crew::{BOOKING_AGENT, LOCAL_GUIDE, TRAVEL_DESIGNER};
use wayfarer::agent::session::{ASSISTANT_AUTHOR, SYSTEM_AUTHOR, WELCOME_MESSAGE};
use wayfarer::agent::{build_travel_crew, ChatSession, RunItem, Runner};
use wayfarer::core::config::{AgentSettings, ModelConfig};
use wayfarer::core::{Config, Message, Result, ToolCall, ToolDefinition, WayfarerError};
use wayfarer::llm::{GenerateOptions, LLMProvider, LLMResponse};

/// One recorded provider call
#[derive(Debug, Clone)]
struct Request {
    model: String,
    system_prompt: String,
    tool_names: Vec<String>,
    messages: Vec<Message>,
    temperature: Option<f32>,
}

#[derive(Default)]
struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<LLMResponse>>>,
    requests: Mutex<Vec<Request>>,
    repeat_last: Option<LLMResponse>,
}

impl ScriptedProvider {
    fn new(responses: Vec<Result<LLMResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Default::default()
        }
    }

    /// Answers every call with the same response
    fn looping(response: LLMResponse) -> Self {
        Self {
            repeat_last: Some(response),
            ..Default::default()
        }
    }

    fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    async fn chat_with_tools(
        &self,
        model: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
        options: Option<GenerateOptions>,
    ) -> Result<LLMResponse> {
        self.requests.lock().unwrap().push(Request {
            model: model.to_string(),
            system_prompt: messages
                .first()
                .map(|m| m.content.clone())
                .unwrap_or_default(),
            tool_names: tools.iter().map(|t| t.function.name.clone()).collect(),
            messages: messages.to_vec(),
            temperature: options.and_then(|o| o.temperature),
        });

        if let Some(response) = &self.repeat_last {
            return Ok(response.clone());
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(WayfarerError::provider("script exhausted")))
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        Ok(vec!["gpt-4".to_string(), "gpt-3.5-turbo".to_string()])
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn models() -> ModelConfig {
    ModelConfig {
        orchestrator: "gpt-4".to_string(),
        specialist: "gpt-3.5-turbo".to_string(),
    }
}

fn call(id: &str, name: &str, arguments: serde_json::Value) -> ToolCall {
    ToolCall::new(id, name, arguments)
}

#[tokio::test]
async fn orchestrator_hands_off_and_specialist_uses_tools() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok(LLMResponse::tool_calls(
            "gpt-4",
            vec![call("call_1", "transfer_to_booking_agent", json!({}))],
        )),
        Ok(LLMResponse::tool_calls(
            "gpt-3.5-turbo",
            vec![call(
                "call_2",
                "get_flights",
                json!({"origin": "Paris", "destination": "Tokyo", "travel_date": "2024-01-01"}),
            )],
        )),
        Ok(LLMResponse::text(
            "gpt-3.5-turbo",
            "AX101 leaves at 08:00 AM for $350.",
        )),
    ]));

    let orchestrator = build_travel_crew(&models()).unwrap();
    let runner = Runner::new(provider.clone());
    let result = runner
        .run(&orchestrator, "Flights from Paris to Tokyo on 2024-01-01?")
        .await
        .unwrap();

    assert_eq!(result.final_output, "AX101 leaves at 08:00 AM for $350.");
    assert_eq!(result.last_agent, BOOKING_AGENT);
    assert_eq!(result.turns, 3);
    assert_eq!(result.handoff_path(), vec![TRAVEL_DESIGNER, BOOKING_AGENT]);

    let requests = provider.requests();
    assert_eq!(requests.len(), 3);

    // Turn 1: the orchestrator only sees handoff tools
    assert_eq!(requests[0].model, "gpt-4");
    assert_eq!(
        requests[0].system_prompt,
        "Coordinate between specialized agents to plan trips"
    );
    assert_eq!(
        requests[0].tool_names,
        vec![
            "transfer_to_destination_expert",
            "transfer_to_booking_agent",
            "transfer_to_local_guide"
        ]
    );

    // Turn 2: the booking agent sees its own tools and the carried-over transcript
    assert_eq!(requests[1].model, "gpt-3.5-turbo");
    assert_eq!(
        requests[1].system_prompt,
        "Help with flight and hotel bookings"
    );
    assert_eq!(requests[1].tool_names, vec!["get_flights", "suggest_hotels"]);
    let handoff_output = requests[1].messages.last().unwrap();
    assert_eq!(handoff_output.role, "tool");
    assert_eq!(handoff_output.tool_call_id.as_deref(), Some("call_1"));
    assert_eq!(handoff_output.content, r#"{"assistant":"Booking Agent"}"#);

    // Turn 3: the flight tool output was fed back
    let tool_output = requests[2].messages.last().unwrap();
    assert_eq!(tool_output.tool_call_id.as_deref(), Some("call_2"));
    for code in ["AX101", "FW205", "SP310"] {
        assert!(tool_output.content.contains(code));
    }

    assert!(result.items.iter().any(|item| matches!(
        item,
        RunItem::ToolOutput { agent, tool_name, success: true, .. }
            if agent == BOOKING_AGENT && tool_name == "get_flights"
    )));
}

#[tokio::test]
async fn orchestrator_can_answer_without_handing_off() {
    let provider = Arc::new(ScriptedProvider::new(vec![Ok(LLMResponse::text(
        "gpt-4",
        "Happy to help! Where are you headed?",
    ))]));

    let orchestrator = build_travel_crew(&models()).unwrap();
    let result = Runner::new(provider).run(&orchestrator, "hi").await.unwrap();

    assert_eq!(result.last_agent, TRAVEL_DESIGNER);
    assert_eq!(result.turns, 1);
    assert!(result.handoff_path().is_empty());
}

#[tokio::test]
async fn only_the_first_handoff_in_a_turn_is_followed() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok(LLMResponse::tool_calls(
            "gpt-4",
            vec![
                call("call_a", "transfer_to_local_guide", json!({})),
                call("call_b", "transfer_to_booking_agent", json!({})),
            ],
        )),
        Ok(LLMResponse::text("gpt-3.5-turbo", "Visit the Louvre.")),
    ]));

    let orchestrator = build_travel_crew(&models()).unwrap();
    let result = Runner::new(provider.clone())
        .run(&orchestrator, "What should I see in Paris?")
        .await
        .unwrap();

    assert_eq!(result.last_agent, LOCAL_GUIDE);

    let second = &provider.requests()[1];
    let ignored = second
        .messages
        .iter()
        .find(|m| m.tool_call_id.as_deref() == Some("call_b"))
        .unwrap();
    assert_eq!(ignored.content, "Multiple handoffs detected, ignoring this one.");
}

#[tokio::test]
async fn tool_errors_are_reported_to_the_model() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok(LLMResponse::tool_calls(
            "gpt-4",
            vec![call("call_1", "transfer_to_local_guide", json!({}))],
        )),
        Ok(LLMResponse::tool_calls(
            "gpt-3.5-turbo",
            vec![
                call("call_2", "get_attractions", json!({})),
                call("call_3", "get_flights", json!({"origin": "Rome"})),
            ],
        )),
        Ok(LLMResponse::text("gpt-3.5-turbo", "Which city?")),
    ]));

    let orchestrator = build_travel_crew(&models()).unwrap();
    let result = Runner::new(provider.clone())
        .run(&orchestrator, "Any sights?")
        .await
        .unwrap();
    assert_eq!(result.final_output, "Which city?");

    let last = &provider.requests()[2];
    let outputs: Vec<&Message> = last.messages.iter().filter(|m| m.role == "tool").collect();
    // handoff answer plus two failed tool outputs
    assert_eq!(outputs.len(), 3);
    assert!(outputs[1].content.contains("missing required argument 'city'"));
    assert!(outputs[2].content.contains("Unknown tool: get_flights"));
}

#[tokio::test]
async fn endless_tool_loop_hits_max_turns() {
    let provider = Arc::new(ScriptedProvider::looping(LLMResponse::tool_calls(
        "gpt-4",
        vec![call("call_x", "get_nothing", json!({}))],
    )));

    let orchestrator = build_travel_crew(&models()).unwrap();
    let err = Runner::new(provider.clone())
        .with_max_turns(3)
        .run(&orchestrator, "loop forever")
        .await
        .unwrap_err();

    assert!(matches!(err, WayfarerError::MaxTurnsExceeded(3)));
    assert_eq!(provider.requests().len(), 3);
}

#[tokio::test]
async fn runner_from_settings_applies_turn_limit_and_temperature() {
    let provider = Arc::new(ScriptedProvider::looping(LLMResponse::tool_calls(
        "gpt-4",
        vec![call("call_x", "get_nothing", json!({}))],
    )));
    let settings = AgentSettings {
        max_turns: 2,
        temperature: Some(0.2),
        debug: false,
    };

    let orchestrator = build_travel_crew(&models()).unwrap();
    let runner = Runner::from_settings(provider.clone(), &settings);
    assert_eq!(runner.max_turns(), 2);

    let err = runner.run(&orchestrator, "anything").await.unwrap_err();
    assert!(matches!(err, WayfarerError::MaxTurnsExceeded(2)));

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.temperature == Some(0.2)));
}

#[tokio::test]
async fn session_welcomes_then_answers_with_source_agent() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok(LLMResponse::tool_calls(
            "gpt-4",
            vec![call("call_1", "transfer_to_local_guide", json!({}))],
        )),
        Ok(LLMResponse::text("gpt-3.5-turbo", "Try Ichiran Ramen.")),
    ]));

    let mut config = Config::default();
    config.models = models();
    let (session, welcome) = ChatSession::start(&config, provider).unwrap();

    assert_eq!(welcome.author, ASSISTANT_AUTHOR);
    assert_eq!(welcome.content, WELCOME_MESSAGE);
    assert!(welcome.content.starts_with("**Welcome to Travel Assistant!**"));

    let reply = session.on_message("Where should I eat in Tokyo?").await;
    assert_eq!(reply.author, ASSISTANT_AUTHOR);
    assert_eq!(reply.content, "Try Ichiran Ramen.");
    assert_eq!(reply.source_agent.as_deref(), Some(LOCAL_GUIDE));
}

#[tokio::test]
async fn session_renders_runner_failures_as_system_message() {
    let provider = Arc::new(ScriptedProvider::new(vec![Err(WayfarerError::provider(
        "upstream timed out",
    ))]));

    let (session, _) = ChatSession::start(&Config::default(), provider).unwrap();
    let reply = session.on_message("Book me a hotel in Paris").await;

    assert_eq!(reply.author, SYSTEM_AUTHOR);
    assert_eq!(
        reply.content,
        "Error processing request: Provider error: upstream timed out"
    );
    assert!(reply.source_agent.is_none());
}

#[test]
fn each_message_starts_a_fresh_run() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok(LLMResponse::text("gpt-4", "first")),
        Ok(LLMResponse::text("gpt-4", "second")),
    ]));
    let (session, _) = ChatSession::start(&Config::default(), provider.clone()).unwrap();

    tokio_test::block_on(async {
        session.on_message("one").await;
        session.on_message("two").await;
    });

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    // system prompt plus the single user message, nothing carried over
    assert_eq!(requests[1].messages.len(), 2);
    assert_eq!(requests[1].messages[1].content, "two");
}
