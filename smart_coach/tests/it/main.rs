mod coach;
mod transport;

use serde_json::json;
use serial_test::serial;
use smart_coach::*;

pub const COMPLETION_PATH: &str = "/v1/chat/completions";

/// A coach pointed at the mock server, with an explicit key and logging off.
pub fn coach_for(server: &mockito::Server) -> SmartCoach {
    SmartCoach::deepseek()
        .with_base_url(format!("{}/v1", server.url()))
        .with_api_key("sk-test")
        .with_model("deepseek-chat")
        .logging_enabled(false)
        .init()
        .unwrap()
}

pub fn result_json(summary: &str) -> serde_json::Value {
    json!({
        "summary": summary,
        "smartQuestions": {
            "specific": ["Which customer segment drove most of the 20% retention drop last quarter?"],
            "measurable": ["What 90-day retention rate would show the onboarding change worked?"],
            "actionOriented": ["What can customer success change in the first two weeks of onboarding by next month?"],
            "relevant": ["How does retention in the SMB tier affect this year's revenue target?"],
            "timeBound": []
        },
        "critique": {
            "shortcomings": ["No baseline or target is given", "No time frame"],
            "criticalQuestion": {
                "question": "What do churned customers report as the main reason they left in the last 90 days?",
                "reasoning": "The root cause decides which lever to pull first."
            },
            "negativeExample": {
                "question": "Should we improve retention?",
                "reasoning": "A yes/no question that produces no plan."
            }
        }
    })
}

/// Wrap `content` the way an OpenAI-compatible provider does.
pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 420, "completion_tokens": 380, "total_tokens": 800}
    })
    .to_string()
}
