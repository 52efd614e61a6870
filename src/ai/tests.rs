#[cfg(test)]
mod tests {
    use crate::ai::{AIError, LocalModelClient, ToolCallProvider};
    use crate::config::ModelConfig;
    use mockito::{Matcher, Server, ServerGuard};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn setup_test_server() -> (ServerGuard, LocalModelClient) {
        let server = Server::new_async().await;

        let config = ModelConfig {
            name: "gitara-test".to_string(),
            base_url: format!("{}/v1/", server.url()),
            api_key: "EMPTY".to_string(),
            timeout_secs: 5,
        };
        let client = LocalModelClient::new(&config).unwrap();

        (server, client)
    }

    fn tool_call_body(calls: serde_json::Value) -> String {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "finish_reason": "tool_calls",
                "message": {"role": "assistant", "content": null, "tool_calls": calls}
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_endpoint_joins_base_url() {
        let (server, client) = setup_test_server().await;
        assert_eq!(
            client.endpoint(),
            format!("{}/v1/chat/completions", server.url())
        );
    }

    #[tokio::test]
    async fn test_successful_tool_call() {
        let (mut server, client) = setup_test_server().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer EMPTY")
            .match_body(Matcher::PartialJson(json!({
                "model": "gitara-test",
                "temperature": 0.0,
                "tool_choice": "required",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(tool_call_body(json!([{
                "id": "call_0",
                "type": "function",
                "function": {
                    "name": "git_push",
                    "arguments": "{\"branch\": \"feature\", \"set_upstream\": true}"
                }
            }])))
            .create_async()
            .await;

        let call = client.invoke("push this new branch").await.unwrap();
        assert_eq!(call.name, "git_push");
        assert_eq!(call.arguments.string("branch").as_deref(), Some("feature"));
        assert!(call.arguments.flag("set_upstream"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_carries_full_catalog() {
        let (mut server, client) = setup_test_server().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::PartialJson(json!({
                "tools": crate::catalog::tool_specs(),
            })))
            .with_status(200)
            .with_body(tool_call_body(json!([{
                "function": {"name": "git_status", "arguments": "{}"}
            }])))
            .create_async()
            .await;

        let call = client.invoke("what changed").await.unwrap();
        assert_eq!(call.name, "git_status");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_tool_call_is_an_error() {
        let (mut server, client) = setup_test_server().await;

        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(
                json!({"choices": [{"message": {"role": "assistant", "content": "git status"}}]})
                    .to_string(),
            )
            .create_async()
            .await;

        let result = client.invoke("status").await;
        assert!(matches!(result, Err(AIError::ToolCallCount(0))));
    }

    #[tokio::test]
    async fn test_multiple_tool_calls_is_an_error() {
        let (mut server, client) = setup_test_server().await;

        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(tool_call_body(json!([
                {"function": {"name": "git_add", "arguments": "{}"}},
                {"function": {"name": "git_commit", "arguments": "{\"message\": \"x\"}"}}
            ])))
            .create_async()
            .await;

        let result = client.invoke("add and commit").await;
        assert!(matches!(result, Err(AIError::ToolCallCount(2))));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let (mut server, client) = setup_test_server().await;

        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .with_body("model not loaded")
            .create_async()
            .await;

        match client.invoke("status").await {
            Err(AIError::APIError { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "model not loaded");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (mut server, client) = setup_test_server().await;

        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body("{not json")
            .create_async()
            .await;

        let result = client.invoke("status").await;
        assert!(matches!(result, Err(AIError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let config = ModelConfig {
            base_url: "http://127.0.0.1:9/v1".to_string(),
            timeout_secs: 2,
            ..ModelConfig::default()
        };
        let client = LocalModelClient::new(&config).unwrap();
        let result = client.invoke("status").await;
        assert!(matches!(result, Err(AIError::NetworkError(_))));
    }
}
