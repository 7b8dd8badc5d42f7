//! Integration tests for `SipgateConnector` against a mock XML-RPC gateway
//!
//! **Coverage:**
//! - Recipient filtering and SIP URI construction on the wire
//! - A fresh authenticated, identified session for every operation
//! - Fault classification (401 → auth, other codes → fault)
//! - Balance status handling
//! - Transport failures (HTTP errors, malformed XML, refused connections)

#[path = "support.rs"]
mod support;

use std::net::TcpListener;

use support::{balance_response, fault_response, ok_response, MockGateway};
use websms_core::RemoteConnector;
use websms_domain::{
    AccountBalance, ClientIdentity, ConnectorError, GatewayConfig, MessageRequest, SendOutcome,
};
use websms_infra::integrations::sipgate::{
    METHOD_BALANCE_GET, METHOD_CLIENT_IDENTIFY, METHOD_SESSION_INITIATE_MULTI,
};
use websms_infra::SipgateConnector;
use wiremock::ResponseTemplate;

async fn gateway_accepting_sends() -> MockGateway {
    let gateway = MockGateway::start().await;
    gateway.answer(METHOD_CLIENT_IDENTIFY, ok_response()).await;
    gateway.answer(METHOD_SESSION_INITIATE_MULTI, ok_response()).await;
    gateway
}

#[tokio::test]
async fn short_recipients_are_dropped_before_sending() {
    let gateway = gateway_accepting_sends().await;
    let request = MessageRequest::new(["+491701234567", "x", ""], "Hello");

    let outcome = gateway.connector().send_message(&request).await;

    assert_eq!(outcome, Ok(SendOutcome::Sent));
    let bodies = gateway.bodies_for(METHOD_SESSION_INITIATE_MULTI).await;
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert!(body.contains(
        "<array><data><value><string>sip:491701234567@sipgate.net</string></value></data></array>"
    ));
    assert_eq!(body.matches("sip:").count(), 1);
    assert!(body.contains("<name>TOS</name><value><string>text</string></value>"));
    assert!(body.contains("<name>Content</name><value><string>Hello</string></value>"));
}

#[tokio::test]
async fn whole_batch_goes_out_in_one_call() {
    let gateway = gateway_accepting_sends().await;
    let request = MessageRequest::new(["+4917011", "+4917022", "0170 333"], "Hi all");

    gateway.connector().send_message(&request).await.expect("send");

    let bodies = gateway.bodies_for(METHOD_SESSION_INITIATE_MULTI).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].matches("@sipgate.net").count(), 3);
}

#[tokio::test]
async fn no_usable_recipients_opens_no_session() {
    let gateway = gateway_accepting_sends().await;
    let request = MessageRequest::new(["x", ""], "Hello");

    let outcome = gateway.connector().send_message(&request).await;

    assert_eq!(outcome, Ok(SendOutcome::NothingToSend));
    assert_eq!(gateway.request_count().await, 0);
}

#[tokio::test]
async fn client_identifies_before_every_operation() {
    let gateway = gateway_accepting_sends().await;
    gateway.answer(METHOD_BALANCE_GET, balance_response(200, 1.5)).await;
    let connector = gateway.connector();

    connector.send_message(&MessageRequest::new(["+4917011"], "one")).await.expect("send");
    connector.fetch_balance().await.expect("balance");

    let identifies = gateway.bodies_for(METHOD_CLIENT_IDENTIFY).await;
    assert_eq!(identifies.len(), 2);
    let identity = ClientIdentity::default();
    for body in &identifies {
        assert!(body.contains(&format!("<string>{}</string>", identity.name)));
        assert!(body.contains(&format!("<string>{}</string>", identity.vendor)));
    }
}

#[tokio::test]
async fn every_session_authenticates_each_of_its_requests() {
    let gateway = gateway_accepting_sends().await;
    gateway.answer(METHOD_BALANCE_GET, balance_response(200, 1.0)).await;
    let connector = gateway.connector();

    connector.send_message(&MessageRequest::new(["+4917011"], "one")).await.expect("send");
    connector.fetch_balance().await.expect("balance");
    connector.send_message(&MessageRequest::new(["+4917022"], "two")).await.expect("send");

    let requests = gateway.server.received_requests().await.expect("request recording enabled");
    assert_eq!(requests.len(), 6);
    for request in &requests {
        // base64("alice:secret")
        assert_eq!(
            request.headers.get("authorization").and_then(|value| value.to_str().ok()),
            Some("Basic YWxpY2U6c2VjcmV0")
        );
    }
}

#[tokio::test]
async fn fault_401_during_send_is_an_auth_error() {
    let gateway = MockGateway::start().await;
    gateway.answer(METHOD_CLIENT_IDENTIFY, ok_response()).await;
    gateway
        .answer(METHOD_SESSION_INITIATE_MULTI, fault_response(401, "Authentication failed"))
        .await;

    let result = gateway.connector().send_message(&MessageRequest::new(["+4917011"], "hi")).await;

    assert_eq!(result, Err(ConnectorError::Auth("Authentication failed".into())));
}

#[tokio::test]
async fn fault_during_handshake_aborts_the_send() {
    let gateway = MockGateway::start().await;
    gateway.answer(METHOD_CLIENT_IDENTIFY, fault_response(401, "Unauthorized")).await;
    gateway.answer(METHOD_SESSION_INITIATE_MULTI, ok_response()).await;

    let result = gateway.connector().send_message(&MessageRequest::new(["+4917011"], "hi")).await;

    assert!(matches!(result, Err(ConnectorError::Auth(_))));
    assert!(gateway.bodies_for(METHOD_SESSION_INITIATE_MULTI).await.is_empty());
}

#[tokio::test]
async fn other_fault_codes_keep_their_message() {
    let gateway = MockGateway::start().await;
    gateway.answer(METHOD_CLIENT_IDENTIFY, ok_response()).await;
    gateway
        .answer(METHOD_SESSION_INITIATE_MULTI, fault_response(500, "Internal gateway error"))
        .await;

    let result = gateway.connector().send_message(&MessageRequest::new(["+4917011"], "hi")).await;

    let err = result.expect_err("fault");
    assert_eq!(err, ConnectorError::Fault { code: 500, message: "Internal gateway error".into() });
    assert_eq!(err.user_message(), "Internal gateway error");
}

#[tokio::test]
async fn http_401_is_an_auth_error() {
    let gateway = MockGateway::start().await;
    gateway.answer_with(METHOD_CLIENT_IDENTIFY, ResponseTemplate::new(401)).await;

    let result = gateway.connector().fetch_balance().await;

    assert!(matches!(result, Err(ConnectorError::Auth(_))));
}

#[tokio::test]
async fn balance_with_ok_status_is_returned() {
    let gateway = MockGateway::start().await;
    gateway.answer(METHOD_CLIENT_IDENTIFY, ok_response()).await;
    gateway.answer(METHOD_BALANCE_GET, balance_response(200, 12.5)).await;

    let balance = gateway.connector().fetch_balance().await;

    assert_eq!(balance, Ok(Some(AccountBalance::new(12.5))));
}

#[tokio::test]
async fn balance_with_non_ok_status_is_a_silent_no_op() {
    let gateway = MockGateway::start().await;
    gateway.answer(METHOD_CLIENT_IDENTIFY, ok_response()).await;
    gateway.answer(METHOD_BALANCE_GET, balance_response(503, 99.0)).await;

    assert_eq!(gateway.connector().fetch_balance().await, Ok(None));
}

#[tokio::test]
async fn malformed_response_is_a_transport_error() {
    let gateway = MockGateway::start().await;
    gateway.answer(METHOD_CLIENT_IDENTIFY, ok_response()).await;
    gateway.answer(METHOD_BALANCE_GET, "<html><body>Bad Gateway</body></html>".into()).await;

    let result = gateway.connector().fetch_balance().await;

    assert!(matches!(result, Err(ConnectorError::Transport(_))));
}

#[tokio::test]
async fn server_error_status_is_a_transport_error() {
    let gateway = MockGateway::start().await;
    gateway.answer_with(METHOD_CLIENT_IDENTIFY, ResponseTemplate::new(502)).await;

    let result = gateway.connector().send_message(&MessageRequest::new(["+4917011"], "hi")).await;

    match result {
        Err(ConnectorError::Transport(message)) => assert!(message.contains("502")),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let mut gateway = GatewayConfig::new("alice", "secret");
    gateway.endpoint = format!("http://{addr}/RPC2");
    let connector = SipgateConnector::new(&gateway, ClientIdentity::default()).expect("connector");

    let result = connector.send_message(&MessageRequest::new(["+4917011"], "hi")).await;

    assert!(matches!(result, Err(ConnectorError::Transport(_))));
}
