//! Integration tests for the `websmsd` command handlers

#[path = "support.rs"]
mod support;

use support::{answer, balance_response, context_for, OK_RESPONSE};
use websms_api::cli::Command;
use websms_api::{execute, CommandReport};
use websms_domain::ConnectorKind;
use wiremock::MockServer;

#[tokio::test]
async fn send_command_completes_and_shuts_down() {
    let server = MockServer::start().await;
    answer(&server, "samurai.ClientIdentify", OK_RESPONSE.to_string()).await;
    answer(&server, "samurai.SessionInitiateMulti", OK_RESPONSE.to_string()).await;
    let context = context_for(&server, None);

    let command = Command::Send {
        recipients: "+4917011; +4917022".into(),
        body: "hello".into(),
        connector_id: ConnectorKind::Sipgate.id(),
    };
    let report = execute(&context, &command).await.expect("send");

    assert_eq!(report, CommandReport::Sent);
    assert!(context.shutdown_token().is_cancelled());
    assert_eq!(context.facade.lifecycle().pending(), 0);
}

#[tokio::test]
async fn balance_command_reports_formatted_balance() {
    let server = MockServer::start().await;
    answer(&server, "samurai.ClientIdentify", OK_RESPONSE.to_string()).await;
    answer(&server, "samurai.BalanceGet", balance_response(7.1)).await;
    let context = context_for(&server, None);

    let report = execute(&context, &Command::Balance { connector_id: ConnectorKind::Sipgate.id() })
        .await
        .expect("balance");

    assert_eq!(report, CommandReport::Balance {
        connector: ConnectorKind::Sipgate,
        display: Some("7.10".to_string()),
    });
    assert_eq!(report.to_string(), "sipgate balance: 7.10");
}

#[tokio::test]
async fn unknown_connector_id_fails_without_leaking_a_job() {
    let server = MockServer::start().await;
    let context = context_for(&server, None);

    let command =
        Command::Send { recipients: "+4917011".into(), body: "hi".into(), connector_id: 9 };
    let err = execute(&context, &command).await.expect_err("unknown connector");

    assert!(err.to_string().contains('9'));
    assert_eq!(context.facade.lifecycle().pending(), 0);
    assert!(context.shutdown_token().is_cancelled());
}

#[tokio::test]
async fn gateway_fault_fails_the_command_but_still_shuts_down() {
    let server = MockServer::start().await;
    answer(
        &server,
        "samurai.ClientIdentify",
        "<methodResponse><fault><value><struct>\
         <member><name>faultCode</name><value><int>401</int></value></member>\
         <member><name>faultString</name><value><string>Unauthorized</string></value></member>\
         </struct></value></fault></methodResponse>"
            .to_string(),
    )
    .await;
    let context = context_for(&server, None);

    let command = Command::Send {
        recipients: "+4917011".into(),
        body: "hi".into(),
        connector_id: ConnectorKind::Sipgate.id(),
    };
    let err = execute(&context, &command).await.expect_err("auth fault");

    assert!(err.to_string().contains("send failed"));
    assert!(context.shutdown_token().is_cancelled());
}
