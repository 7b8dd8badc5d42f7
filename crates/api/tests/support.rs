//! Shared helpers for `websms-api` integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tokio::runtime::Handle;
use websms_api::AppContext;
use websms_domain::{Config, GatewayConfig};
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OK_RESPONSE: &str = "<?xml version=\"1.0\"?><methodResponse><params><param><value>\
    <struct><member><name>StatusCode</name><value><int>200</int></value></member></struct>\
    </value></param></params></methodResponse>";

pub fn balance_response(total: f64) -> String {
    format!(
        "<?xml version=\"1.0\"?><methodResponse><params><param><value><struct>\
         <member><name>StatusCode</name><value><int>200</int></value></member>\
         <member><name>CurrentBalance</name><value><struct>\
         <member><name>TotalIncludingVat</name><value><double>{total}</double></value></member>\
         </struct></value></member></struct></value></param></params></methodResponse>"
    )
}

/// Mount `body` as the answer to `rpc_method`.
pub async fn answer(server: &MockServer, rpc_method: &str, body: String) {
    Mock::given(method("POST"))
        .and(body_string_contains(format!("<methodName>{rpc_method}</methodName>")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

pub fn config_for(server: &MockServer, sent_log: Option<PathBuf>) -> Config {
    let mut gateway = GatewayConfig::new("alice", "secret");
    gateway.endpoint = format!("{}/RPC2", server.uri());

    let mut config = Config {
        gateway,
        client: Default::default(),
        store: Default::default(),
    };
    config.store.sent_log = sent_log;
    config
}

pub fn context_for(server: &MockServer, sent_log: Option<PathBuf>) -> AppContext {
    AppContext::new_with_config(config_for(server, sent_log), Handle::current())
        .expect("context should build")
}
