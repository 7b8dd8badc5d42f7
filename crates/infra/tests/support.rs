//! Shared fixtures for `websms-infra` integration tests: canned XML-RPC
//! bodies and a mock gateway.

#![allow(dead_code)]

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use websms_domain::{ClientIdentity, GatewayConfig};
use websms_infra::SipgateConnector;

pub const RPC_PATH: &str = "/RPC2";

pub fn ok_response() -> String {
    "<?xml version=\"1.0\"?><methodResponse><params><param><value><struct>\
     <member><name>StatusCode</name><value><int>200</int></value></member>\
     <member><name>StatusString</name><value><string>Method success</string></value></member>\
     </struct></value></param></params></methodResponse>"
        .to_string()
}

pub fn fault_response(code: i32, message: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?><methodResponse><fault><value><struct>\
         <member><name>faultCode</name><value><int>{code}</int></value></member>\
         <member><name>faultString</name><value><string>{message}</string></value></member>\
         </struct></value></fault></methodResponse>"
    )
}

pub fn balance_response(status: i32, total: f64) -> String {
    format!(
        "<?xml version=\"1.0\"?><methodResponse><params><param><value><struct>\
         <member><name>StatusCode</name><value><int>{status}</int></value></member>\
         <member><name>CurrentBalance</name><value><struct>\
         <member><name>Currency</name><value><string>EUR</string></value></member>\
         <member><name>TotalIncludingVat</name><value><double>{total}</double></value></member>\
         </struct></value></member>\
         </struct></value></param></params></methodResponse>"
    )
}

/// Mock XML-RPC gateway. Each remote method gets its own mock keyed on the
/// `<methodName>` element of the request body.
pub struct MockGateway {
    pub server: MockServer,
}

impl MockGateway {
    pub async fn start() -> Self {
        Self { server: MockServer::start().await }
    }

    /// Answer `rpc_method` with HTTP 200 and `body`.
    pub async fn answer(&self, rpc_method: &str, body: String) {
        self.answer_with(rpc_method, ResponseTemplate::new(200).set_body_string(body)).await;
    }

    pub async fn answer_with(&self, rpc_method: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(RPC_PATH))
            .and(body_string_contains(format!("<methodName>{rpc_method}</methodName>")))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub fn endpoint(&self) -> String {
        format!("{}{RPC_PATH}", self.server.uri())
    }

    pub fn connector(&self) -> SipgateConnector {
        let mut gateway = GatewayConfig::new("alice", "secret");
        gateway.endpoint = self.endpoint();
        SipgateConnector::new(&gateway, ClientIdentity::default()).expect("connector")
    }

    /// Bodies of every request received for `rpc_method`, in order.
    pub async fn bodies_for(&self, rpc_method: &str) -> Vec<String> {
        let needle = format!("<methodName>{rpc_method}</methodName>");
        self.server
            .received_requests()
            .await
            .expect("request recording enabled")
            .into_iter()
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
            .filter(|body| body.contains(&needle))
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.server.received_requests().await.map(|requests| requests.len()).unwrap_or_default()
    }
}
