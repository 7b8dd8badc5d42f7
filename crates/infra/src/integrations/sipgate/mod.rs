/// sipgate gateway integration
///
/// Talks to the sipgate "samurai" XML-RPC API. Every operation opens its own
/// authenticated session, identifies the client, and then issues exactly one
/// call; nothing is retried or cached between operations.
///
/// # Usage
///
/// ```no_run
/// use websms_core::RemoteConnector;
/// use websms_domain::{ClientIdentity, GatewayConfig, MessageRequest};
/// use websms_infra::integrations::sipgate::SipgateConnector;
///
/// # async fn example() -> websms_domain::Result<()> {
/// let gateway = GatewayConfig::new("alice", "secret");
/// let connector = SipgateConnector::new(&gateway, ClientIdentity::default())?;
///
/// let request = MessageRequest::new(["+491701234567"], "Hello");
/// connector.send_message(&request).await?;
///
/// if let Some(balance) = connector.fetch_balance().await? {
///     println!("balance: {balance}");
/// }
/// # Ok(())
/// # }
/// ```
mod connector;
mod session;

pub use connector::{recipient_uri, SipgateConnector};

/// Remote method performing the client identification handshake.
pub const METHOD_CLIENT_IDENTIFY: &str = "samurai.ClientIdentify";

/// Remote method sending one text to many recipients.
pub const METHOD_SESSION_INITIATE_MULTI: &str = "samurai.SessionInitiateMulti";

/// Remote method returning the account balance.
pub const METHOD_BALANCE_GET: &str = "samurai.BalanceGet";

/// Domain appended to every recipient number.
pub const SIP_DOMAIN: &str = "sipgate.net";

/// Type-of-service value for text messages.
pub const TOS_TEXT: &str = "text";

/// `StatusCode` of a successful balance query.
pub const BALANCE_STATUS_OK: i32 = 200;
