use serde::Serialize;
use std::collections::BTreeMap;

/// The inbound request as seen by the server.
#[derive(Serialize, Debug, Clone)]
pub struct EchoResponse {
    /// Header name to every value received for it, in arrival order.
    pub headers: BTreeMap<String, Vec<String>>,
    pub method: String,
    pub url: String,
    pub requesturi: String,
    /// Empty when the connection info is unavailable.
    pub remoteaddr: String,
    pub body: String,
}
