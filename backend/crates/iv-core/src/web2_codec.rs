use crate::{CoreError, CoreResult, Web2Payload};

/// Seals and opens web2 payloads for a peer.
///
/// Implementations hold the service's own private key; the peer's public key
/// (PEM) is supplied per call.
pub trait Web2Codec: Send + Sync {
    fn decode(&self, peer_public_key: &str, sealed: &str) -> CoreResult<Web2Payload>;
    fn encode(&self, peer_public_key: &str, payload: &Web2Payload) -> CoreResult<String>;
}

/// Plain JSON, no sealing. Development mode only.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsealedJsonCodec;

impl Web2Codec for UnsealedJsonCodec {
    fn decode(&self, _peer_public_key: &str, sealed: &str) -> CoreResult<Web2Payload> {
        serde_json::from_str(sealed).map_err(|e| CoreError::codec(e.to_string()))
    }

    fn encode(&self, _peer_public_key: &str, payload: &Web2Payload) -> CoreResult<String> {
        serde_json::to_string(payload).map_err(|e| CoreError::codec(e.to_string()))
    }
}
