use iv_core::SelfId;

/// Result of `load_web2`: the account's public id plus its sealed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Web2Export {
    pub self_id: SelfId,
    pub sealed: String,
}
