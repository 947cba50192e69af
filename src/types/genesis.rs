use serde::{Deserialize, Serialize};

/// Token metadata declared in a GENESIS
///
/// SLP uses `hash`; ALP uses `data` and `auth_pubkey`. Binary fields are hex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisInfo {
    pub token_ticker: String,
    pub token_name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_pubkey: Option<String>,
    pub decimals: u8,
}
