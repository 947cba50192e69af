//! Wallet UTXO snapshot types and the token input selection result

use super::{Atoms, TokenId, TokenType};
use bitcoin::{ScriptBuf, Txid};
use serde::{Deserialize, Serialize};

/// Reference to a transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outpoint {
    pub txid: Txid,
    pub out_idx: u32,
}

/// Token descriptor attached to a utxo by the indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub token_id: TokenId,
    pub token_type: TokenType,
    #[serde(with = "atoms_serde")]
    pub atoms: Atoms,
    #[serde(default)]
    pub is_mint_baton: bool,
}

/// A wallet utxo as observed in the indexer snapshot. Utxos without a token
/// descriptor are plain XEC and are ignored by every token filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUtxo {
    pub outpoint: Outpoint,
    pub sats: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
}

impl TokenUtxo {
    /// Atoms held by this utxo, zero for non-token utxos
    pub fn token_atoms(&self) -> Atoms {
        self.token.as_ref().map_or(0, |token| token.atoms)
    }

    pub fn is_token(&self, token_id: &TokenId) -> bool {
        self.token
            .as_ref()
            .is_some_and(|token| &token.token_id == token_id)
    }

    pub fn is_mint_baton(&self) -> bool {
        self.token.as_ref().is_some_and(|token| token.is_mint_baton)
    }
}

/// Inputs chosen for a send or burn, plus the amounts the SEND will declare
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInputSelection {
    pub token_id: TokenId,
    pub token_type: TokenType,
    pub token_inputs: Vec<TokenUtxo>,
    /// `[requested]` or `[requested, change]`; change is never zero
    #[serde(serialize_with = "atoms_serde::serialize_vec")]
    pub send_amounts: Vec<Atoms>,
}

impl TokenInputSelection {
    pub fn requested_atoms(&self) -> Atoms {
        self.send_amounts.first().copied().unwrap_or(0)
    }

    pub fn change_atoms(&self) -> Option<Atoms> {
        self.send_amounts.get(1).copied()
    }

    pub fn total_input_atoms(&self) -> Atoms {
        self.token_inputs
            .iter()
            .fold(0, |total: Atoms, utxo| total.saturating_add(utxo.token_atoms()))
    }
}

/// Atoms travel as decimal strings in JSON; numbers are accepted on input
pub(crate) mod atoms_serde {
    use super::Atoms;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AtomsRepr {
        Text(String),
        Number(u64),
    }

    pub fn serialize<S: Serializer>(atoms: &Atoms, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&atoms.to_string())
    }

    pub fn serialize_vec<S: Serializer>(
        atoms: &[Atoms],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(atoms.iter().map(|a| a.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Atoms, D::Error> {
        match AtomsRepr::deserialize(deserializer)? {
            AtomsRepr::Text(text) => text.parse().map_err(serde::de::Error::custom),
            AtomsRepr::Number(n) => Ok(Atoms::from(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_ID: &str = "1111111111111111111111111111111111111111111111111111111111111111";

    #[test]
    fn test_utxo_snapshot_json() {
        let json = format!(
            r#"[
                {{"outpoint": {{"txid": "{txid}", "outIdx": 1}}, "sats": 546,
                  "token": {{"tokenId": "{TOKEN_ID}", "tokenType": "slp-fungible", "atoms": "18446744073709551615", "isMintBaton": false}}}},
                {{"outpoint": {{"txid": "{txid}", "outIdx": 2}}, "sats": 10000, "script": "76a914c38232a045a85c84e5733d60e867dcee9ad4b18d88ac"}},
                {{"outpoint": {{"txid": "{txid}", "outIdx": 3}}, "sats": 546,
                  "token": {{"tokenId": "{TOKEN_ID}", "tokenType": "alp-standard", "atoms": 12}}}}
            ]"#,
            txid = "2".repeat(64),
        );
        let utxos: Vec<TokenUtxo> = serde_json::from_str(&json).unwrap();

        assert_eq!(utxos.len(), 3);
        assert_eq!(utxos[0].token_atoms(), u64::MAX as Atoms);
        assert!(utxos[1].token.is_none());
        assert_eq!(utxos[1].token_atoms(), 0);
        assert_eq!(utxos[1].script.as_ref().map(|s| s.len()), Some(25));
        assert_eq!(utxos[2].token_atoms(), 12);
        assert!(!utxos[2].is_mint_baton());
        assert!(utxos[2].is_token(&TokenId::new(TOKEN_ID).unwrap()));
    }

    #[test]
    fn test_selection_accessors() {
        let selection = TokenInputSelection {
            token_id: TokenId::new(TOKEN_ID).unwrap(),
            token_type: TokenType::SlpFungible,
            token_inputs: vec![],
            send_amounts: vec![15, 5],
        };
        assert_eq!(selection.requested_atoms(), 15);
        assert_eq!(selection.change_atoms(), Some(5));

        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["sendAmounts"], serde_json::json!(["15", "5"]));
    }
}
