//! Token identity and per-protocol data tables

use super::constants::{MAX_ALP_ATOMS, MAX_SLP_ATOMS};
use crate::errors::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token quantity in indivisible base units. Wide enough to sum any number
/// of maximal SLP utxos without wrapping.
pub type Atoms = u128;

/// 64-character hex token id (the genesis txid, byte-reversed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenId(String);

impl TokenId {
    pub fn new(token_id: impl Into<String>) -> TokenResult<Self> {
        let token_id = token_id.into();
        if token_id.len() != 64 || !token_id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TokenError::InvalidTokenId(token_id));
        }
        Ok(Self(token_id.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bytes in display order, as pushed by SLP
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        // Validated as 64 hex chars on construction
        if let Ok(decoded) = hex::decode(&self.0) {
            bytes.copy_from_slice(&decoded);
        }
        bytes
    }

    /// Bytes in txid (little-endian) order, as serialized by ALP
    pub fn to_reversed_bytes(&self) -> [u8; 32] {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        bytes
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn from_reversed_bytes(mut bytes: [u8; 32]) -> Self {
        bytes.reverse();
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TokenId {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TokenId {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TokenId> for String {
    fn from(token_id: TokenId) -> Self {
        token_id.0
    }
}

/// Token layer protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenProtocol {
    Slp,
    Alp,
}

impl TokenProtocol {
    /// Largest atoms value a single wire amount can carry
    pub fn max_atoms(&self) -> Atoms {
        match self {
            Self::Slp => MAX_SLP_ATOMS,
            Self::Alp => MAX_ALP_ATOMS,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Slp => "SLP",
            Self::Alp => "ALP",
        }
    }
}

impl fmt::Display for TokenProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TokenProtocol {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slp" => Ok(Self::Slp),
            "alp" => Ok(Self::Alp),
            _ => Err(TokenError::UnsupportedTokenType {
                token_type: s.to_string(),
                operation: "protocol selection",
            }),
        }
    }
}

/// Protocol + token type number, the key every encoding decision is made on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    /// SLP Token Type 1, fungible
    SlpFungible,
    /// SLP NFT1 Group (aka parent, aka collection)
    SlpNft1Group,
    /// SLP NFT1 Child, a single non-fungible unit
    SlpNft1Child,
    /// ALP standard token type
    AlpStandard,
}

impl TokenType {
    pub fn protocol(&self) -> TokenProtocol {
        match self {
            Self::SlpFungible | Self::SlpNft1Group | Self::SlpNft1Child => TokenProtocol::Slp,
            Self::AlpStandard => TokenProtocol::Alp,
        }
    }

    /// Type byte written after the protocol marker
    pub fn number(&self) -> u8 {
        match self {
            Self::SlpFungible => 0x01,
            Self::SlpNft1Group => 0x81,
            Self::SlpNft1Child => 0x41,
            Self::AlpStandard => 0x00,
        }
    }

    pub fn from_number(protocol: TokenProtocol, number: u8) -> Option<Self> {
        match (protocol, number) {
            (TokenProtocol::Slp, 0x01) => Some(Self::SlpFungible),
            (TokenProtocol::Slp, 0x81) => Some(Self::SlpNft1Group),
            (TokenProtocol::Slp, 0x41) => Some(Self::SlpNft1Child),
            (TokenProtocol::Alp, 0x00) => Some(Self::AlpStandard),
            _ => None,
        }
    }

    pub fn max_atoms(&self) -> Atoms {
        self.protocol().max_atoms()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SlpFungible => "slp-fungible",
            Self::SlpNft1Group => "slp-nft1-group",
            Self::SlpNft1Child => "slp-nft1-child",
            Self::AlpStandard => "alp-standard",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TokenType {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::SlpFungible,
            Self::SlpNft1Group,
            Self::SlpNft1Child,
            Self::AlpStandard,
        ]
        .into_iter()
        .find(|token_type| token_type.display_name() == s)
        .ok_or_else(|| TokenError::UnsupportedTokenType {
            token_type: s.to_string(),
            operation: "token type selection",
        })
    }
}
