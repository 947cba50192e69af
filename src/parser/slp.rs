//! SLP v1 OP_RETURN parser

use super::error::{ParseError, ParseResult};
use super::read_push;
use crate::encoder::slp::{GENESIS, MINT, SEND, SLP_LOKAD_ID};
use crate::encoder::OP_RETURN;
use crate::types::constants::{MAX_DECIMALS, MINT_BATON_OUT_IDX, SLP_MAX_SEND_OUTPUTS};
use crate::types::{Atoms, GenesisInfo, TokenId, TokenProtocol, TokenType};
use bitcoin::Script;
use byteorder::{BigEndian, ByteOrder};
use serde::Serialize;
use std::io::Cursor;
use tracing::debug;

const BURN: &[u8] = b"BURN";

/// A parsed SLP message. Unknown token types are reported, not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlpData {
    pub token_type: u8,
    #[serde(flatten)]
    pub tx: SlpTx,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "txType", rename_all = "UPPERCASE")]
pub enum SlpTx {
    #[serde(rename_all = "camelCase")]
    Genesis {
        genesis_info: GenesisInfo,
        #[serde(with = "crate::types::atoms_serde")]
        initial_atoms: Atoms,
        mint_baton_out_idx: Option<u8>,
    },
    #[serde(rename_all = "camelCase")]
    Mint {
        token_id: TokenId,
        #[serde(with = "crate::types::atoms_serde")]
        additional_atoms: Atoms,
        mint_baton_out_idx: Option<u8>,
    },
    #[serde(rename_all = "camelCase")]
    Send {
        token_id: TokenId,
        #[serde(serialize_with = "crate::types::atoms_serde::serialize_vec")]
        send_atoms_array: Vec<Atoms>,
    },
    #[serde(rename_all = "camelCase")]
    Burn {
        token_id: TokenId,
        #[serde(with = "crate::types::atoms_serde")]
        burn_atoms: Atoms,
    },
    Unknown,
}

struct PushReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> PushReader<'a> {
    fn next(&mut self) -> ParseResult<Option<Vec<u8>>> {
        read_push(&mut self.cursor)
    }

    fn field(&mut self, name: &'static str) -> ParseResult<Vec<u8>> {
        self.next()?.ok_or(ParseError::Missing(name))
    }

    fn sized(&mut self, name: &'static str, len: usize, expected: &'static str) -> ParseResult<Vec<u8>> {
        let data = self.field(name)?;
        if data.len() != len {
            return Err(ParseError::WrongSize {
                field: name,
                expected,
                actual: data.len(),
            });
        }
        Ok(data)
    }

    fn atoms(&mut self, name: &'static str) -> ParseResult<Atoms> {
        let data = self.sized(name, 8, "exactly 8 bytes")?;
        Ok(Atoms::from(BigEndian::read_u64(&data)))
    }

    fn token_id(&mut self) -> ParseResult<TokenId> {
        let data = self.sized("tokenId", 32, "exactly 32 bytes")?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&data);
        Ok(TokenId::from_bytes(bytes))
    }

    fn mint_baton_out_idx(&mut self, token_type: TokenType) -> ParseResult<Option<u8>> {
        let data = self.field("mintBatonOutIdx")?;
        match data.as_slice() {
            [] => Ok(None),
            [_] if token_type == TokenType::SlpNft1Child => Err(ParseError::InvalidField {
                field: "mintBatonOutIdx",
                reason: "SLP_NFT1_CHILD cannot have a mint baton".to_string(),
            }),
            [idx] if *idx < MINT_BATON_OUT_IDX => Err(ParseError::InvalidField {
                field: "mintBatonOutIdx",
                reason: format!("must be at least {}, got {}", MINT_BATON_OUT_IDX, idx),
            }),
            [idx] => Ok(Some(*idx)),
            _ => Err(ParseError::WrongSize {
                field: "mintBatonOutIdx",
                expected: "at most 1 byte",
                actual: data.len(),
            }),
        }
    }

    fn finish(&mut self, tx_type: &'static str) -> ParseResult<()> {
        match self.next()? {
            None => Ok(()),
            Some(_) => Err(ParseError::Superfluous(tx_type)),
        }
    }
}

fn bytes_to_string(bytes: Vec<u8>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Parse an SLP OP_RETURN. Returns `None` if the script is not SLP.
pub fn parse_slp(script: &Script) -> ParseResult<Option<SlpData>> {
    let bytes = script.as_bytes();
    if bytes.first() != Some(&OP_RETURN) {
        return Ok(None);
    }
    let mut reader = PushReader {
        cursor: Cursor::new(&bytes[1..]),
    };
    match reader.next() {
        Ok(Some(lokad)) if lokad == SLP_LOKAD_ID => {}
        _ => return Ok(None),
    }

    let token_type_bytes = reader.sized("tokenType", 1, "exactly 1 byte")?;
    let token_type_num = token_type_bytes[0];
    let token_type = match TokenType::from_number(TokenProtocol::Slp, token_type_num) {
        Some(token_type) => token_type,
        None => {
            debug!("Unknown SLP token type {}", token_type_num);
            return Ok(Some(SlpData {
                token_type: token_type_num,
                tx: SlpTx::Unknown,
            }));
        }
    };

    let tx_type = reader.field("txType")?;
    let tx = match tx_type.as_slice() {
        GENESIS => parse_genesis(&mut reader, token_type)?,
        MINT => parse_mint(&mut reader, token_type)?,
        SEND => parse_send(&mut reader)?,
        BURN => parse_burn(&mut reader)?,
        _ => return Err(ParseError::UnknownTxType(bytes_to_string(tx_type))),
    };
    Ok(Some(SlpData {
        token_type: token_type_num,
        tx,
    }))
}

fn parse_genesis(reader: &mut PushReader, token_type: TokenType) -> ParseResult<SlpTx> {
    let token_ticker = bytes_to_string(reader.field("tokenTicker")?);
    let token_name = bytes_to_string(reader.field("tokenName")?);
    let url = bytes_to_string(reader.field("url")?);
    let hash = reader.field("hash")?;
    if !hash.is_empty() && hash.len() != 32 {
        return Err(ParseError::WrongSize {
            field: "hash",
            expected: "either 0 or 32 bytes",
            actual: hash.len(),
        });
    }
    let decimals = reader.sized("decimals", 1, "exactly 1 byte")?[0];
    if decimals > MAX_DECIMALS {
        return Err(ParseError::InvalidField {
            field: "decimals",
            reason: format!("must be at most {}, got {}", MAX_DECIMALS, decimals),
        });
    }
    let mint_baton_out_idx = reader.mint_baton_out_idx(token_type)?;
    let initial_atoms = reader.atoms("initialAtoms")?;
    reader.finish("GENESIS")?;

    Ok(SlpTx::Genesis {
        genesis_info: GenesisInfo {
            token_ticker,
            token_name,
            url,
            hash: (!hash.is_empty()).then(|| hex::encode(&hash)),
            decimals,
            ..Default::default()
        },
        initial_atoms,
        mint_baton_out_idx,
    })
}

fn parse_mint(reader: &mut PushReader, token_type: TokenType) -> ParseResult<SlpTx> {
    if token_type == TokenType::SlpNft1Child {
        return Err(ParseError::InvalidField {
            field: "txType",
            reason: "SLP_NFT1_CHILD cannot be minted".to_string(),
        });
    }
    let token_id = reader.token_id()?;
    let mint_baton_out_idx = reader.mint_baton_out_idx(token_type)?;
    let additional_atoms = reader.atoms("additionalAtoms")?;
    reader.finish("MINT")?;
    Ok(SlpTx::Mint {
        token_id,
        additional_atoms,
        mint_baton_out_idx,
    })
}

fn parse_send(reader: &mut PushReader) -> ParseResult<SlpTx> {
    let token_id = reader.token_id()?;
    let mut send_atoms_array = Vec::new();
    while let Some(data) = reader.next()? {
        if data.len() != 8 {
            return Err(ParseError::WrongSize {
                field: "sendAtoms",
                expected: "exactly 8 bytes",
                actual: data.len(),
            });
        }
        send_atoms_array.push(Atoms::from(BigEndian::read_u64(&data)));
    }
    if send_atoms_array.is_empty() {
        return Err(ParseError::Missing("sendAtomsArray"));
    }
    if send_atoms_array.len() > SLP_MAX_SEND_OUTPUTS {
        return Err(ParseError::InvalidField {
            field: "sendAtomsArray",
            reason: format!(
                "SLP allows at most {} outputs, got {}",
                SLP_MAX_SEND_OUTPUTS,
                send_atoms_array.len()
            ),
        });
    }
    Ok(SlpTx::Send {
        token_id,
        send_atoms_array,
    })
}

fn parse_burn(reader: &mut PushReader) -> ParseResult<SlpTx> {
    let token_id = reader.token_id()?;
    let burn_atoms = reader.atoms("burnAtoms")?;
    reader.finish("BURN")?;
    Ok(SlpTx::Burn {
        token_id,
        burn_atoms,
    })
}
