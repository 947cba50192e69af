//! ALP section parser

use super::error::{ParseError, ParseResult};
use super::{read_exact, remaining};
use crate::encoder::alp::{MintData, ALP_LOKAD_ID, BURN, GENESIS, MINT, SEND};
use crate::types::constants::{ALP_MAX_SIZE, MAX_DECIMALS};
use crate::types::{Atoms, GenesisInfo, TokenId, TokenProtocol, TokenType};
use byteorder::{LittleEndian, ReadBytesExt};
use serde::Serialize;
use std::io::Cursor;

/// A parsed ALP section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlpData {
    pub token_type: u8,
    #[serde(flatten)]
    pub tx: AlpTx,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "txType", rename_all = "UPPERCASE")]
pub enum AlpTx {
    #[serde(rename_all = "camelCase")]
    Genesis {
        genesis_info: GenesisInfo,
        mint_data: MintData,
    },
    #[serde(rename_all = "camelCase")]
    Mint { token_id: TokenId, mint_data: MintData },
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

struct SectionReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> SectionReader<'a> {
    fn left(&self) -> usize {
        remaining(&self.cursor)
    }

    fn u8(&mut self, name: &'static str) -> ParseResult<u8> {
        self.cursor.read_u8().map_err(|_| ParseError::Missing(name))
    }

    fn bytes(&mut self, len: usize) -> ParseResult<Vec<u8>> {
        read_exact(&mut self.cursor, len)
    }

    fn compact_size(&mut self, name: &'static str) -> ParseResult<u64> {
        let left = self.left();
        let not_enough = |needed| ParseError::NotEnoughBytes { needed, left };
        let size = match self.u8(name)? {
            0xfd => u64::from(self.cursor.read_u16::<LittleEndian>().map_err(|_| not_enough(3))?),
            0xfe => u64::from(self.cursor.read_u32::<LittleEndian>().map_err(|_| not_enough(5))?),
            0xff => self.cursor.read_u64::<LittleEndian>().map_err(|_| not_enough(9))?,
            size => u64::from(size),
        };
        Ok(size)
    }

    fn var_bytes(&mut self, name: &'static str) -> ParseResult<Vec<u8>> {
        let len = self.compact_size(name)?;
        let len = usize::try_from(len).map_err(|_| ParseError::NotEnoughBytes {
            needed: usize::MAX,
            left: self.left(),
        })?;
        self.bytes(len)
    }

    fn size(&mut self, name: &'static str) -> ParseResult<usize> {
        let size = self.compact_size(name)?;
        if size > ALP_MAX_SIZE as u64 {
            return Err(ParseError::SizeOutOfRange(size));
        }
        Ok(size as usize)
    }

    fn atoms(&mut self) -> ParseResult<Atoms> {
        let left = self.left();
        self.cursor
            .read_u48::<LittleEndian>()
            .map(Atoms::from)
            .map_err(|_| ParseError::NotEnoughBytes { needed: 6, left })
    }

    fn atoms_array(&mut self, name: &'static str) -> ParseResult<Vec<Atoms>> {
        let len = self.size(name)?;
        (0..len).map(|_| self.atoms()).collect()
    }

    fn token_id(&mut self) -> ParseResult<TokenId> {
        let data = self.bytes(32)?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&data);
        Ok(TokenId::from_reversed_bytes(bytes))
    }

    fn mint_data(&mut self) -> ParseResult<MintData> {
        let atoms_array = self.atoms_array("atomsArray")?;
        let num_batons = self.u8("numBatons")?;
        if num_batons as usize > ALP_MAX_SIZE {
            return Err(ParseError::InvalidField {
                field: "numBatons",
                reason: format!("must be between 0 and {}, got {}", ALP_MAX_SIZE, num_batons),
            });
        }
        Ok(MintData {
            atoms_array,
            num_batons,
        })
    }

    fn finish(&self, tx_type: &'static str) -> ParseResult<()> {
        if self.left() > 0 {
            return Err(ParseError::Superfluous(tx_type));
        }
        Ok(())
    }
}

/// Parse one eMPP section as ALP. Returns `None` if the section belongs to
/// another protocol.
pub fn parse_alp(section: &[u8]) -> ParseResult<Option<AlpData>> {
    let Some(body) = section.strip_prefix(ALP_LOKAD_ID) else {
        return Ok(None);
    };
    let mut reader = SectionReader {
        cursor: Cursor::new(body),
    };

    let token_type_num = reader.u8("tokenType")?;
    if TokenType::from_number(TokenProtocol::Alp, token_type_num).is_none() {
        return Ok(Some(AlpData {
            token_type: token_type_num,
            tx: AlpTx::Unknown,
        }));
    }

    let tx_type = reader.var_bytes("txType")?;
    let tx = match tx_type.as_slice() {
        GENESIS => parse_genesis(&mut reader)?,
        MINT => {
            let token_id = reader.token_id()?;
            let mint_data = reader.mint_data()?;
            reader.finish("MINT")?;
            AlpTx::Mint {
                token_id,
                mint_data,
            }
        }
        SEND => {
            let token_id = reader.token_id()?;
            let send_atoms_array = reader.atoms_array("sendAtomsArray")?;
            reader.finish("SEND")?;
            AlpTx::Send {
                token_id,
                send_atoms_array,
            }
        }
        BURN => {
            let token_id = reader.token_id()?;
            if reader.left() == 0 {
                return Err(ParseError::Missing("burnAtoms"));
            }
            let burn_atoms = reader.atoms()?;
            reader.finish("BURN")?;
            AlpTx::Burn {
                token_id,
                burn_atoms,
            }
        }
        _ => {
            return Err(ParseError::UnknownTxType(
                String::from_utf8_lossy(&tx_type).into_owned(),
            ))
        }
    };
    Ok(Some(AlpData {
        token_type: token_type_num,
        tx,
    }))
}

fn parse_genesis(reader: &mut SectionReader) -> ParseResult<AlpTx> {
    let token_ticker = reader.var_bytes("tokenTicker")?;
    let token_name = reader.var_bytes("tokenName")?;
    let url = reader.var_bytes("url")?;
    let data = reader.var_bytes("data")?;
    let auth_pubkey = reader.var_bytes("authPubkey")?;
    let decimals = reader.u8("decimals")?;
    if decimals > MAX_DECIMALS {
        return Err(ParseError::InvalidField {
            field: "decimals",
            reason: format!("must be at most {}, got {}", MAX_DECIMALS, decimals),
        });
    }
    let mint_data = reader.mint_data()?;
    reader.finish("GENESIS")?;
    Ok(AlpTx::Genesis {
        genesis_info: GenesisInfo {
            token_ticker: String::from_utf8_lossy(&token_ticker).into_owned(),
            token_name: String::from_utf8_lossy(&token_name).into_owned(),
            url: String::from_utf8_lossy(&url).into_owned(),
            hash: None,
            data: Some(hex::encode(data)),
            auth_pubkey: Some(hex::encode(auth_pubkey)),
            decimals,
        },
        mint_data,
    })
}
