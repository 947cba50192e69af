//! Token script parsing
//!
//! Turns an output script back into the token message it carries. Scripts
//! that are not token messages at all parse to `None`; scripts that claim
//! to be one but are malformed fail with a `ParseError`.

pub mod alp;
pub mod error;
pub mod slp;

pub use alp::{parse_alp, AlpData, AlpTx};
pub use error::{ParseError, ParseResult};
pub use slp::{parse_slp, SlpData, SlpTx};

use crate::encoder::{OP_RESERVED, OP_RETURN};
use crate::encoder::push::{OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use bitcoin::Script;
use byteorder::{LittleEndian, ReadBytesExt};
use serde::Serialize;
use std::io::{Cursor, Read};
use tracing::debug;

/// Token message found in an OP_RETURN
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "protocol", content = "data", rename_all = "UPPERCASE")]
pub enum ParsedTokenScript {
    Slp(SlpData),
    /// One entry per ALP section in the eMPP envelope
    Alp(Vec<AlpData>),
}

/// Parse an output script as SLP, or as an eMPP envelope of ALP sections
pub fn parse_token_script(script: &Script) -> ParseResult<Option<ParsedTokenScript>> {
    if let Some(slp) = parse_slp(script)? {
        return Ok(Some(ParsedTokenScript::Slp(slp)));
    }

    let bytes = script.as_bytes();
    if bytes.len() < 2 || bytes[0] != OP_RETURN || bytes[1] != OP_RESERVED {
        debug!("Script is neither SLP nor eMPP");
        return Ok(None);
    }

    let mut cursor = Cursor::new(&bytes[2..]);
    let mut sections = Vec::new();
    while let Some(push) = read_push(&mut cursor)? {
        if push.is_empty() {
            return Err(ParseError::InvalidEmpp("empty push".to_string()));
        }
        // Non-ALP sections (other eMPP protocols) are skipped
        if let Some(section) = parse_alp(&push)? {
            sections.push(section);
        }
    }

    if sections.is_empty() {
        return Ok(None);
    }
    Ok(Some(ParsedTokenScript::Alp(sections)))
}

/// Read the next data push. Returns `None` at the end of the script.
///
/// OP_0 and the numeric opcodes are not pushes here; token messages only
/// ever use explicit push lengths.
pub(crate) fn read_push(cursor: &mut Cursor<&[u8]>) -> ParseResult<Option<Vec<u8>>> {
    let opcode = match cursor.read_u8() {
        Ok(opcode) => opcode,
        Err(_) => return Ok(None),
    };
    let len = match opcode {
        0x01..=0x4b => opcode as usize,
        OP_PUSHDATA1 => read_len(cursor, 1)?,
        OP_PUSHDATA2 => read_len(cursor, 2)?,
        OP_PUSHDATA4 => read_len(cursor, 4)?,
        _ => return Err(ParseError::NonPushOp(opcode)),
    };
    read_exact(cursor, len).map(Some)
}

fn read_len(cursor: &mut Cursor<&[u8]>, width: usize) -> ParseResult<usize> {
    let left = remaining(cursor);
    let len = match width {
        1 => cursor.read_u8().map(usize::from),
        2 => cursor.read_u16::<LittleEndian>().map(usize::from),
        _ => cursor.read_u32::<LittleEndian>().map(|len| len as usize),
    };
    len.map_err(|_| ParseError::NotEnoughBytes {
        needed: width,
        left,
    })
}

pub(crate) fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    let len = cursor.get_ref().len() as u64;
    len.saturating_sub(cursor.position()) as usize
}

pub(crate) fn read_exact(cursor: &mut Cursor<&[u8]>, len: usize) -> ParseResult<Vec<u8>> {
    let left = remaining(cursor);
    if left < len {
        return Err(ParseError::NotEnoughBytes { needed: len, left });
    }
    let mut buf = vec![0u8; len];
    cursor
        .read_exact(&mut buf)
        .map_err(|_| ParseError::NotEnoughBytes { needed: len, left })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::ScriptBuf;

    fn script(hex: &str) -> ScriptBuf {
        ScriptBuf::from_bytes(hex::decode(hex).unwrap())
    }

    #[test]
    fn test_read_push() {
        let bytes = hex::decode("4c00020102").unwrap();
        let mut cursor = Cursor::new(bytes.as_slice());
        assert_eq!(read_push(&mut cursor), Ok(Some(vec![])));
        assert_eq!(read_push(&mut cursor), Ok(Some(vec![1, 2])));
        assert_eq!(read_push(&mut cursor), Ok(None));

        let bytes = [0x00];
        let mut cursor = Cursor::new(&bytes[..]);
        assert_eq!(read_push(&mut cursor), Err(ParseError::NonPushOp(0x00)));

        let bytes = [0x05, 0x01];
        let mut cursor = Cursor::new(&bytes[..]);
        assert_eq!(
            read_push(&mut cursor),
            Err(ParseError::NotEnoughBytes { needed: 5, left: 1 })
        );
    }

    #[test]
    fn test_parse_token_script_dispatch() {
        // P2PKH is not a token script
        let p2pkh = script("76a914c38232a045a85c84e5733d60e867dcee9ad4b18d88ac");
        assert_eq!(parse_token_script(&p2pkh), Ok(None));

        // Plain OP_RETURN memo
        assert_eq!(parse_token_script(&script("6a0568656c6c6f")), Ok(None));

        let slp = script(
            "6a04534c500001010453454e44201111111111111111111111111111111111111111111111111111111111111111080000000000000001",
        );
        assert!(matches!(
            parse_token_script(&slp),
            Ok(Some(ParsedTokenScript::Slp(_)))
        ));

        let alp = script(
            "6a503d534c5032000453454e4445e1f25de444e399b6d46fa66e3424c04549a85a14b12bc9a4ddc9cdcdcdcdcd03e80300000000948f04000000640000000000",
        );
        match parse_token_script(&alp) {
            Ok(Some(ParsedTokenScript::Alp(sections))) => assert_eq!(sections.len(), 1),
            other => panic!("unexpected {:?}", other),
        }

        // eMPP with a foreign section only
        assert_eq!(parse_token_script(&script("6a500454455354")), Ok(None));

        // eMPP forbids empty pushes
        assert!(matches!(
            parse_token_script(&script("6a504c00")),
            Err(ParseError::InvalidEmpp(_))
        ));
    }
}
