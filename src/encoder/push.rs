//! Script push encoding shared by SLP and the eMPP envelope

use bitcoin::ScriptBuf;

pub const OP_RETURN: u8 = 0x6a;
pub const OP_RESERVED: u8 = 0x50;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Append a data push. Empty data is pushed as `OP_PUSHDATA1 0x00`, which
/// is how SLP encodes an empty field.
pub fn push_bytes(script: &mut Vec<u8>, data: &[u8]) {
    match data.len() {
        0 => script.extend_from_slice(&[OP_PUSHDATA1, 0]),
        len @ 1..=0x4b => script.push(len as u8),
        len @ 0x4c..=0xff => script.extend_from_slice(&[OP_PUSHDATA1, len as u8]),
        len @ 0x100..=0xffff => {
            script.push(OP_PUSHDATA2);
            script.extend_from_slice(&(len as u16).to_le_bytes());
        }
        len => {
            script.push(OP_PUSHDATA4);
            script.extend_from_slice(&(len as u32).to_le_bytes());
        }
    }
    script.extend_from_slice(data);
}

/// eMPP envelope: `OP_RETURN OP_RESERVED <section>...`
pub fn empp_script(sections: &[Vec<u8>]) -> ScriptBuf {
    let mut script = vec![OP_RETURN, OP_RESERVED];
    for section in sections {
        push_bytes(&mut script, section);
    }
    ScriptBuf::from_bytes(script)
}
