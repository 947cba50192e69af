//! Target outputs handed to the transaction builder

use super::constants::DUST_SATS;
use bitcoin::{Amount, Script, ScriptBuf, TxOut};
use serde::{Serialize, Serializer};

/// One output of the transaction being built, in wire order.
///
/// A `ChangeSlot` is an output the signer must pay to the wallet's own
/// change script before finalizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutput {
    Explicit { sats: u64, script: ScriptBuf },
    ChangeSlot { sats: u64 },
}

impl TargetOutput {
    /// Zero-value output carrying the token OP_RETURN
    pub fn op_return(script: ScriptBuf) -> Self {
        Self::Explicit { sats: 0, script }
    }

    /// Dust output paid to an explicit destination
    pub fn dust_to(script: ScriptBuf) -> Self {
        Self::Explicit {
            sats: DUST_SATS,
            script,
        }
    }

    /// Dust output paid back to the sending wallet
    pub fn dust_change() -> Self {
        Self::ChangeSlot { sats: DUST_SATS }
    }

    pub fn sats(&self) -> u64 {
        match self {
            Self::Explicit { sats, .. } | Self::ChangeSlot { sats } => *sats,
        }
    }

    pub fn script(&self) -> Option<&Script> {
        match self {
            Self::Explicit { script, .. } => Some(script.as_script()),
            Self::ChangeSlot { .. } => None,
        }
    }

    /// Resolve into a concrete output, paying change slots to `change_script`
    pub fn to_tx_out(&self, change_script: &Script) -> TxOut {
        TxOut {
            value: Amount::from_sat(self.sats()),
            script_pubkey: self
                .script()
                .map_or_else(|| change_script.to_owned(), Script::to_owned),
        }
    }
}

/// True for a bare dust output that still needs the wallet's change script
pub fn is_token_dust_change_output(output: &TargetOutput) -> bool {
    matches!(output, TargetOutput::ChangeSlot { sats } if *sats == DUST_SATS)
}

#[derive(Serialize)]
struct TargetOutputJson {
    sats: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<String>,
}

impl Serialize for TargetOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TargetOutputJson {
            sats: self.sats(),
            script: self.script().map(|script| hex::encode(script.as_bytes())),
        }
        .serialize(serializer)
    }
}
