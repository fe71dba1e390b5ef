//! Ciphertext envelope.
//!
//! Layout before base64 armouring:
//!
//! ```text
//! [version u8][kdf memory u32 BE][kdf time u8][kdf lanes u8][salt 32B][sealed payload]
//! ```
//!
//! The prefix is not authenticated separately: changing the parameters or the
//! salt changes the derived key, and the payload then fails authentication.

use anyhow::{Result, bail, ensure};

use crate::cipher::derive::KdfParams;
use crate::config::{ARGON_SALT_LEN, CHACHA_NONCE_SIZE, CURRENT_VERSION, ENVELOPE_PARAMS_LEN, TAG_SIZE};

/// Smallest sealed payload: outer nonce and tag around an empty inner layer.
const MIN_PAYLOAD_LEN: usize = CHACHA_NONCE_SIZE + TAG_SIZE;

#[derive(Debug, PartialEq, Eq)]
pub struct Envelope {
    pub params: KdfParams,
    pub salt: [u8; ARGON_SALT_LEN],
    pub payload: Vec<u8>,
}

impl Envelope {
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let time = u8::try_from(self.params.time)?;
        let parallelism = u8::try_from(self.params.parallelism)?;

        let mut out = Vec::with_capacity(ENVELOPE_PARAMS_LEN + ARGON_SALT_LEN + self.payload.len());
        out.push(CURRENT_VERSION);
        out.extend_from_slice(&self.params.memory.to_be_bytes());
        out.push(time);
        out.push(parallelism);
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.payload);

        Ok(out)
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let Some((&version, rest)) = bytes.split_first() else {
            bail!("ciphertext too short");
        };
        if version != CURRENT_VERSION {
            bail!("unsupported envelope version: {version}");
        }

        ensure!(rest.len() >= ENVELOPE_PARAMS_LEN - 1 + ARGON_SALT_LEN + MIN_PAYLOAD_LEN, "ciphertext too short");

        let (memory, rest) = rest.split_at(4);
        let (costs, rest) = rest.split_at(2);
        let (salt, payload) = rest.split_at(ARGON_SALT_LEN);

        let params = KdfParams { memory: u32::from_be_bytes(memory.try_into()?), time: u32::from(costs[0]), parallelism: u32::from(costs[1]) };
        params.validate()?;

        Ok(Self { params, salt: salt.try_into()?, payload: payload.to_vec() })
    }
}
