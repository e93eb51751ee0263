//! Authentication-TLV integration, §4.G. The Security-Association key store
//! (`SaFile`) is an external collaborator (§1 Non-goals); the codec only
//! consumes the lookup/ICV surface below.

use subtle::ConstantTimeEq;

use crate::cursor::ByteCursor;
use crate::error::ProtocolError;

pub const AUTHENTICATION_TLV_TYPE: u16 = 0x8009;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaKey {
    pub algorithm: u8,
    pub icv_len: usize,
}

/// External Security-Association store. `lookup` resolves the key material
/// for a `(spp, key_id)` pair; `icv` computes the integrity-check value over
/// the frame prefix that precedes the ICV bytes.
pub trait SaStore {
    fn lookup(&self, spp: u8, key_id: u32) -> Option<(SaKey, Vec<u8>)>;
    fn icv(&self, algorithm: u8, key: &[u8], frame_prefix: &[u8]) -> Vec<u8>;

    fn have(&self, spp: u8, key_id: u32) -> bool {
        self.lookup(spp, key_id).is_some()
    }
}

/// Appends a trailing `AUTHENTICATION` TLV to `frame` (already containing
/// the management/signaling body up to `body_end`), computing the ICV over
/// everything written so far. Returns the new total length.
pub fn append_auth_tlv(
    frame: &mut Vec<u8>,
    sa: &dyn SaStore,
    spp: u8,
    key_id: u32,
) -> Result<usize, ProtocolError> {
    let (key, key_bytes) = sa
        .lookup(spp, key_id)
        .ok_or(ProtocolError::AuthNoKey { spp, key_id })?;
    let icv = sa.icv(key.algorithm, &key_bytes, frame);

    let mut length = 6 + icv.len();
    let pad = length % 2;
    length += pad;

    let mut header = [0u8; 10];
    {
        let mut c = ByteCursor::for_build(&mut header);
        let mut tlv_type = AUTHENTICATION_TLV_TYPE;
        let mut len = length as u16;
        let mut spp_v = spp;
        let mut flags = 0u8;
        let mut key_id_v = key_id;
        c.u16(&mut tlv_type)?;
        c.u16(&mut len)?;
        c.u8(&mut spp_v)?;
        c.u8(&mut flags)?;
        c.u32(&mut key_id_v)?;
    }
    frame.extend_from_slice(&header);
    frame.extend_from_slice(&icv);
    for _ in 0..pad {
        frame.push(0);
    }
    Ok(frame.len())
}

/// Verifies a trailing `AUTHENTICATION` TLV against `body`, the frame bytes
/// preceding it. Returns `Ok(())` on match.
pub fn verify_auth_tlv(
    body: &[u8],
    spp: u8,
    flags: u8,
    key_id: u32,
    icv_field: &[u8],
    sa: &dyn SaStore,
) -> Result<(), ProtocolError> {
    let _ = flags;
    let (key, key_bytes) = sa
        .lookup(spp, key_id)
        .ok_or(ProtocolError::AuthNoKey { spp, key_id })?;
    let expected = sa.icv(key.algorithm, &key_bytes, body);
    // Constant-time: a length mismatch is public (ICV length comes from the
    // key), but the byte comparison itself must not short-circuit on the
    // first differing byte.
    if expected.len() != icv_field.len() || !bool::from(expected.ct_eq(icv_field)) {
        tracing::warn!(spp, key_id, "authentication TLV ICV mismatch");
        return Err(ProtocolError::AuthWrong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSa;
    impl SaStore for FixedSa {
        fn lookup(&self, _spp: u8, _key_id: u32) -> Option<(SaKey, Vec<u8>)> {
            Some((
                SaKey {
                    algorithm: 1,
                    icv_len: 4,
                },
                vec![1, 2, 3, 4],
            ))
        }

        fn icv(&self, _algorithm: u8, key: &[u8], frame_prefix: &[u8]) -> Vec<u8> {
            let mut sum = 0u8;
            for b in key.iter().chain(frame_prefix.iter()) {
                sum = sum.wrapping_add(*b);
            }
            vec![sum; 4]
        }
    }

    #[test]
    fn append_then_verify_round_trips() {
        let sa = FixedSa;
        let mut frame = vec![1, 2, 3];
        let total = append_auth_tlv(&mut frame, &sa, 2, 10).unwrap();
        assert_eq!(total, frame.len());
        let body = &frame[..3];
        let icv = &frame[frame.len() - 4..];
        verify_auth_tlv(body, 2, 0, 10, icv, &sa).unwrap();
    }

    #[test]
    fn tampered_body_fails_verify() {
        let sa = FixedSa;
        let mut frame = vec![1, 2, 3];
        append_auth_tlv(&mut frame, &sa, 2, 10).unwrap();
        let icv_len = frame.len();
        let icv = frame[icv_len - 4..].to_vec();
        let mut body = frame[..3].to_vec();
        body[0] ^= 0xff;
        assert!(matches!(
            verify_auth_tlv(&body, 2, 0, 10, &icv, &sa),
            Err(ProtocolError::AuthWrong)
        ));
    }
}
