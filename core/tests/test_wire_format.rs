// Byte-level token layout, built and taken apart without the sealer:
//
// * a token assembled from a hand-written msgpack `{V, E}` record opens
// * a sealed token decrypts and decompresses to that same record

#[cfg(test)]
mod tests {
    use chacha20poly1305::aead::{Aead, KeyInit};
    use chacha20poly1305::{XChaCha20Poly1305, XNonce};
    use serde::{Deserialize, Serialize};

    use envelope_core::{constants::XNONCE_LEN, encoding, open, open_at, seal, SealError};

    const SECRET: &[u8] = b"274521B016094DBAB7093B257545A96E";

    /// Field names as other msgpack encoders write them.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Flash {
        kind: String,
        content: String,
    }

    fn flash() -> Flash {
        Flash {
            kind: "alert-success".into(),
            content: "42".into(),
        }
    }

    fn fixstr(out: &mut Vec<u8>, s: &str) {
        assert!(s.len() < 32);
        out.push(0xa0 | s.len() as u8);
        out.extend_from_slice(s.as_bytes());
    }

    /// `{"V": {"Kind": "alert-success", "Content": "42"}, "E": <expiry>}`
    fn record(expiry: &[u8]) -> Vec<u8> {
        let mut out = vec![0x82];
        fixstr(&mut out, "V");
        out.push(0x82);
        fixstr(&mut out, "Kind");
        fixstr(&mut out, "alert-success");
        fixstr(&mut out, "Content");
        fixstr(&mut out, "42");
        fixstr(&mut out, "E");
        out.extend_from_slice(expiry);
        out
    }

    fn mint(record: &[u8]) -> String {
        let compressed = zstd::bulk::compress(record, 3).unwrap();
        let cipher = XChaCha20Poly1305::new_from_slice(SECRET).unwrap();
        let nonce = [0x24u8; XNONCE_LEN];
        let ciphertext = cipher.encrypt(XNonce::from_slice(&nonce), compressed.as_slice()).unwrap();

        let mut message = nonce.to_vec();
        message.extend_from_slice(&ciphertext);
        encoding::encode(&message)
    }

    fn unseal(token: &str) -> Vec<u8> {
        let message = encoding::decode(token).unwrap();
        let (nonce, ciphertext) = message.split_at(XNONCE_LEN);
        let cipher = XChaCha20Poly1305::new_from_slice(SECRET).unwrap();
        let compressed = cipher.decrypt(XNonce::from_slice(nonce), ciphertext).unwrap();
        zstd::stream::decode_all(compressed.as_slice()).unwrap()
    }

    #[test]
    fn externally_minted_token_opens() {
        let token = mint(&record(&[0xff]));
        assert_eq!(open::<Flash>(SECRET, &token).unwrap(), flash());
    }

    #[test]
    fn externally_minted_expiry_is_honoured() {
        // E = 1700000000 as uint32
        let token = mint(&record(&[0xce, 0x65, 0x53, 0xf1, 0x00]));
        assert_eq!(open_at::<Flash>(SECRET, &token, 1_700_000_000).unwrap(), flash());
        assert!(matches!(
            open_at::<Flash>(SECRET, &token, 1_700_000_001),
            Err(SealError::Expired)
        ));
    }

    #[test]
    fn sealed_token_carries_the_v_e_record() {
        let token = seal(SECRET, None, &flash()).unwrap();
        assert_eq!(unseal(&token), record(&[0xff]));
    }
}
