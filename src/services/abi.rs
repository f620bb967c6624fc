// ============================================================================
// ABI - Codificación de calldata para el contrato SBT
// ============================================================================
// Solo los tipos que usa mintSBT: address, string, uint256
// ============================================================================

use sha3::{Digest, Keccak256};

const WORD: usize = 32;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Address([u8; 20]),
    String(String),
    Uint(u128),
}

/// Primeros 4 bytes de keccak256(signature)
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// "0x" + 40 hex => 20 bytes
pub fn parse_address(address: &str) -> Result<[u8; 20], String> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| format!("Address without 0x prefix: {}", address))?;
    let bytes = hex::decode(digits).map_err(|e| format!("Invalid address {}: {}", address, e))?;
    if bytes.len() != 20 {
        return Err(format!("Address must be 20 bytes, got {}", bytes.len()));
    }
    let mut out = [0u8; 20];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn uint_word(value: u128) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD) * WORD
}

/// Codificación head/tail de una lista de argumentos
pub fn encode(tokens: &[Token]) -> Vec<u8> {
    let head_len = tokens.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for token in tokens {
        match token {
            Token::Address(addr) => {
                let mut word = [0u8; WORD];
                word[12..].copy_from_slice(addr);
                head.extend_from_slice(&word);
            }
            Token::Uint(value) => head.extend_from_slice(&uint_word(*value)),
            Token::String(text) => {
                // offset relativo al inicio de los argumentos
                head.extend_from_slice(&uint_word((head_len + tail.len()) as u128));
                let bytes = text.as_bytes();
                tail.extend_from_slice(&uint_word(bytes.len() as u128));
                tail.extend_from_slice(bytes);
                tail.resize(tail.len() + padded_len(bytes.len()) - bytes.len(), 0);
            }
        }
    }

    head.extend_from_slice(&tail);
    head
}

/// selector + argumentos, en hex con prefijo 0x
pub fn encode_call(signature: &str, tokens: &[Token]) -> String {
    let mut data = selector(signature).to_vec();
    data.extend_from_slice(&encode(tokens));
    format!("0x{}", hex::encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erc20_transfer_selector() {
        assert_eq!(hex::encode(selector("transfer(address,uint256)")), "a9059cbb");
    }

    #[test]
    fn static_arguments_fill_one_word_each() {
        let addr = parse_address("0x00000000000000000000000000000000000000ff").unwrap();
        let encoded = encode(&[Token::Address(addr), Token::Uint(7)]);
        assert_eq!(encoded.len(), 64);
        assert_eq!(encoded[31], 0xff);
        assert_eq!(encoded[63], 7);
        assert!(encoded[..31].iter().all(|b| *b == 0));
    }

    #[test]
    fn strings_go_to_tail_with_offsets() {
        let encoded = encode(&[Token::String("abc".into()), Token::Uint(0), Token::String(String::new())]);
        // head: 3 words; tail: "abc" (len + 1 word), "" (len only)
        assert_eq!(encoded.len(), 3 * 32 + 2 * 32 + 32);
        assert_eq!(encoded[31], 96);
        assert_eq!(encoded[95], 160);
        assert_eq!(encoded[127], 3);
        assert_eq!(&encoded[128..131], b"abc");
        assert!(encoded[131..160].iter().all(|b| *b == 0));
        assert_eq!(encoded[191], 0);
    }

    #[test]
    fn long_strings_pad_to_word_boundary() {
        let text = "x".repeat(33);
        let encoded = encode(&[Token::String(text)]);
        assert_eq!(encoded.len(), 32 + 32 + 64);
    }

    #[test]
    fn rejects_bad_addresses() {
        assert!(parse_address("c3c76fD097FBEa31B213660543f8E6166538Bb42").is_err());
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("0xzz").is_err());
        assert!(parse_address("0xc3c76fD097FBEa31B213660543f8E6166538Bb42").is_ok());
    }

    #[test]
    fn call_data_is_prefixed_hex() {
        let data = encode_call("transfer(address,uint256)", &[Token::Address([0u8; 20]), Token::Uint(1)]);
        assert!(data.starts_with("0xa9059cbb"));
        assert_eq!(data.len(), 2 + 8 + 128);
    }
}
