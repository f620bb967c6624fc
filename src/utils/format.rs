// ============================================================================
// FORMATO - Helpers de presentación (direcciones, redes, hashes)
// ============================================================================

/// `0x1234567890abcdef...` -> `0x1234...cdef`
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Nombre legible de la red según chain id
pub fn network_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "Ethereum Mainnet",
        5 => "Goerli Testnet",
        11155111 => "Sepolia Testnet",
        137 => "Polygon Mainnet",
        80001 => "Mumbai Testnet",
        _ => "Unknown Network",
    }
}

/// Parsear cantidades hex de JSON-RPC ("0x1", "0xaa36a7"); u128 para saldos en wei
pub fn parse_hex_quantity(value: &str) -> Option<u128> {
    let digits = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    u128::from_str_radix(digits, 16).ok()
}

const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// wei -> "1.5 ETH" (decimales completos, sin ceros a la derecha)
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETH;
    let fraction = wei % WEI_PER_ETH;
    if fraction == 0 {
        return format!("{} ETH", whole);
    }
    let decimals = format!("{:018}", fraction);
    format!("{}.{} ETH", whole, decimals.trim_end_matches('0'))
}
