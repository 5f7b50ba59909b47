//! Text renderings of Bluetooth addresses and raw payloads

/// Maximum number of bytes rendered on one row by [`format_bytes`]
pub const BYTES_PER_ROW: usize = 16;

/// Renders the low 48 bits of `address` as `AA:BB:CC:DD:EE:FF`, most significant byte first.
pub fn format_address(address: u64) -> String {
    address.to_be_bytes()[2..]
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Splits `data` into rows of at most [`BYTES_PER_ROW`] bytes, each rendered as ` 01 02 03`.
///
/// Empty input yields no rows.
pub fn format_bytes(data: &[u8]) -> Vec<String> {
    data.chunks(BYTES_PER_ROW)
        .map(|chunk| chunk.iter().map(|byte| format!(" {byte:02X}")).collect())
        .collect()
}
