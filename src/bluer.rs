pub mod device;
pub mod platform;

mod error;

/// Packs a BlueZ address into the low 48 bits of a `u64`, most significant octet first.
fn address_to_u64(address: bluer::Address) -> u64 {
    address.0.iter().fold(0, |acc, &b| (acc << 8) | u64::from(b))
}

fn address_from_u64(address: u64) -> bluer::Address {
    let bytes = address.to_be_bytes();
    let mut octets = [0u8; 6];
    octets.copy_from_slice(&bytes[2..]);
    bluer::Address::new(octets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_conversion() {
        let address = bluer::Address::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(address_to_u64(address), 0xAABBCCDDEEFF);
        assert_eq!(address_from_u64(0xAABBCCDDEEFF), address);
        assert_eq!(address_from_u64(0x0000_0102_0304_0506).0, [1, 2, 3, 4, 5, 6]);
    }
}
