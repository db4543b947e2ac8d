/// Compute the Internet checksum (one's complement of the one's complement sum
/// of big-endian 16-bit words). Odd-length input is padded with one zero byte.
pub fn checksum(data: &[u8]) -> u16 {
    let mut sum: u32 = 0;
    for word in data.chunks(2) {
        let hi = word[0];
        let lo = if word.len() == 2 { word[1] } else { 0 };
        sum += u16::from_be_bytes([hi, lo]) as u32;
        // Fold carries back into the low 16 bits
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}

/// Returns true if the buffer, checksum field included, sums to 0xFFFF.
pub fn verify(data: &[u8]) -> bool {
    checksum(data) == 0
}
