use super::checksum::checksum;

/// ICMPv4 type: echo reply
pub const ICMP_ECHO_REPLY: u8 = 0;
/// ICMPv4 type: echo request
pub const ICMP_ECHO_REQUEST: u8 = 8;
/// Length of the ICMP echo header (type, code, checksum, identifier, sequence)
pub const ICMP_HEADER_LEN: usize = 8;

/// Build an ICMPv4 echo request.
///
/// The checksum is computed over the whole packet with the checksum field
/// zeroed and then written back in network byte order.
pub fn build_echo_request(identifier: u16, sequence: u16, payload: &[u8]) -> Vec<u8> {
    let mut packet: Vec<u8> = Vec::with_capacity(ICMP_HEADER_LEN + payload.len());
    packet.push(ICMP_ECHO_REQUEST);
    packet.push(0);
    packet.extend_from_slice(&[0, 0]);
    packet.extend_from_slice(&identifier.to_be_bytes());
    packet.extend_from_slice(&sequence.to_be_bytes());
    packet.extend_from_slice(payload);

    let sum = checksum(&packet);
    packet[2..4].copy_from_slice(&sum.to_be_bytes());
    packet
}

/// Get the ICMP type of a datagram read from a raw socket.
///
/// IPv4 raw sockets deliver the IP header in front of the ICMP message,
/// so a leading IPv4 header (version 4) is skipped using its IHL.
pub fn icmp_type(datagram: &[u8]) -> Option<u8> {
    let first = *datagram.first()?;
    if first >> 4 == 4 {
        let ihl = ((first & 0x0F) as usize) * 4;
        return datagram.get(ihl).copied();
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::checksum::verify;

    #[test]
    fn echo_request_layout() {
        let packet = build_echo_request(0, 0, b"Ping");
        assert_eq!(packet.len(), 12);
        assert_eq!(packet[0], ICMP_ECHO_REQUEST);
        assert_eq!(packet[1], 0);
        // 0x0800 + 0x5069 + 0x6e67 = 0xc6d0
        assert_eq!(u16::from_be_bytes([packet[2], packet[3]]), !0xC6D0u16);
        assert_eq!(&packet[4..8], &[0, 0, 0, 0]);
        assert_eq!(&packet[8..], b"Ping");
        assert!(verify(&packet));
    }

    #[test]
    fn empty_echo_request_sums_to_all_ones() {
        let packet = build_echo_request(0, 0, &[]);
        assert_eq!(packet.len(), ICMP_HEADER_LEN);
        let mut sum: u32 = packet
            .chunks(2)
            .map(|w| u16::from_be_bytes([w[0], w[1]]) as u32)
            .sum();
        while sum >> 16 != 0 {
            sum = (sum & 0xFFFF) + (sum >> 16);
        }
        assert_eq!(sum, 0xFFFF);
    }

    #[test]
    fn echo_request_with_odd_payload_verifies() {
        let packet = build_echo_request(0x1234, 7, b"abc");
        assert_eq!(packet.len(), 11);
        assert!(verify(&packet));
    }

    #[test]
    fn icmp_type_skips_ipv4_header() {
        let mut datagram = vec![0x45u8];
        datagram.extend_from_slice(&[0u8; 19]);
        datagram.push(ICMP_ECHO_REPLY);
        datagram.extend_from_slice(&[0u8; 7]);
        assert_eq!(icmp_type(&datagram), Some(ICMP_ECHO_REPLY));
    }

    #[test]
    fn icmp_type_without_ip_header() {
        assert_eq!(icmp_type(&[ICMP_ECHO_REPLY, 0, 0, 0]), Some(ICMP_ECHO_REPLY));
        assert_eq!(icmp_type(&[]), None);
    }
}
