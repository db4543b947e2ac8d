pub mod checksum;
pub mod icmp;
