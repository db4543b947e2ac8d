/// Default hop limit (TTL) for probes
pub const DEFAULT_TTL: u8 = 255;
/// Default per-probe timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default target port for TCP connect probes
pub const DEFAULT_TCP_PORT: u16 = 80;
/// Payload appended to ICMP echo requests
pub const DEFAULT_ICMP_PAYLOAD: &[u8] = b"Ping";
/// Receive timeout the raw-socket probe used before it honored the target timeout
pub const LEGACY_SOCKET_RECV_TIMEOUT_SECS: u64 = 10;
/// Default number of hosts probed at once by a status report
pub const DEFAULT_HOSTS_CONCURRENCY: usize = 8;
/// Extra time granted to the ping child process before it is killed
pub const EXEC_KILL_GRACE_MILLIS: u64 = 1000;
/// Read buffer size for raw-socket replies
pub const SOCKET_READ_BUFFER_SIZE: usize = 255;
