pub mod method;
pub mod pinger;
pub mod probe;
pub mod result;
pub mod setting;
