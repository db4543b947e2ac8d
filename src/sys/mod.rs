pub mod os;
pub mod time;
