/// Current local date and time in RFC 3339 format.
pub fn get_sysdate() -> String {
    let now = chrono::Local::now();
    now.to_rfc3339()
}
