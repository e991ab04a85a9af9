
#[allow(dead_code)]
pub static DEFAULT_LOG_IGNORE_LIST: [&str; 1] = ["serial_test"];
