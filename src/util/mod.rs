
pub mod human;
pub mod log;
pub mod op_count;
pub mod timing;


// // from https://www.jianshu.com/p/e30eef29f66e
use std::time::{SystemTime, UNIX_EPOCH};
pub fn now_millis() -> i64 {
    let since_the_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    since_the_epoch.as_secs() as i64 * 1000i64 + since_the_epoch.subsec_millis() as i64
}
