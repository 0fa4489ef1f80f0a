use std::io::Write;

use flexi_logger::{DeferredNow, Record, style};
use log::Level;

/// `message` for info, `level: message` otherwise. Debug and trace lines
/// also carry the emitting module.
pub fn cli_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    match level {
        Level::Info => write!(w, "{}", record.args()),
        Level::Warn | Level::Error => write!(
            w,
            "{}: {}",
            style(level).paint(level.as_str().to_lowercase()),
            record.args()
        ),
        Level::Debug | Level::Trace => write!(
            w,
            "{} [{}] {}",
            style(level).paint(level.as_str().to_lowercase()),
            record.module_path().unwrap_or("<unnamed>"),
            record.args()
        ),
    }
}
