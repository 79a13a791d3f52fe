//! Status line formatting.
//!
//! The status line is rebuilt every tick, so it is formatted into a fixed
//! capacity string instead of a heap `String`.

use std::fmt::Write;

use arrayvec::ArrayString;

/// Maximum status line length in bytes.
pub const STATUS_CAPACITY: usize = 128;

pub type StatusLine = ArrayString<STATUS_CAPACITY>;

/// Instantaneous frames per second for a tick of `elapsed_secs`.
///
/// Zero for a zero-length tick.
pub fn fps(elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        1.0 / elapsed_secs
    } else {
        0.0
    }
}

/// Write `"<app_name> - FPS: <fps>"` into `out`, replacing its contents.
///
/// A name too long for the buffer is cut at a char boundary so the FPS
/// figure always fits.
pub fn format_status_line(out: &mut StatusLine, app_name: &str, elapsed_secs: f64) {
    out.clear();

    let mut tail = StatusLine::new();
    let _ = write!(tail, " - FPS: {:.2}", fps(elapsed_secs));

    let room = STATUS_CAPACITY - tail.len();
    let mut end = room.min(app_name.len());
    while !app_name.is_char_boundary(end) {
        end -= 1;
    }

    let _ = out.try_push_str(&app_name[..end]);
    let _ = out.try_push_str(&tail);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_name_and_two_decimal_fps() {
        let mut s = StatusLine::new();
        format_status_line(&mut s, "Demo", 1.0 / 64.0);
        assert_eq!(s.as_str(), "Demo - FPS: 64.00");

        format_status_line(&mut s, "Demo", 0.5);
        assert_eq!(s.as_str(), "Demo - FPS: 2.00");
    }

    #[test]
    fn zero_elapsed_reports_zero_fps() {
        assert_eq!(fps(0.0), 0.0);
        let mut s = StatusLine::new();
        format_status_line(&mut s, "x", 0.0);
        assert_eq!(s.as_str(), "x - FPS: 0.00");
    }

    #[test]
    fn long_names_are_truncated_on_char_boundaries() {
        let name = "é".repeat(100);
        let mut s = StatusLine::new();
        format_status_line(&mut s, &name, 0.02);
        assert!(s.len() <= STATUS_CAPACITY);
        assert!(s.ends_with(" - FPS: 50.00"));
        assert!(s.starts_with("éé"));
    }
}
