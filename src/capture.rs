//! Capture scanning: turn a stream of capture lines into observations.
//!
//! A line that fails the record check (or is not UTF-8) is removed with its line number
//! and reason; scanning continues with the next line. Only I/O errors stop a scan.

use crate::observation::{Observation, RecordError, SUBTYPE_BEACON};
use std::io::BufRead;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
}

/// 802.11 frame type of management frames.
pub const TYPE_MANAGEMENT: u32 = 0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Reject lines whose timestamp, type or subtype do not parse.
    pub strict: bool,
}

/// Result of scanning a capture: accepted observations and rejected lines.
#[derive(Debug, Default)]
pub struct CaptureScan {
    pub observations: Vec<Observation>,
    pub rejected: Vec<RejectedLine>,
}

#[derive(Debug)]
pub struct RejectedLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub record: String,
    pub reason: RecordError,
}

impl CaptureScan {
    /// Accepted observations of beacon frames: management type, beacon subtype.
    pub fn access_points(&self) -> impl Iterator<Item = &Observation> {
        self.observations
            .iter()
            .filter(|o| o.packet_type() == (Some(TYPE_MANAGEMENT), Some(SUBTYPE_BEACON)))
    }
}

/// Scan every line of `reader`. Empty lines are skipped.
pub fn scan_capture<R: BufRead>(mut reader: R, options: ScanOptions) -> Result<CaptureScan, CaptureError> {
    let mut scan = CaptureScan::default();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        if buf.is_empty() {
            continue;
        }
        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(e) => {
                tracing::debug!(line = line_no, "capture line is not UTF-8");
                scan.rejected.push(RejectedLine {
                    line: line_no,
                    record: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                    reason: RecordError::InvalidUtf8,
                });
                continue;
            }
        };
        let observation = Observation::new(line);
        let checked = if options.strict {
            observation.check_strict()
        } else {
            observation.check()
        };
        match checked {
            Ok(()) => scan.observations.push(observation),
            Err(reason) => {
                tracing::debug!(line = line_no, %reason, "rejected capture line");
                scan.rejected.push(RejectedLine {
                    line: line_no,
                    record: observation.raw().to_string(),
                    reason,
                });
            }
        }
    }
    tracing::trace!(
        accepted = scan.observations.len(),
        rejected = scan.rejected.len(),
        "capture scanned"
    );
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const GOOD: &str = "1595273999.7138083\t2.442GHz\t56\t2\t0\t0c:51:01:e4:da:2c\t28:ff:3c:a0:f0:7c";
    const SHORT: &str = "1595096135.744034\t2.437GHz\t44\t0\t5\t1c:b7:2c:7c:15:98";
    const BEACON: &str = "1595096136.1\t2.437GHz\t40\t0\t8\taa:bb:cc:dd:ee:ff\tff:ff:ff:ff:ff:ff\t0\tHomeNet";

    #[test]
    fn removes_short_lines_and_keeps_order() {
        let input = format!("{}\n{}\n\n{}\n", GOOD, SHORT, BEACON);
        let scan = scan_capture(Cursor::new(input), ScanOptions::default()).expect("scan");
        assert_eq!(scan.observations.len(), 2);
        assert_eq!(scan.observations[0].raw(), GOOD);
        assert_eq!(scan.observations[1].raw(), BEACON);
        assert_eq!(scan.rejected.len(), 1);
        assert_eq!(scan.rejected[0].line, 2);
        assert_eq!(scan.rejected[0].reason, RecordError::TooFewFields { found: 6 });
    }

    #[test]
    fn strict_mode_rejects_bad_type() {
        let bad = GOOD.replacen("\t2\t", "\tfoo\t", 1);
        let input = format!("{}\n{}\n", GOOD, bad);
        let lenient = scan_capture(Cursor::new(input.clone()), ScanOptions::default()).expect("scan");
        assert!(lenient.rejected.is_empty());
        let strict = scan_capture(Cursor::new(input), ScanOptions { strict: true }).expect("scan");
        assert_eq!(strict.observations.len(), 1);
        assert_eq!(strict.rejected[0].reason, RecordError::BadType("foo".to_string()));
    }

    #[test]
    fn access_points_filter() {
        let input = format!("{}\n{}\n", GOOD, BEACON);
        let scan = scan_capture(Cursor::new(input), ScanOptions::default()).expect("scan");
        let aps: Vec<_> = scan.access_points().map(|o| o.src()).collect();
        assert_eq!(aps, vec!["aa:bb:cc:dd:ee:ff"]);
    }

    #[test]
    fn access_points_skip_qos_data() {
        let qos = "1.0\t2.437GHz\t40\t2\t8\t11:22:33:44:55:66\taa:bb:cc:dd:ee:ff";
        let input = format!("{}\n{}\n", qos, BEACON);
        let scan = scan_capture(Cursor::new(input), ScanOptions::default()).expect("scan");
        assert_eq!(scan.observations.len(), 2);
        assert!(scan.observations[0].ap());
        let aps: Vec<_> = scan.access_points().map(|o| o.src()).collect();
        assert_eq!(aps, vec!["aa:bb:cc:dd:ee:ff"]);
    }

    #[test]
    fn line_of_tabs_is_accepted() {
        let input = format!("\t\t\t\t\t\t\n\n{}\r\n", GOOD);
        let scan = scan_capture(Cursor::new(input), ScanOptions::default()).expect("scan");
        assert_eq!(scan.observations.len(), 2);
        assert_eq!(scan.observations[0].field_count(), 7);
        assert_eq!(scan.observations[1].raw(), GOOD);
        assert!(scan.rejected.is_empty());
    }

    #[test]
    fn invalid_utf8_line_is_rejected_and_scan_continues() {
        let mut input = Vec::new();
        for _ in 0..3 {
            input.extend_from_slice(GOOD.as_bytes());
            input.push(b'\n');
        }
        input.extend_from_slice(b"1.0\t\xff\n");
        input.extend_from_slice(BEACON.as_bytes());
        let scan = scan_capture(Cursor::new(input), ScanOptions::default()).expect("scan");
        assert_eq!(scan.observations.len(), 4);
        assert_eq!(scan.observations[3].raw(), BEACON);
        assert_eq!(scan.rejected.len(), 1);
        assert_eq!(scan.rejected[0].line, 4);
        assert_eq!(scan.rejected[0].reason, RecordError::InvalidUtf8);
        assert_eq!(scan.rejected[0].record, "1.0\t\u{fffd}");
    }
}
