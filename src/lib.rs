//! # wtrack-base — 802.11 capture record parser
//!
//! Parses the tab-separated lines written by a wireless frame sniffer into
//! [`Observation`]s: one timestamped snapshot of a frame's metadata plus its
//! information-element attributes.
//!
//! ## Line format
//!
//! ```text
//! timestamp  frequency  signal  type  subtype  src  dest  reserved  station  key1  val1  key2  val2 ...
//! ```
//!
//! - Fields are separated by a single tab; empty fields are kept.
//! - `station` may contain `\xHH` escapes; [`Observation::station`] masks each as `.`.
//! - Attribute values are passed through verbatim. A trailing key with no value maps to `""`.
//!
//! ## Degradation
//!
//! Construction never fails. An unparsable timestamp reads as `-1.0`, unparsable
//! type/subtype as `None`, and a line with fewer than 7 fields reports
//! [`Observation::valid`] `== false`. Use [`Observation::check_strict`] or
//! [`capture::scan_capture`] to reject lines instead.
//!
//! ## Example
//!
//! ```
//! use wtrack_base::Observation;
//!
//! let o = Observation::new("1595273999.7\t2.442GHz\t56\t0\t8\t0c:51:01:e4:da:2c\tff:ff:ff:ff:ff:ff\t0\tHome\\x00Net\t3\t\\x06");
//! assert!(o.valid());
//! assert!(o.ap());
//! assert_eq!(o.station(), "Home.Net");
//! assert_eq!(o.attr("3"), Some("\\x06"));
//! assert_eq!(o.attr("221"), None);
//! ```

pub mod attrs;
pub mod capture;
pub mod escape;
pub mod observation;

pub use attrs::Attributes;
pub use capture::{scan_capture, CaptureError, CaptureScan, RejectedLine, ScanOptions};
pub use escape::mask_hex_escapes;
pub use observation::{Observation, RecordError, NO_SIGNAL, NO_TIMESTAMP};
