//! `tinytz` converts between instants and wall clock times in IANA time
//! zones using a fixed amount of memory.
//!
//! Zone tables are compiled into `static` data by the [`zonedb`] crate. A
//! [`ZoneManager`][manager::ZoneManager] looks zones up by name, id or
//! index and hands out [`TimeZone`] handles backed by a small cache of zone
//! processors, each of which holds the transitions of a single year.
//!
//! ```rust
//! use tinytz::{
//!     manager::ExtendedZoneManager, options::Disambiguation, zonedb::EXTENDED_REGISTRY,
//!     LocalDateTime, ZonedDateTime,
//! };
//! use core::str::FromStr;
//!
//! let manager = ExtendedZoneManager::<4>::new(&EXTENDED_REGISTRY);
//! let paris = manager.create_for_zone_name("Europe/Paris");
//! let tokyo = manager.create_for_zone_name("Asia/Tokyo");
//!
//! let local = LocalDateTime::from_str("2024-07-14T22:00:00").unwrap();
//! let zdt =
//!     ZonedDateTime::for_local_date_time(&local, paris, Disambiguation::Compatible).unwrap();
//! assert_eq!(zdt.to_string(), "2024-07-14T22:00:00+02:00[Europe/Paris]");
//!
//! let in_tokyo = zdt.convert_to_time_zone(tokyo).unwrap();
//! assert_eq!(in_tokyo.to_string(), "2024-07-15T05:00:00+09:00[Asia/Tokyo]");
//! ```
//!
//! The crate is `no_std` and never allocates. The `sys` feature adds
//! [`sys::Now`] for reading the host clock and time zone.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // Offsets and calendar fields are stored in narrow integers.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod cache;
pub mod components;
pub mod error;
pub mod manager;
pub mod options;
pub mod processor;
pub mod registrar;

#[cfg(feature = "sys")]
pub mod sys;

#[doc(hidden)]
pub(crate) mod parsers;
#[doc(hidden)]
pub(crate) mod utils;

/// Re-export of the bundled zone tables.
pub use zonedb;

/// Re-export of `TinyAsciiStr` from `tinystr`, the storage of time zone
/// abbreviations.
pub use tinystr::TinyAsciiStr;

pub use zonedb::WeekDay;

#[doc(inline)]
pub use error::{ErrorKind, TimeError};

/// The `tinytz` result type
pub type TimeResult<T> = Result<T, TimeError>;

pub use crate::components::{
    LocalDate, LocalDateTime, LocalTime, OffsetDateTime, TimeOffset, TimePeriod, TimeZone,
    TimeZoneData, ZonedDateTime,
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait TimeUnwrap {
    type Output;

    /// Assertion based unwrapping. This will panic in debug builds, but
    /// returns an error during runtime.
    fn temporal_unwrap(self) -> TimeResult<Self::Output>;
}

impl<T> TimeUnwrap for Option<T> {
    type Output = T;

    fn temporal_unwrap(self) -> TimeResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(TimeError::assert())
    }
}

/// Seconds per day constant: 86,400
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
