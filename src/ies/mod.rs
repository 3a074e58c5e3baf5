//! Mobility Management information elements.
//!
//! Each element owns its exact bit layout on the wire:
//!
//! - [`CmServiceType`]: 4-bit service selector (parse-only) - [`service`]
//! - [`RejectCause`]: 8-bit cause code (write-only) - [`service`]
//! - [`NetworkName`]: header octet + 7-bit packed or UCS-2 text - [`network_name`]
//! - [`TimeZoneAndTime`]: BCD timestamp + zone octet - [`time`]
//! - [`AuthRand`] / [`AuthSres`]: authentication challenge and response - [`auth`]

pub mod auth;
pub mod network_name;
pub mod service;
pub mod time;

pub use auth::{AuthRand, AuthSres};
pub use network_name::{Alphabet, NetworkName};
pub use service::{CmServiceType, RejectCause};
pub use time::{TimeKind, TimeZoneAndTime, ZoneContext};
