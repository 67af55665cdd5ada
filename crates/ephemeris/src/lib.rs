//! # selene-ephemeris
//!
//! Analytic solar and lunar ephemeris with time-scale conversions.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateTime&lt;Utc&gt;"] -->|"julian_ephemeris_day()"| B["JDE (TT)"]
//!     B -->|"julian_centuries()"| C["T since J2000"]
//!     C -->|"sun_position()"| D["SunPosition"]
//!     C -->|"moon_position()"| E["MoonPosition"]
//!     F["AnalyticEphemeris"] -->|"validity check"| D
//!     F -->|"validity check"| E
//!     D -->|"ecliptic_to_equatorial()"| G["EquatorialCoord"]
//!     E -->|"ecliptic_to_equatorial()"| G
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::{TimeZone, Utc};
//! use selene_ephemeris::{AnalyticEphemeris, Ephemeris};
//!
//! let eph = AnalyticEphemeris::new();
//! let noon = Utc.with_ymd_and_hms(2024, 6, 22, 12, 0, 0).unwrap();
//!
//! let sun = eph.sun_position(noon).unwrap();
//! let moon = eph.moon_position(noon).unwrap();
//! let elongation = (moon.apparent_longitude_deg - sun.apparent_longitude_deg).rem_euclid(360.0);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `time` | Julian day, delta-T and sidereal time |
//! | `sun` | Solar longitude and distance series |
//! | `moon` | Lunar longitude, latitude and distance series |
//! | `coords` | Ecliptic/equatorial conversion and altitude |
//! | `provider` | `Ephemeris` trait and the analytic provider |
//! | `error` | Error types |

mod coords;
mod error;
mod moon;
mod provider;
mod sun;
mod time;

pub use coords::{EquatorialCoord, altitude_deg, ecliptic_to_equatorial, mean_obliquity_deg};
pub use error::EphemerisError;
pub use moon::{EARTH_RADIUS_KM, MOON_RADIUS_KM, MoonPosition};
pub use provider::{AnalyticEphemeris, Ephemeris};
pub use sun::{AU_KM, SUN_RADIUS_KM, SunPosition};
pub use time::{
    J2000, delta_t_seconds, gmst_degrees, julian_centuries, julian_day, julian_ephemeris_day,
};
