//! Type-safe physical units for occultation calculations
//!
//! This module provides strongly-typed units using the `uom` crate so that a
//! length can never be passed where an angle or a time is expected. Mixing
//! dimensions is a compile error rather than a silently wrong number.
//!
//! `uom` covers the SI-adjacent units used here (kilometers, days, degrees,
//! arcseconds). The astronomical length units it lacks are defined below as
//! explicit scalar factors in meters.

use uom::si::angle::{degree, radian, second as arcsecond};
use uom::si::angular_velocity::radian_per_second;
use uom::si::length::{kilometer, meter};
use uom::si::time::{day, second};

/// Type alias for length measurements with convenient methods
pub type Length = uom::si::f64::Length;

/// Type alias for plane angles with convenient methods
pub type Angle = uom::si::f64::Angle;

/// Type alias for time spans with convenient methods
pub type Time = uom::si::f64::Time;

/// Type alias for angular rates with convenient methods
pub type AngularVelocity = uom::si::f64::AngularVelocity;

/// Nominal solar radius in meters (IAU 2015 Resolution B3)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// One parsec in meters (IAU 2015 Resolution B2)
pub const PARSEC_M: f64 = 3.085_677_581_491_367_3e16;

/// Extension trait for length conversions used in astronomy
pub trait LengthExt {
    /// Create length from meters
    fn from_meters(m: f64) -> Self;

    /// Get length in meters
    fn as_meters(&self) -> f64;

    /// Create length from kilometers (planetary scales)
    fn from_kilometers(km: f64) -> Self;

    /// Get length in kilometers
    fn as_kilometers(&self) -> f64;

    /// Create length from nominal solar radii (stellar radii)
    fn from_solar_radii(r_sun: f64) -> Self;

    /// Get length in nominal solar radii
    fn as_solar_radii(&self) -> f64;

    /// Create length from parsecs (stellar distances)
    fn from_parsecs(pc: f64) -> Self;

    /// Get length in parsecs
    fn as_parsecs(&self) -> f64;
}

/// Extension trait for angle conversions
pub trait AngleExt {
    /// Create angle from radians
    fn from_radians(rad: f64) -> Self;

    /// Get angle in radians
    fn as_radians(&self) -> f64;

    /// Create angle from degrees
    fn from_degrees(deg: f64) -> Self;

    /// Get angle in degrees
    fn as_degrees(&self) -> f64;

    /// Create angle from arcseconds
    fn from_arcseconds(arcsec: f64) -> Self;

    /// Get angle in arcseconds
    fn as_arcseconds(&self) -> f64;
}

/// Extension trait for time conversions
pub trait TimeExt {
    /// Create time from seconds
    fn from_seconds(s: f64) -> Self;

    /// Get time in seconds
    fn as_seconds(&self) -> f64;

    /// Create time from days (orbital periods)
    fn from_days(days: f64) -> Self;

    /// Get time in days
    fn as_days(&self) -> f64;
}

/// Extension trait for angular rate conversions
pub trait AngularVelocityExt {
    /// Create angular velocity from radians per second
    fn from_radians_per_second(rad_per_s: f64) -> Self;

    /// Get angular velocity in radians per second
    fn as_radians_per_second(&self) -> f64;

    /// Get angular velocity in arcseconds per second
    fn as_arcseconds_per_second(&self) -> f64;
}

impl LengthExt for Length {
    fn from_meters(m: f64) -> Self {
        Length::new::<meter>(m)
    }

    fn as_meters(&self) -> f64 {
        self.get::<meter>()
    }

    fn from_kilometers(km: f64) -> Self {
        Length::new::<kilometer>(km)
    }

    fn as_kilometers(&self) -> f64 {
        self.get::<kilometer>()
    }

    fn from_solar_radii(r_sun: f64) -> Self {
        Length::new::<meter>(r_sun * SOLAR_RADIUS_M)
    }

    fn as_solar_radii(&self) -> f64 {
        self.get::<meter>() / SOLAR_RADIUS_M
    }

    fn from_parsecs(pc: f64) -> Self {
        Length::new::<meter>(pc * PARSEC_M)
    }

    fn as_parsecs(&self) -> f64 {
        self.get::<meter>() / PARSEC_M
    }
}

impl AngleExt for Angle {
    fn from_radians(rad: f64) -> Self {
        Angle::new::<radian>(rad)
    }

    fn as_radians(&self) -> f64 {
        self.get::<radian>()
    }

    fn from_degrees(deg: f64) -> Self {
        Angle::new::<degree>(deg)
    }

    fn as_degrees(&self) -> f64 {
        self.get::<degree>()
    }

    fn from_arcseconds(arcsec: f64) -> Self {
        Angle::new::<arcsecond>(arcsec)
    }

    fn as_arcseconds(&self) -> f64 {
        self.get::<arcsecond>()
    }
}

impl TimeExt for Time {
    fn from_seconds(s: f64) -> Self {
        Time::new::<second>(s)
    }

    fn as_seconds(&self) -> f64 {
        self.get::<second>()
    }

    fn from_days(days: f64) -> Self {
        Time::new::<day>(days)
    }

    fn as_days(&self) -> f64 {
        self.get::<day>()
    }
}

impl AngularVelocityExt for AngularVelocity {
    fn from_radians_per_second(rad_per_s: f64) -> Self {
        AngularVelocity::new::<radian_per_second>(rad_per_s)
    }

    fn as_radians_per_second(&self) -> f64 {
        self.get::<radian_per_second>()
    }

    fn as_arcseconds_per_second(&self) -> f64 {
        // The angle swept in one second, expressed in arcseconds
        Angle::from_radians(self.as_radians_per_second()).as_arcseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_conversions() {
        let moon_radius = Length::from_kilometers(1737.4);
        assert_relative_eq!(moon_radius.as_meters(), 1_737_400.0, epsilon = 1e-6);
        assert_relative_eq!(moon_radius.as_kilometers(), 1737.4, epsilon = 1e-9);

        let sun = Length::from_solar_radii(1.0);
        assert_relative_eq!(sun.as_kilometers(), 695_700.0, epsilon = 1e-6);
        assert_relative_eq!(sun.as_solar_radii(), 1.0, epsilon = 1e-12);

        let pc = Length::from_parsecs(1.0);
        assert_relative_eq!(pc.as_kilometers(), 3.085_677_581e13, max_relative = 1e-9);
        assert_relative_eq!(pc.as_parsecs(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parsec_is_au_over_one_arcsecond() {
        // Definition of the parsec: 1 au subtends 1 arcsec
        let au = Length::from_meters(1.495_978_707e11);
        let ratio = au.as_meters() / Length::from_parsecs(1.0).as_meters();
        let angle = Angle::from_radians(ratio.atan());
        assert_relative_eq!(angle.as_arcseconds(), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_angle_conversions() {
        let full_circle = Angle::from_degrees(360.0);
        assert_relative_eq!(
            full_circle.as_radians(),
            2.0 * std::f64::consts::PI,
            max_relative = 1e-12
        );
        assert_relative_eq!(full_circle.as_arcseconds(), 1_296_000.0, max_relative = 1e-12);

        let one_arcsec = Angle::from_arcseconds(1.0);
        assert_relative_eq!(one_arcsec.as_degrees(), 1.0 / 3600.0, max_relative = 1e-12);
    }

    #[test]
    fn test_time_conversions() {
        let period = Time::from_days(27.3);
        assert_relative_eq!(period.as_seconds(), 27.3 * 86_400.0, max_relative = 1e-12);
        assert_relative_eq!(Time::from_seconds(86_400.0).as_days(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_angular_velocity_conversions() {
        // One degree per hour is one arcsecond per second
        let rate = AngularVelocity::from_radians_per_second(
            Angle::from_degrees(1.0).as_radians() / 3600.0,
        );
        assert_relative_eq!(rate.as_arcseconds_per_second(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_length_ordering() {
        let moon = Length::from_kilometers(1737.4);
        let sun = Length::from_solar_radii(1.0);
        let nearest_star = Length::from_parsecs(1.3);
        assert!(moon < sun);
        assert!(sun < nearest_star);
    }
}
