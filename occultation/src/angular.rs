//! Apparent sizes and rates on the sky.
//!
//! A star occulted by the lunar limb fades over the time the limb needs to
//! sweep across the stellar disk, so the partial phase lasts the star's
//! angular diameter divided by the Moon's angular speed.

use shared::units::{Angle, AngleExt, AngularVelocity, AngularVelocityExt, Length, Time, TimeExt};

use crate::constants::lunar_period;

/// Apparent angular diameter of a sphere of `radius` seen from `distance`.
///
/// Computed as `2 * atan2(2 * radius, 2 * distance)`. Both arguments are
/// lengths, so any unit combination is accepted and a non-length argument
/// does not compile. `distance` is not validated: zero or negative distances
/// return whatever `atan2` yields for them.
///
/// # Examples
///
/// ```rust
/// use occultation::angular::angular_diameter;
/// use shared::units::{AngleExt, Length, LengthExt};
///
/// let sun_radius = Length::from_kilometers(695_700.0);
/// let one_au = Length::from_kilometers(1.496e8);
/// let sun = angular_diameter(sun_radius, one_au);
/// assert!((sun.as_degrees() - 0.53).abs() < 0.01);
/// ```
pub fn angular_diameter(radius: Length, distance: Length) -> Angle {
    (radius * 2.0).atan2(distance * 2.0) * 2.0
}

/// Angular speed of the Moon across the sky, relative to the stars.
///
/// One full circle per sidereal lunar period, roughly 0.55 arcsec/s.
pub fn angular_speed_of_the_moon() -> AngularVelocity {
    // uom's angle kind has no `Div<Time>`, so the ratio is taken in base units
    let full_circle = Angle::from_degrees(360.0);
    AngularVelocity::from_radians_per_second(
        full_circle.as_radians() / lunar_period().as_seconds(),
    )
}

/// Time the lunar limb needs to sweep across a star's disk.
pub fn occultation_duration(radius: Length, distance: Length) -> Time {
    let diameter = angular_diameter(radius, distance);
    // Same kind restriction as above: Angle / AngularVelocity does not yield Time
    Time::from_seconds(
        diameter.as_radians() / angular_speed_of_the_moon().as_radians_per_second(),
    )
}
