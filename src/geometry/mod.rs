use num_traits::Float;
use serde::{Deserialize, Serialize};


/// Mean earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;


/// Haversine (great-circle) distance in meters
/// Inputs are degrees, no range checks: NaN/Inf propagate through
/// https://en.wikipedia.org/wiki/Haversine_formula
pub fn haversine<T>(lat1: T, lng1: T, lat2: T, lng2: T) -> T
where
    T: Float,
    {
    let two = T::one() + T::one();
    let radius = T::from(EARTH_RADIUS_M).unwrap_or_else(T::nan);

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let a = (d_phi / two).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / two).sin().powi(2);

    // Rounding can leave a just outside [0, 1] near antipodes, which would
    // make a root NaN. Comparisons keep a NaN a as NaN (Float::min would not)
    let a = if a > T::one() {
        T::one()
    } else if a < T::zero() {
        T::zero()
    } else {
        a
    };
    let c = two * a.sqrt().atan2((T::one() - a).sqrt());

    radius * c
}


/// Geographic coordinate in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another coordinate in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine(self.lat, self.lng, other.lat, other.lng)
    }
}
