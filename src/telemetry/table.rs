use nalgebra::{Quaternion, Vector3};

// ---------------------------------------------------------------------------
// One telemetry row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time: f64,                  // s, mission elapsed
    pub pos: Vector3<f64>,          // km, inertial
    pub lon: f64,                   // deg
    pub lat: f64,                   // deg
    pub alt: f64,                   // km
    pub quat: Quaternion<f64>,      // GCRS→body, not renormalized
    pub omega: Vector3<f64>,        // rad/s, body frame
    pub energy_error: f64,          // relative
    pub momentum_error: f64,        // relative
    pub torque: Vector3<f64>,       // N·m
    pub thrust: Vector3<f64>,       // N
}

impl Sample {
    /// Mission elapsed time in hours.
    pub fn hours(&self) -> f64 {
        self.time / 3600.0
    }

    /// Body rates in deg/s.
    pub fn omega_deg(&self) -> Vector3<f64> {
        self.omega.map(f64::to_degrees)
    }

    /// Field values in [`columns::REQUIRED`](super::columns::REQUIRED) order.
    pub fn fields(&self) -> [f64; 22] {
        [
            self.time,
            self.pos.x, self.pos.y, self.pos.z,
            self.lon, self.lat, self.alt,
            self.quat.w, self.quat.i, self.quat.j, self.quat.k,
            self.omega.x, self.omega.y, self.omega.z,
            self.energy_error, self.momentum_error,
            self.torque.x, self.torque.y, self.torque.z,
            self.thrust.x, self.thrust.y, self.thrust.z,
        ]
    }

    /// Inverse of [`Sample::fields`].
    pub fn from_fields(f: &[f64; 22]) -> Self {
        Sample {
            time: f[0],
            pos: Vector3::new(f[1], f[2], f[3]),
            lon: f[4],
            lat: f[5],
            alt: f[6],
            quat: Quaternion::new(f[7], f[8], f[9], f[10]),
            omega: Vector3::new(f[11], f[12], f[13]),
            energy_error: f[14],
            momentum_error: f[15],
            torque: Vector3::new(f[16], f[17], f[18]),
            thrust: Vector3::new(f[19], f[20], f[21]),
        }
    }
}

// ---------------------------------------------------------------------------
// Loaded table
// ---------------------------------------------------------------------------

/// Telemetry rows in file order. Read-only once constructed.
#[derive(Debug, Clone, Default)]
pub struct TelemetryTable {
    samples: Vec<Sample>,
}

impl TelemetryTable {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// (min, max) of the time column, `None` for an empty table.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        let mut it = self.samples.iter().map(|s| s.time);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

// ---------------------------------------------------------------------------
// Synthetic data for tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    const R_EARTH_KM: f64 = 6378.137;

    /// Circular 500 km orbit at 51.6° inclination sampled every 60 s.
    /// Longitudes are wrapped to [-180, 180) so the track crosses the antimeridian.
    pub fn circular_orbit(n: usize) -> TelemetryTable {
        let r = R_EARTH_KM + 500.0;
        let period = 5677.0;
        let inc = 51.6_f64.to_radians();
        let samples = (0..n)
            .map(|i| {
                let t = i as f64 * 60.0;
                let u = 2.0 * std::f64::consts::PI * t / period;
                let pos = Vector3::new(r * u.cos(), r * u.sin() * inc.cos(), r * u.sin() * inc.sin());
                let lat = (pos.z / r).asin().to_degrees();
                // Earth rotation drifts the subpoint west.
                let raw_lon = pos.y.atan2(pos.x).to_degrees() - t * 360.0 / 86164.0;
                let lon = (raw_lon + 180.0).rem_euclid(360.0) - 180.0;
                Sample {
                    time: t,
                    pos,
                    lon,
                    lat,
                    alt: 500.0 + (u * 2.0).sin(),
                    quat: Quaternion::new(1.0, 0.0, 0.0, 0.0),
                    omega: Vector3::new(0.01, 0.0, 0.0),
                    energy_error: 1e-9 * i as f64,
                    momentum_error: 1e-10 * i as f64,
                    torque: Vector3::new(1e-4, -2e-4, 0.0),
                    thrust: if i % 10 == 0 { Vector3::new(0.0, 1.5, 0.0) } else { Vector3::zeros() },
                }
            })
            .collect();
        TelemetryTable::from_samples(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_roundtrip_preserves_quaternion_order() {
        let mut s = fixtures::circular_orbit(2).samples()[1].clone();
        s.quat = Quaternion::new(0.5, 0.1, 0.2, 0.3);
        let f = s.fields();
        assert_eq!(f[7], 0.5);
        assert_eq!(f[10], 0.3);
        assert_eq!(Sample::from_fields(&f), s);
    }

    #[test]
    fn omega_converted_to_degrees() {
        let t = fixtures::circular_orbit(1);
        let s = &t.samples()[0];
        assert!((s.omega_deg().x - 0.01_f64.to_degrees()).abs() < 1e-12);
    }

    #[test]
    fn time_span_of_empty_table_is_none() {
        assert!(TelemetryTable::default().time_span().is_none());
        let t = fixtures::circular_orbit(11);
        assert_eq!(t.time_span(), Some((0.0, 600.0)));
    }
}
