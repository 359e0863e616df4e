use super::table::TelemetryTable;

/// Headline numbers computed from a telemetry table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySummary {
    pub samples: usize,
    pub duration_h: f64,
    pub min_alt_km: f64,
    pub max_alt_km: f64,
    pub max_rate_deg_s: f64,
    pub max_thrust_n: f64,
    pub final_energy_error: f64,
    pub final_momentum_error: f64,
}

impl TelemetrySummary {
    /// Compute summary from table data. An empty table yields all zeros.
    pub fn from_table(table: &TelemetryTable) -> Self {
        let Some(last) = table.last() else {
            return Self::default();
        };

        let (min_alt_km, max_alt_km) = table
            .samples()
            .iter()
            .map(|s| s.alt)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), a| (lo.min(a), hi.max(a)));

        let max_rate_deg_s = table
            .samples()
            .iter()
            .map(|s| s.omega_deg().norm())
            .fold(0.0_f64, f64::max);

        let max_thrust_n = table
            .samples()
            .iter()
            .map(|s| s.thrust.norm())
            .fold(0.0_f64, f64::max);

        let duration_h = table
            .time_span()
            .map_or(0.0, |(t0, t1)| (t1 - t0) / 3600.0);

        TelemetrySummary {
            samples: table.len(),
            duration_h,
            min_alt_km,
            max_alt_km,
            max_rate_deg_s,
            max_thrust_n,
            final_energy_error: last.energy_error,
            final_momentum_error: last.momentum_error,
        }
    }

    /// One-line form used by the dashboard header and the startup log.
    pub fn headline(&self) -> String {
        format!(
            "Samples: {}  |  Duration: {:.2} h  |  Altitude: {:.1}–{:.1} km  |  \
             Peak rate: {:.3} deg/s  |  Peak thrust: {:.2} N  |  \
             Final ΔE: {:.2e}  |  Final ΔH: {:.2e}",
            self.samples,
            self.duration_h,
            self.min_alt_km,
            self.max_alt_km,
            self.max_rate_deg_s,
            self.max_thrust_n,
            self.final_energy_error,
            self.final_momentum_error,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::table::fixtures;

    #[test]
    fn summary_covers_altitude_band() {
        let s = TelemetrySummary::from_table(&fixtures::circular_orbit(200));
        assert!(s.min_alt_km >= 499.0 - 1e-9);
        assert!(s.max_alt_km <= 501.0 + 1e-9);
        assert!(s.max_alt_km > s.min_alt_km);
    }

    #[test]
    fn summary_reports_duration_and_final_errors() {
        let table = fixtures::circular_orbit(61);
        let s = TelemetrySummary::from_table(&table);
        assert_eq!(s.samples, 61);
        assert!((s.duration_h - 1.0).abs() < 1e-12);
        assert!((s.final_energy_error - 60e-9).abs() < 1e-15);
        assert!((s.max_thrust_n - 1.5).abs() < 1e-12);
    }

    #[test]
    fn empty_table_summary_is_zero() {
        let s = TelemetrySummary::from_table(&TelemetryTable::default());
        assert_eq!(s, TelemetrySummary::default());
        assert!(s.headline().contains("Samples: 0"));
    }
}
