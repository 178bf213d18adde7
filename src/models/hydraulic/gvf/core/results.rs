use std::fmt;

use uom::si::{
    f64::Length,
    length::{meter, millimeter},
};

use super::DepthProfile;

/// Output of a GVF run.
#[derive(Debug, Clone, PartialEq)]
pub struct GvfResults {
    /// Depth at which the Froude number is one.
    pub critical_depth: Length,

    /// Depth of uniform flow on the given bed slope.
    pub normal_depth: Length,

    /// Depth profile marched from the control section.
    pub profile: DepthProfile,
}

/// Renders the classic tabular report, depths in millimetres.
impl fmt::Display for GvfResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "CRITICAL DEPTH {:.6} (mm)",
            self.critical_depth.get::<millimeter>()
        )?;
        writeln!(
            f,
            "NORMAL DEPTH {:.6} (mm)",
            self.normal_depth.get::<millimeter>()
        )?;
        writeln!(f, "DISTANCE (m)    DEPTH(mm)")?;
        for station in &self.profile {
            writeln!(
                f,
                "{:.1}        {:.1}",
                station.distance.get::<meter>(),
                station.depth.get::<millimeter>()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::hydraulic::gvf::core::Station;

    #[test]
    fn report_layout() {
        let station = |x: f64, y: f64| Station {
            distance: Length::new::<meter>(x),
            depth: Length::new::<meter>(y),
        };
        let results = GvfResults {
            critical_depth: Length::new::<meter>(0.18),
            normal_depth: Length::new::<meter>(0.25),
            profile: DepthProfile::new(vec![station(0.0, 0.3), station(-10.0, 0.2963)]),
        };

        let report = results.to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "CRITICAL DEPTH 180.000000 (mm)");
        assert_eq!(lines[1], "NORMAL DEPTH 250.000000 (mm)");
        assert_eq!(lines[2], "DISTANCE (m)    DEPTH(mm)");
        assert_eq!(lines[3], "0.0        300.0");
        assert_eq!(lines[4], "-10.0        296.3");
        assert_eq!(lines.len(), 5);
    }
}
