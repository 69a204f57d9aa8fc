//! Motor resolution for imported designs.

use heapless::Vec;

use crate::error::truncated;
use crate::units::Meters;
use crate::warning::{Warning, WarningSink};

use super::database::{MotorCatalog, MAX_CATALOG_MOTORS};
use super::motor::{Motor, MotorType};

/// Diameter and length tolerance when narrowing candidates.
pub const DIMENSION_TOLERANCE: Meters = Meters(0.001);

/// What a design file says about a motor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotorQuery<'a> {
    /// Construction type, if given.
    pub kind: Option<MotorType>,
    /// Manufacturer, if given.
    pub manufacturer: Option<&'a str>,
    /// Designation, if given.
    pub designation: Option<&'a str>,
    /// Diameter, if given.
    pub diameter: Option<Meters>,
    /// Length, if given.
    pub length: Option<Meters>,
    /// Thrust-curve digest, if given.
    pub digest: Option<&'a str>,
}

impl MotorQuery<'_> {
    /// Stand-in motor carrying whatever the query knows.
    pub fn placeholder(&self) -> Motor {
        Motor::placeholder(
            self.kind.unwrap_or_default(),
            self.manufacturer.unwrap_or(""),
            self.designation.unwrap_or(""),
            self.diameter.unwrap_or_default(),
            self.length.unwrap_or_default(),
        )
    }

    fn accepts(&self, motor: &Motor) -> bool {
        let manufacturer_ok = self
            .manufacturer
            .map_or(true, |m| m.eq_ignore_ascii_case(motor.manufacturer.as_str()));
        let kind_ok = match self.kind {
            Some(MotorType::Unknown) | None => true,
            Some(kind) => kind == motor.kind,
        };
        manufacturer_ok && kind_ok
    }

    fn fits(&self, motor: &Motor) -> bool {
        let diameter_ok = self
            .diameter
            .map_or(true, |d| d.approx_eq(motor.diameter, DIMENSION_TOLERANCE));
        let length_ok = self
            .length
            .map_or(true, |l| l.approx_eq(motor.length, DIMENSION_TOLERANCE));
        diameter_ok && length_ok
    }
}

/// Resolves motor descriptions to motor definitions.
///
/// Resolution is best effort: it always yields a motor, reporting anything doubtful
/// as a warning.
pub trait MotorFinder {
    /// Find the motor described by `query`.
    fn find_motor(&self, query: &MotorQuery<'_>, warnings: &mut dyn WarningSink) -> Motor;
}

impl MotorFinder for MotorCatalog {
    fn find_motor(&self, query: &MotorQuery<'_>, warnings: &mut dyn WarningSink) -> Motor {
        if let Some(motor) = query.digest.and_then(|d| self.by_digest(d)) {
            return motor.clone();
        }

        let Some(designation) = query.designation.filter(|d| !d.is_empty()) else {
            warnings.add(Warning::MotorDesignationMissing);
            return query.placeholder();
        };

        let candidates: Vec<&Motor, MAX_CATALOG_MOTORS> = self
            .by_designation(designation)
            .filter(|m| query.accepts(m))
            .collect();
        let fitting: Vec<&Motor, MAX_CATALOG_MOTORS> =
            candidates.iter().copied().filter(|m| query.fits(m)).collect();
        let chosen = if fitting.is_empty() { &candidates } else { &fitting };

        match chosen.first() {
            None => {
                warnings.add(Warning::MotorNotFound(truncated(designation)));
                query.placeholder()
            }
            Some(motor) => {
                if chosen.len() > 1 {
                    warnings.add(Warning::MultipleMotorsMatched(truncated(designation)));
                }
                (*motor).clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warning::WarningSet;

    fn motor(manufacturer: &str, designation: &str, kind: MotorType, diameter: f64, digest: Option<&str>) -> Motor {
        let mut m = Motor::placeholder(kind, manufacturer, designation, Meters(diameter), Meters(0.07));
        m.digest = digest.map(truncated);
        m
    }

    fn catalog() -> MotorCatalog {
        let mut c = MotorCatalog::new();
        c.add(motor("Estes", "C6", MotorType::SingleUse, 0.018, Some("aa11"))).unwrap();
        c.add(motor("Quest", "C6", MotorType::SingleUse, 0.018, Some("bb22"))).unwrap();
        c.add(motor("Aerotech", "G64", MotorType::Reload, 0.029, None)).unwrap();
        c.add(motor("Aerotech", "G64", MotorType::SingleUse, 0.024, None)).unwrap();
        c
    }

    #[test]
    fn test_digest_wins() {
        let mut w = WarningSet::new();
        let query = MotorQuery { designation: Some("C6"), digest: Some("bb22"), ..Default::default() };
        let m = catalog().find_motor(&query, &mut w);
        assert_eq!(m.manufacturer.as_str(), "Quest");
        assert!(w.is_empty());
    }

    #[test]
    fn test_manufacturer_narrows_case_insensitive() {
        let mut w = WarningSet::new();
        let query = MotorQuery { designation: Some("c6"), manufacturer: Some("estes"), ..Default::default() };
        let m = catalog().find_motor(&query, &mut w);
        assert_eq!(m.manufacturer.as_str(), "Estes");
        assert!(w.is_empty());
    }

    #[test]
    fn test_ambiguous_picks_first_and_warns() {
        let mut w = WarningSet::new();
        let query = MotorQuery { designation: Some("C6"), ..Default::default() };
        let m = catalog().find_motor(&query, &mut w);
        assert_eq!(m.manufacturer.as_str(), "Estes");
        assert!(w.contains(&Warning::MultipleMotorsMatched(truncated("C6"))));
    }

    #[test]
    fn test_dimensions_break_ties() {
        let mut w = WarningSet::new();
        let query = MotorQuery { designation: Some("G64"), diameter: Some(Meters(0.029)), ..Default::default() };
        let m = catalog().find_motor(&query, &mut w);
        assert_eq!(m.kind, MotorType::Reload);
        assert!(w.is_empty());
    }

    #[test]
    fn test_unknown_designation_gives_placeholder() {
        let mut w = WarningSet::new();
        let query = MotorQuery {
            designation: Some("Z9000"),
            manufacturer: Some("Acme"),
            diameter: Some(Meters(0.098)),
            ..Default::default()
        };
        let m = catalog().find_motor(&query, &mut w);
        assert_eq!(m.designation.as_str(), "Z9000");
        assert_eq!(m.manufacturer.as_str(), "Acme");
        assert_eq!(m.diameter, Meters(0.098));
        assert!(w.contains(&Warning::MotorNotFound(truncated("Z9000"))));
    }

    #[test]
    fn test_missing_designation() {
        let mut w = WarningSet::new();
        let m = catalog().find_motor(&MotorQuery::default(), &mut w);
        assert!(m.designation.is_empty());
        assert!(w.contains(&Warning::MotorDesignationMissing));
    }
}
