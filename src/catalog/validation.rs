//! Catalog validation.

use crate::error::{CatalogError, Error, Result};

use super::{Motor, MotorCatalog};

/// Validate a motor catalog.
///
/// Checks:
/// - Designations are not empty
/// - Diameter and length are finite and positive
/// - Standard delays are non-negative
/// - No manufacturer/designation/digest combination appears twice
pub fn validate_catalog(catalog: &MotorCatalog) -> Result<()> {
    for (index, motor) in catalog.motors.iter().enumerate() {
        validate_motor(motor)?;

        let duplicate = catalog.motors[..index].iter().any(|other| {
            other.manufacturer.as_str().eq_ignore_ascii_case(motor.manufacturer.as_str())
                && other.designation.as_str().eq_ignore_ascii_case(motor.designation.as_str())
                && other.digest == motor.digest
        });
        if duplicate {
            return Err(Error::Catalog(CatalogError::DuplicateMotor(motor.designation.clone())));
        }
    }

    Ok(())
}

fn validate_motor(motor: &Motor) -> Result<()> {
    if motor.designation.is_empty() {
        return Err(Error::Catalog(CatalogError::EmptyDesignation));
    }

    let diameter = motor.diameter.value();
    if !diameter.is_finite() || diameter <= 0.0 {
        return Err(Error::Catalog(CatalogError::InvalidDiameter {
            designation: motor.designation.clone(),
            value: diameter,
        }));
    }

    let length = motor.length.value();
    if !length.is_finite() || length <= 0.0 {
        return Err(Error::Catalog(CatalogError::InvalidLength {
            designation: motor.designation.clone(),
            value: length,
        }));
    }

    // Plugged (infinite) delays are allowed, negative ones are not
    if let Some(delay) = motor.delays.iter().find(|d| d.value() < 0.0 || d.value().is_nan()) {
        return Err(Error::Catalog(CatalogError::InvalidDelay {
            designation: motor.designation.clone(),
            value: delay.value(),
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MotorType;
    use crate::units::{Meters, Seconds};

    fn c6() -> Motor {
        Motor::placeholder(MotorType::SingleUse, "Estes", "C6", Meters(0.018), Meters(0.070))
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(validate_catalog(&MotorCatalog::default()).is_ok());
    }

    #[test]
    fn test_invalid_diameter() {
        let mut motor = c6();
        motor.diameter = Meters(-1.0); // Invalid!

        let result = validate_motor(&motor);
        assert!(matches!(
            result,
            Err(Error::Catalog(CatalogError::InvalidDiameter { .. }))
        ));
    }

    #[test]
    fn test_negative_delay() {
        let mut motor = c6();
        motor.delays.push(Seconds(-3.0)).unwrap();
        assert!(matches!(
            validate_motor(&motor),
            Err(Error::Catalog(CatalogError::InvalidDelay { .. }))
        ));
    }

    #[test]
    fn test_duplicate_motor() {
        let mut catalog = MotorCatalog::new();
        catalog.add(c6()).unwrap();
        catalog.add(c6()).unwrap();
        assert!(matches!(
            validate_catalog(&catalog),
            Err(Error::Catalog(CatalogError::DuplicateMotor(_)))
        ));
    }

    #[test]
    fn test_same_designation_other_maker_is_fine() {
        let mut catalog = MotorCatalog::new();
        catalog.add(c6()).unwrap();
        let mut quest = c6();
        quest.manufacturer = heapless::String::try_from("Quest").unwrap();
        catalog.add(quest).unwrap();
        assert!(validate_catalog(&catalog).is_ok());
    }
}
