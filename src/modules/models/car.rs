use serde::{Deserialize, Deserializer, Serialize};
use snafu::ensure;

use crate::errors::{CustomResult, InvalidInputSnafu};

/// # car
/// one entry of the remote catalog. field names match the catalog api.
///
/// numeric fields missing from a record (or `null`) are read as zero and
/// descriptive fields as an empty string.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct Car {
    pub car_id: String,
    pub car_name: String,
    pub constructor: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub driver: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub car_number: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chassis_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engine_supplier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engine_type: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub rpm_limit: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tyre_supplier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chassis_material: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub front_wing: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rear_wing: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub floor_design: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub diffuser: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sidepods: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub halo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub length_m: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub width_m: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height_m: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wheelbase_m: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub minimum_weight_kg: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub acceleration_0_100_kmh: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_speed_kmh: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downforce_kgf: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cornering_g_force: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fuel_capacity_kg: f64,
}

/// `null` columns of the catalog store read as the default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// integers sent as json floats (`44.0`) are accepted, the fraction is dropped
fn lenient_integer<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0, |value| value as i32))
}

impl Car {
    /// # validate
    /// checks the precondition the scoring engine relies on: the 0-100 km/h
    /// time is used as a divisor so it has to be a positive finite number.
    pub fn validate(&self) -> CustomResult<()> {
        validate_acceleration(&self.car_id, self.acceleration_0_100_kmh)
    }

    /// last word of the name, used as a short chart label
    pub fn short_name(&self) -> &str {
        self.car_name
            .split_whitespace()
            .last()
            .unwrap_or("")
    }
}

pub(crate) fn validate_acceleration(car_id: &str, seconds: f64) -> CustomResult<()> {
    ensure!(
        seconds.is_finite() && seconds > 0.0,
        InvalidInputSnafu {
            car_id,
            reason: format!("0-100 km/h time must be a positive number of seconds, got {seconds}"),
        }
    );
    Ok(())
}

/// # car update
/// a partial car as sent by the edit and create forms. only the fields
/// that are set get forwarded to the catalog api.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct CarUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm_limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tyre_supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_wing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rear_wing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_design: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffuser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidepods: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheelbase_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceleration_0_100_kmh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_speed_kmh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downforce_kgf: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cornering_g_force: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_capacity_kg: Option<f64>,
}

impl CarUpdate {
    /// rejects an update that would break the acceleration precondition.
    /// an update that leaves the acceleration untouched is always accepted.
    pub fn validate(&self, car_id: &str) -> CustomResult<()> {
        match self.acceleration_0_100_kmh {
            Some(seconds) => validate_acceleration(car_id, seconds),
            None => Ok(()),
        }
    }

    /// # apply
    /// overlays the set fields onto an existing car
    pub fn apply_to(&self, car: &Car) -> Car {
        let mut updated = car.clone();

        macro_rules! overlay {
            ( $( $field:ident ),* ) => {
                $(
                    if let Some(value) = &self.$field {
                        updated.$field = value.clone();
                    }
                )*
            };
        }

        overlay!(
            car_id, car_name, constructor, season, driver, car_number, chassis_code,
            engine_supplier, engine_type, rpm_limit, tyre_supplier, chassis_material,
            front_wing, rear_wing, floor_design, diffuser, sidepods, halo, length_m,
            width_m, height_m, wheelbase_m, minimum_weight_kg, acceleration_0_100_kmh,
            top_speed_kmh, downforce_kgf, cornering_g_force, fuel_capacity_kg
        );

        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_missing_numeric_fields_default_to_zero() {
        let car: Car = serde_json::from_str(
            r#"{"car_id": "rb19", "car_name": "Red Bull RB19", "constructor": "Red Bull Racing", "top_speed_kmh": 350}"#,
        )
        .unwrap();

        assert_eq!(car.top_speed_kmh, 350.0);
        assert_eq!(car.downforce_kgf, 0.0);
        assert_eq!(car.rpm_limit, 0);
        assert_eq!(car.season, "");
    }

    #[test]
    fn test_null_fields_default_to_zero() {
        let car: Car = serde_json::from_str(
            r#"{"car_id": "amr23", "car_name": "Aston Martin AMR23", "constructor": "Aston Martin",
                "downforce_kgf": null, "driver": null, "rpm_limit": null, "top_speed_kmh": 345, "acceleration_0_100_kmh": 2.6}"#,
        )
        .unwrap();

        assert_eq!(car.downforce_kgf, 0.0);
        assert_eq!(car.driver, "");
        assert_eq!(car.rpm_limit, 0);
        assert_eq!(car.top_speed_kmh, 345.0);
    }

    #[test]
    fn test_float_integers_are_accepted() {
        let car: Car = serde_json::from_str(
            r#"{"car_id": "mcl60", "car_name": "McLaren MCL60", "constructor": "McLaren", "car_number": 4.0, "rpm_limit": 15000.0}"#,
        )
        .unwrap();

        assert_eq!(car.car_number, 4);
        assert_eq!(car.rpm_limit, 15000);
    }

    #[test]
    fn test_validate_rejects_zero_acceleration() {
        let car = Car {
            car_id: "slow".to_string(),
            acceleration_0_100_kmh: 0.0,
            ..Car::default()
        };
        assert!(matches!(car.validate(), Err(Error::InvalidInput { .. })));

        let car = Car { acceleration_0_100_kmh: f64::NAN, ..car };
        assert!(car.validate().is_err());

        let car = Car { acceleration_0_100_kmh: 2.6, ..car };
        assert!(car.validate().is_ok());
    }

    #[test]
    fn test_short_name() {
        let car = Car { car_name: "Mercedes W14".to_string(), ..Car::default() };
        assert_eq!(car.short_name(), "W14");
        assert_eq!(Car::default().short_name(), "");
    }

    #[test]
    fn test_update_only_serializes_set_fields() {
        let update = CarUpdate {
            top_speed_kmh: Some(355.0),
            ..CarUpdate::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"top_speed_kmh":355.0}"#);
    }

    #[test]
    fn test_update_apply_and_validate() {
        let car = Car {
            car_id: "sf23".to_string(),
            top_speed_kmh: 340.0,
            acceleration_0_100_kmh: 2.7,
            ..Car::default()
        };
        let update = CarUpdate {
            top_speed_kmh: Some(350.0),
            ..CarUpdate::default()
        };
        let updated = update.apply_to(&car);
        assert_eq!(updated.top_speed_kmh, 350.0);
        assert_eq!(updated.acceleration_0_100_kmh, 2.7);
        assert!(update.validate("sf23").is_ok());

        let bad = CarUpdate {
            acceleration_0_100_kmh: Some(-1.0),
            ..CarUpdate::default()
        };
        assert!(bad.validate("sf23").is_err());
    }
}
