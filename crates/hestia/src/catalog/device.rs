use strum::Display;
use strum::EnumString;

/// A smart device known to the catalog.
///
/// A device is a flat record: a numeric id, a display name, and a payload of
/// kind-specific attributes. There is no behaviour here; the codec and the
/// menus branch on the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    /// Numeric identifier. Intended to be unique; load tolerates duplicates
    /// from legacy files, installation rejects them.
    pub id: i32,

    /// Human-readable name
    pub name: String,

    /// Kind-specific attributes
    pub kind: DeviceKind,
}

/// Kind-specific attribute payload for each supported device type.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceKind {
    Light {
        /// Intended range 1-100, not enforced
        brightness: f64,
        colour: String,
    },
    SecurityCamera {
        resolution: String,
    },
    Thermostat {
        current_temperature: f64,
        target_temperature: f64,
    },
    Speaker {
        volume: i32,
    },
}

/// Wire tag for a device kind, exactly as it appears in the DeviceType
/// column of the device file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum DeviceTag {
    #[strum(serialize = "SmartLight")]
    Light,
    #[strum(serialize = "SmartSecurityCamera")]
    SecurityCamera,
    #[strum(serialize = "SmartThermostat")]
    Thermostat,
    #[strum(serialize = "SmartSpeaker")]
    Speaker,
}

impl Device {
    pub fn new(id: i32, name: String, kind: DeviceKind) -> Self {
        Self { id, name, kind }
    }
}

impl DeviceKind {
    /// The wire tag this payload serializes under.
    pub fn tag(&self) -> DeviceTag {
        match self {
            DeviceKind::Light { .. } => DeviceTag::Light,
            DeviceKind::SecurityCamera { .. } => DeviceTag::SecurityCamera,
            DeviceKind::Thermostat { .. } => DeviceTag::Thermostat,
            DeviceKind::Speaker { .. } => DeviceTag::Speaker,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_tag_round_trips_through_display() {
        for tag in [
            DeviceTag::Light,
            DeviceTag::SecurityCamera,
            DeviceTag::Thermostat,
            DeviceTag::Speaker,
        ] {
            let text = tag.to_string();
            assert_eq!(DeviceTag::from_str(&text).unwrap(), tag);
        }
    }

    #[test]
    fn test_tag_wire_names() {
        assert_eq!(DeviceTag::Light.to_string(), "SmartLight");
        assert_eq!(DeviceTag::SecurityCamera.to_string(), "SmartSecurityCamera");
        assert_eq!(DeviceTag::Thermostat.to_string(), "SmartThermostat");
        assert_eq!(DeviceTag::Speaker.to_string(), "SmartSpeaker");
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        assert!(DeviceTag::from_str("SmartToaster").is_err());
        assert!(DeviceTag::from_str("smartlight").is_err());
        assert!(DeviceTag::from_str("").is_err());
    }

    #[test]
    fn test_kind_maps_to_tag() {
        let kind = DeviceKind::Thermostat {
            current_temperature: 19.5,
            target_temperature: 21.0,
        };
        assert_eq!(kind.tag(), DeviceTag::Thermostat);
    }
}
