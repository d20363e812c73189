use ride_intents_core::responder::ResponderConfig;

pub const RIDE_IDENTIFIER_VAR: &str = "RIDE_INTENTS_RIDE_IDENTIFIER";
pub const VEHICLE_ICON_URL_VAR: &str = "RIDE_INTENTS_VEHICLE_ICON_URL";
pub const PICKUP_OFFSET_SECS_VAR: &str = "RIDE_INTENTS_PICKUP_OFFSET_SECS";
pub const OPTIONS_TTL_SECS_VAR: &str = "RIDE_INTENTS_OPTIONS_TTL_SECS";

pub const MAX_PICKUP_OFFSET_SECS: i64 = 24 * 60 * 60;
pub const MAX_OPTIONS_TTL_SECS: i64 = 3 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConfigError {}

pub fn responder_config_from_env() -> Result<ResponderConfig, ConfigError> {
    responder_config_from_lookup(|key| std::env::var(key).ok())
}

/// Builds a config from `lookup`, falling back to defaults for unset or blank keys.
pub fn responder_config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ResponderConfig, ConfigError> {
    let defaults = ResponderConfig::default();
    let value = |key: &str| {
        lookup(key)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
    };

    Ok(ResponderConfig {
        ride_identifier: value(RIDE_IDENTIFIER_VAR).unwrap_or(defaults.ride_identifier),
        vehicle_icon_url: value(VEHICLE_ICON_URL_VAR).unwrap_or(defaults.vehicle_icon_url),
        pickup_offset_secs: parse_secs(
            PICKUP_OFFSET_SECS_VAR,
            value(PICKUP_OFFSET_SECS_VAR),
            MAX_PICKUP_OFFSET_SECS,
        )?
        .unwrap_or(defaults.pickup_offset_secs),
        options_ttl_secs: parse_secs(
            OPTIONS_TTL_SECS_VAR,
            value(OPTIONS_TTL_SECS_VAR),
            MAX_OPTIONS_TTL_SECS,
        )?
        .unwrap_or(defaults.options_ttl_secs),
    })
}

fn parse_secs(key: &str, raw: Option<String>, max: i64) -> Result<Option<i64>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.parse::<i64>() {
        Ok(secs) if (0..=max).contains(&secs) => Ok(Some(secs)),
        Ok(secs) if secs < 0 => Err(ConfigError::new(format!(
            "{key} must be a non-negative number of seconds"
        ))),
        Ok(_) => Err(ConfigError::new(format!(
            "{key} must be at most {max} seconds"
        ))),
        Err(error) => Err(ConfigError::new(format!(
            "{key} must be an integer number of seconds: {error}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = responder_config_from_lookup(lookup_from(&[])).expect("defaults");
        assert_eq!(config, ResponderConfig::default());
    }

    #[test]
    fn overrides_are_trimmed_and_applied() {
        let config = responder_config_from_lookup(lookup_from(&[
            (RIDE_IDENTIFIER_VAR, " ride-7 "),
            (PICKUP_OFFSET_SECS_VAR, "120"),
            (VEHICLE_ICON_URL_VAR, "   "),
        ]))
        .expect("valid overrides");

        assert_eq!(config.ride_identifier, "ride-7");
        assert_eq!(config.pickup_offset_secs, 120);
        assert_eq!(
            config.vehicle_icon_url,
            ResponderConfig::default().vehicle_icon_url
        );
    }

    #[test]
    fn malformed_seconds_are_rejected() {
        let error = responder_config_from_lookup(lookup_from(&[(OPTIONS_TTL_SECS_VAR, "soon")]))
            .expect_err("non-numeric ttl");
        assert!(error.message().starts_with(OPTIONS_TTL_SECS_VAR));

        let error = responder_config_from_lookup(lookup_from(&[(PICKUP_OFFSET_SECS_VAR, "-5")]))
            .expect_err("negative offset");
        assert!(error.message().contains("non-negative"));
    }

    #[test]
    fn offsets_beyond_the_upper_bound_are_rejected() {
        let error = responder_config_from_lookup(lookup_from(&[(
            PICKUP_OFFSET_SECS_VAR,
            "10000000000000",
        )]))
        .expect_err("pickup offset far in the future");
        assert!(error.message().starts_with(PICKUP_OFFSET_SECS_VAR));
        assert!(error.message().contains("at most"));

        let above_ttl = (MAX_OPTIONS_TTL_SECS + 1).to_string();
        let error = responder_config_from_lookup(lookup_from(&[(
            OPTIONS_TTL_SECS_VAR,
            above_ttl.as_str(),
        )]))
        .expect_err("ttl above bound");
        assert!(error.message().starts_with(OPTIONS_TTL_SECS_VAR));
    }

    #[test]
    fn offsets_at_the_upper_bound_are_accepted() {
        let max_pickup = MAX_PICKUP_OFFSET_SECS.to_string();
        let max_ttl = MAX_OPTIONS_TTL_SECS.to_string();
        let config = responder_config_from_lookup(lookup_from(&[
            (PICKUP_OFFSET_SECS_VAR, max_pickup.as_str()),
            (OPTIONS_TTL_SECS_VAR, max_ttl.as_str()),
        ]))
        .expect("bounds are inclusive");
        assert_eq!(config.pickup_offset_secs, MAX_PICKUP_OFFSET_SECS);
        assert_eq!(config.options_ttl_secs, MAX_OPTIONS_TTL_SECS);
    }
}
