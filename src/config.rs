use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use std::collections::HashSet;
use std::env;

/// Validator configuration, loaded from the environment with sensible
/// defaults. Every value here feeds exactly one rule at construction time;
/// runtime changes go through the rules' own management operations.
#[derive(Debug, Clone)]
pub struct Config {
    pub legal_entities: HashSet<String>,
    pub customers: HashSet<String>,
    pub spot_reference_date: NaiveDate,
    pub european_styles: Vec<String>,
    pub american_styles: Vec<String>,
    pub weekend_days: HashSet<Weekday>,
    pub holiday_lookup_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            legal_entities: HashSet::from(["CS Zurich".to_string()]),
            customers: HashSet::from(["PLUTO1".to_string(), "PLUTO2".to_string()]),
            spot_reference_date: NaiveDate::from_ymd_opt(2016, 9, 10).expect("valid date"),
            european_styles: vec!["EUROPEAN".to_string()],
            american_styles: vec!["AMERICAN".to_string()],
            weekend_days: HashSet::from([Weekday::Sat, Weekday::Sun]),
            holiday_lookup_timeout_ms: 500,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let legal_entities = match env::var("VALIDATOR_LEGAL_ENTITIES") {
            Ok(value) => parse_csv(&value).into_iter().collect(),
            Err(_) => defaults.legal_entities,
        };

        let customers = match env::var("VALIDATOR_CUSTOMERS") {
            Ok(value) => parse_csv(&value).into_iter().collect(),
            Err(_) => defaults.customers,
        };

        let spot_reference_date = match env::var("VALIDATOR_SPOT_REFERENCE_DATE") {
            Ok(value) => value
                .parse::<NaiveDate>()
                .context("Failed to parse VALIDATOR_SPOT_REFERENCE_DATE (expected YYYY-MM-DD)")?,
            Err(_) => defaults.spot_reference_date,
        };

        let european_styles = match env::var("VALIDATOR_EUROPEAN_STYLES") {
            Ok(value) => parse_csv(&value),
            Err(_) => defaults.european_styles,
        };

        let american_styles = match env::var("VALIDATOR_AMERICAN_STYLES") {
            Ok(value) => parse_csv(&value),
            Err(_) => defaults.american_styles,
        };

        let weekend_days = match env::var("VALIDATOR_WEEKEND_DAYS") {
            Ok(value) => parse_csv(&value)
                .iter()
                .map(|day| {
                    day.parse::<Weekday>().map_err(|_| {
                        anyhow::anyhow!("Invalid weekday '{}' in VALIDATOR_WEEKEND_DAYS", day)
                    })
                })
                .collect::<Result<HashSet<Weekday>>>()?,
            Err(_) => defaults.weekend_days,
        };

        let holiday_lookup_timeout_ms = env::var("VALIDATOR_HOLIDAY_LOOKUP_TIMEOUT_MS")
            .unwrap_or_else(|_| defaults.holiday_lookup_timeout_ms.to_string())
            .parse::<u64>()
            .context("Failed to parse VALIDATOR_HOLIDAY_LOOKUP_TIMEOUT_MS")?;

        Ok(Self {
            legal_entities,
            customers,
            spot_reference_date,
            european_styles,
            american_styles,
            weekend_days,
            holiday_lookup_timeout_ms,
        })
    }
}

fn parse_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    // Global lock to prevent race conditions when modifying environment variables in tests
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn get_env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn test_defaults() {
        let _guard = get_env_lock().lock().unwrap();

        let config = Config::from_env().unwrap();
        assert!(config.legal_entities.contains("CS Zurich"));
        assert!(config.customers.contains("PLUTO1"));
        assert_eq!(
            config.spot_reference_date,
            NaiveDate::from_ymd_opt(2016, 9, 10).unwrap()
        );
        assert_eq!(config.weekend_days, HashSet::from([Weekday::Sat, Weekday::Sun]));
        assert_eq!(config.holiday_lookup_timeout_ms, 500);
    }

    #[test]
    fn test_env_overrides() {
        let _guard = get_env_lock().lock().unwrap();

        unsafe {
            env::set_var("VALIDATOR_CUSTOMERS", "PLUTO1, PLUTO2 ,PLUTO3");
            env::set_var("VALIDATOR_SPOT_REFERENCE_DATE", "2020-01-02");
            env::set_var("VALIDATOR_WEEKEND_DAYS", "FRIDAY,SATURDAY");
        }

        let config = Config::from_env().unwrap();

        unsafe {
            env::remove_var("VALIDATOR_CUSTOMERS");
            env::remove_var("VALIDATOR_SPOT_REFERENCE_DATE");
            env::remove_var("VALIDATOR_WEEKEND_DAYS");
        }

        assert_eq!(config.customers.len(), 3);
        assert!(config.customers.contains("PLUTO3"));
        assert_eq!(
            config.spot_reference_date,
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()
        );
        assert_eq!(config.weekend_days, HashSet::from([Weekday::Fri, Weekday::Sat]));
    }

    #[test]
    fn test_invalid_reference_date_rejected() {
        let _guard = get_env_lock().lock().unwrap();

        unsafe {
            env::set_var("VALIDATOR_SPOT_REFERENCE_DATE", "not-a-date");
        }
        let result = Config::from_env();
        unsafe {
            env::remove_var("VALIDATOR_SPOT_REFERENCE_DATE");
        }

        assert!(result.is_err());
    }
}
