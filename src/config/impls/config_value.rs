use std::fmt;
use std::time::Duration;
use crate::config::config::{format_duration, parse_bool, parse_duration};
use crate::config::enums::config_value::ConfigValue;

impl ConfigValue {
    pub fn from_toml(value: &toml::Value) -> ConfigValue {
        match value {
            toml::Value::String(v) => ConfigValue::String(v.clone()),
            toml::Value::Integer(v) => ConfigValue::Integer(*v),
            toml::Value::Float(v) => ConfigValue::Float(*v),
            toml::Value::Boolean(v) => ConfigValue::Boolean(*v),
            other => ConfigValue::String(other.to_string()),
        }
    }

    pub fn to_toml(&self) -> toml::Value {
        match self {
            ConfigValue::String(v) => toml::Value::String(v.clone()),
            ConfigValue::Integer(v) => toml::Value::Integer(*v),
            ConfigValue::Float(v) => toml::Value::Float(*v),
            ConfigValue::Boolean(v) => toml::Value::Boolean(*v),
            ConfigValue::Duration(v) => toml::Value::String(format_duration(*v)),
        }
    }

    pub fn as_string(&self) -> String {
        match self {
            ConfigValue::String(v) => v.clone(),
            ConfigValue::Integer(v) => v.to_string(),
            ConfigValue::Float(v) => v.to_string(),
            ConfigValue::Boolean(v) => v.to_string(),
            ConfigValue::Duration(v) => format_duration(*v),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::String(v) => v.trim().parse::<i64>().ok(),
            ConfigValue::Integer(v) => Some(*v),
            ConfigValue::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            ConfigValue::Float(_) => None,
            ConfigValue::Boolean(v) => Some(i64::from(*v)),
            ConfigValue::Duration(v) => i64::try_from(v.as_secs()).ok(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::String(v) => parse_bool(v),
            ConfigValue::Integer(v) => Some(*v != 0),
            ConfigValue::Float(v) => Some(*v != 0.0),
            ConfigValue::Boolean(v) => Some(*v),
            ConfigValue::Duration(v) => Some(!v.is_zero()),
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            ConfigValue::String(v) => parse_duration(v),
            ConfigValue::Integer(v) => u64::try_from(*v).ok().map(Duration::from_secs),
            ConfigValue::Float(v) => Duration::try_from_secs_f64(*v).ok(),
            ConfigValue::Boolean(_) => None,
            ConfigValue::Duration(v) => Some(*v),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<Duration> for ConfigValue {
    fn from(value: Duration) -> Self {
        ConfigValue::Duration(value)
    }
}
