//! Hardware parameter registry
//!
//! `PARAMS` is the immutable descriptor table (name, type, range, default);
//! [`ParamStore`] holds the runtime values, parallel to the table. Values
//! live in memory only; there is no persistence layer.

use std::fmt;

/// Parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue {
    U8(u8),
    U16(u16),
    U32(u32),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::U8(n) => write!(f, "{}", n),
            ParamValue::U16(n) => write!(f, "{}", n),
            ParamValue::U32(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Parameter type with allowed range
#[derive(Debug, Clone, Copy)]
pub enum ParamType {
    Bool,
    U8 { min: u8, max: u8 },
    U16 { min: u16, max: u16 },
    U32 { min: u32, max: u32 },
    /// Small enumeration stored as u8, values `0..=max`
    Enum { max: u8 },
}

/// Parameter descriptor
pub struct ParamDescriptor {
    pub name: &'static str,
    pub brief: &'static str,
    pub param_type: ParamType,
    pub default: ParamValue,
}

/// All managed hardware parameters
pub static PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor {
        name: "fan.speed",
        brief: "Fan duty cycle in percent",
        param_type: ParamType::U8 { min: 0, max: 100 },
        default: ParamValue::U8(40),
    },
    ParamDescriptor {
        name: "fan.auto",
        brief: "Automatic fan control",
        param_type: ParamType::Bool,
        default: ParamValue::Bool(true),
    },
    ParamDescriptor {
        name: "power.limit_w",
        brief: "Power limit in watts",
        param_type: ParamType::U16 { min: 10, max: 350 },
        default: ParamValue::U16(180),
    },
    ParamDescriptor {
        name: "power.standby",
        brief: "Enter standby when idle",
        param_type: ParamType::Bool,
        default: ParamValue::Bool(false),
    },
    ParamDescriptor {
        name: "led.mode",
        brief: "Status LED mode (0=off 1=on 2=blink 3=breathe)",
        param_type: ParamType::Enum { max: 3 },
        default: ParamValue::U8(1),
    },
    ParamDescriptor {
        name: "sensor.poll_ms",
        brief: "Sensor polling interval in milliseconds",
        param_type: ParamType::U32 { min: 100, max: 60_000 },
        default: ParamValue::U32(1_000),
    },
];

/// Look up a parameter by exact name
pub fn find_param(name: &str) -> Option<&'static ParamDescriptor> {
    PARAMS.iter().find(|p| p.name == name)
}

/// Parameters whose name starts with `pattern` minus its trailing `*`
pub fn find_params_matching(pattern: &str) -> impl Iterator<Item = &'static ParamDescriptor> {
    let prefix = pattern.strip_suffix('*').unwrap_or(pattern).to_string();
    PARAMS.iter().filter(move |p| p.name.starts_with(&prefix))
}

/// All parameter names, for completion
pub fn param_names() -> impl Iterator<Item = &'static str> {
    PARAMS.iter().map(|p| p.name)
}

/// Runtime values for the parameters in `PARAMS`
pub struct ParamStore {
    values: Vec<ParamValue>,
}

impl ParamStore {
    /// Create a store with every parameter at its default
    pub fn new() -> Self {
        Self {
            values: PARAMS.iter().map(|p| p.default).collect(),
        }
    }

    /// Current value of a parameter
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        PARAMS
            .iter()
            .position(|p| p.name == name)
            .map(|i| self.values[i])
    }

    /// Store a value; the caller is responsible for type/range checks
    /// against the descriptor. Returns false for an unknown name.
    pub fn set(&mut self, name: &str, value: ParamValue) -> bool {
        match PARAMS.iter().position(|p| p.name == name) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Restore every parameter to its default
    pub fn reset(&mut self) {
        for (v, p) in self.values.iter_mut().zip(PARAMS) {
            *v = p.default;
        }
    }

    /// Walk `(name, value)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ParamValue)> + '_ {
        PARAMS.iter().zip(&self.values).map(|(p, v)| (p.name, *v))
    }
}

impl Default for ParamStore {
    fn default() -> Self {
        Self::new()
    }
}
