//! Machine identity record

use serde::{Deserialize, Serialize};

/// Machine classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineType {
    Workstation,
    Laptop,
    Server,
    Vm,
    Container,
    Cloud,
    #[serde(other)]
    Other,
}

/// The machine this descriptor belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Unique slug
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<MachineType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Directory whose children must all be registered (a managed directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_root: Option<String>,
}

impl Machine {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            machine_type: None,
            os: None,
            arch: None,
            description: None,
            agent_root: None,
        }
    }
}
