use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{ContractAddress, NetworkId};

/// The deployment artifact describing a ledger service: its callable
/// operations and its deployed address per network. Owned by the remote
/// service's deployment tooling; loaded once and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceManifest {
    pub abi: Vec<AbiEntry>,
    /// Key-ordered so that "first network entry" is deterministic.
    pub networks: BTreeMap<NetworkId, NetworkEntry>,
}

impl ServiceManifest {
    /// Functions only; artifacts also carry constructor and event
    /// entries, which are never dispatched.
    pub fn functions(&self) -> impl Iterator<Item = &AbiEntry> {
        self.abi
            .iter()
            .filter(|entry| entry.entry_type == "function" && entry.name.is_some())
    }

    pub fn function(&self, name: &str) -> Option<&AbiEntry> {
        self.functions()
            .find(|entry| entry.name.as_deref() == Some(name))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default = "default_entry_type")]
    pub entry_type: String,
    #[serde(default)]
    pub inputs: Vec<AbiInput>,
    #[serde(rename = "stateMutability", default)]
    pub state_mutability: Option<String>,
}

impl AbiEntry {
    /// Argument names in declaration order.
    pub fn input_names(&self) -> Vec<String> {
        self.inputs.iter().map(|input| input.name.clone()).collect()
    }
}

fn default_entry_type() -> String {
    "function".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiInput {
    pub name: String,
    #[serde(rename = "type", default)]
    pub value_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEntry {
    pub address: ContractAddress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_deployment_artifact() {
        let manifest: ServiceManifest = serde_json::from_value(serde_json::json!({
            "abi": [
                { "type": "constructor", "inputs": [] },
                {
                    "name": "getSchedule",
                    "type": "function",
                    "stateMutability": "view",
                    "inputs": [{ "name": "investigator", "type": "address" }]
                }
            ],
            "networks": {
                "5777": { "address": "0xDEPLOYED" }
            }
        }))
        .expect("manifest");

        assert_eq!(manifest.functions().count(), 1);
        let entry = manifest.function("getSchedule").expect("function");
        assert_eq!(entry.input_names(), vec!["investigator".to_string()]);
        assert_eq!(
            manifest.networks[&NetworkId::new("5777")].address.as_str(),
            "0xDEPLOYED"
        );
    }

    #[test]
    fn constructor_entries_are_not_functions() {
        let manifest: ServiceManifest = serde_json::from_value(serde_json::json!({
            "abi": [{ "type": "constructor", "inputs": [] }],
            "networks": {}
        }))
        .expect("manifest");

        assert!(manifest.function("anything").is_none());
    }
}
