use std::collections::HashMap;

use shared::{
    domain::{ContractAddress, NetworkId, OpMode},
    manifest::ServiceManifest,
    units::Amount,
};
use tracing::info;

use crate::error::ClientError;

/// Fixed appointment booking fee: 0.01 native units, expressed in base
/// units so value attachment is exact.
pub const BOOKING_FEE: Amount = Amount::from_base_units(10_000_000_000_000_000);

/// The business operations the dispatcher may invoke, with their modes
/// and fixed fees. Argument names and order come from the manifest abi;
/// this table owns only what the manifest cannot express.
const OPERATIONS: &[(&str, OpMode, Option<Amount>)] = &[
    ("registerUser", OpMode::Write, None),
    ("addMissingPerson", OpMode::Write, None),
    ("assignInvestigator", OpMode::Write, None),
    ("updateStatus", OpMode::Write, None),
    ("searchByDivision", OpMode::Read, None),
    ("getSchedule", OpMode::Read, None),
    ("bookAppointment", OpMode::PayableWrite, Some(BOOKING_FEE)),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: String,
    pub arg_names: Vec<String>,
    pub mode: OpMode,
    pub fixed_value: Option<Amount>,
}

/// Pairs the resolved deployment address with the typed operation
/// descriptors. Immutable once resolved; reused for every call in the
/// session.
#[derive(Debug, Clone)]
pub struct ServiceBinding {
    network_id: NetworkId,
    address: ContractAddress,
    operations: HashMap<String, OperationDescriptor>,
}

impl ServiceBinding {
    /// Selects a deployment target from the manifest and merges its abi
    /// with the local operation table.
    ///
    /// Policy: the first entry of the network mapping, since only one
    /// deployment target is expected per manifest. A business operation
    /// absent from the abi is a deployment mistake and fails resolution
    /// here rather than at invoke time.
    pub fn resolve(manifest: &ServiceManifest) -> Result<Self, ClientError> {
        let (network_id, entry) = manifest.networks.iter().next().ok_or_else(|| {
            ClientError::ManifestMalformed("manifest lists no deployed networks".to_string())
        })?;

        let mut operations = HashMap::with_capacity(OPERATIONS.len());
        for &(name, mode, fixed_value) in OPERATIONS {
            let abi_entry = manifest.function(name).ok_or_else(|| {
                ClientError::ManifestMalformed(format!(
                    "operation '{name}' is missing from the manifest abi"
                ))
            })?;
            operations.insert(
                name.to_string(),
                OperationDescriptor {
                    name: name.to_string(),
                    arg_names: abi_entry.input_names(),
                    mode,
                    fixed_value,
                },
            );
        }

        info!(
            network_id = %network_id,
            address = %entry.address,
            operations = operations.len(),
            "service binding resolved"
        );
        Ok(Self {
            network_id: network_id.clone(),
            address: entry.address.clone(),
            operations,
        })
    }

    pub fn network_id(&self) -> &NetworkId {
        &self.network_id
    }

    pub fn address(&self) -> &ContractAddress {
        &self.address
    }

    pub fn descriptor(&self, operation: &str) -> Option<&OperationDescriptor> {
        self.operations.get(operation)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.values()
    }
}
