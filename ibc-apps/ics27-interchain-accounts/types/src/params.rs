//! Defines the parameters of the interchain accounts application

/// Toggles the controller and host halves of the application.
#[cfg_attr(
    feature = "parity-scale-codec",
    derive(
        parity_scale_codec::Encode,
        parity_scale_codec::Decode,
        scale_info::TypeInfo
    )
)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Whether the chain may open channels as an interchain accounts controller.
    pub controller_enabled: bool,
    /// Whether the chain may host interchain accounts.
    pub host_enabled: bool,
}

impl Params {
    pub fn new(controller_enabled: bool, host_enabled: bool) -> Self {
        Self {
            controller_enabled,
            host_enabled,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Request type of the parameterless params query.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParamsRequest;

/// Response type of the params query.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParamsResponse {
    pub params: Params,
}
