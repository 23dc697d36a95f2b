/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the organization API, SPDX,
/// ClearlyDefined and the local filesystem.
pub mod outbound;
