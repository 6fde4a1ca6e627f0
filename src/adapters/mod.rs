/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports, integrating with the
/// ClearlyDefined API, the file system and the console.
pub mod outbound;
