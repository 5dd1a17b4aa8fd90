/// Default maximum encoded buffer size: 16 MiB.
pub const DEFAULT_MAX_BUFFER: usize = 16 * 1024 * 1024;

/// Default maximum number of integers per sequence.
pub const DEFAULT_MAX_ELEMENTS: usize = 1 << 20;

/// Limits applied by the sequence codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum size of a buffer accepted by `decode`. Default: 16 MiB.
    pub max_buffer_size: usize,
    /// Maximum number of integers encoded or decoded in one call.
    pub max_elements: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_buffer_size: DEFAULT_MAX_BUFFER,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}
