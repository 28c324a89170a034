/// Codec names used in errors and logs.
pub mod codec_names {
    pub const ZSTD: &str = "zstd";
}

/// Zstd frame magic number (little-endian on the wire).
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];
