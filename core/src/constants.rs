/// XChaCha20-Poly1305 key length (bytes).
pub const KEY_LEN: usize = 32;

/// Extended nonce length (bytes). Wide enough to draw at random on every seal.
pub const XNONCE_LEN: usize = 24;

/// Poly1305 tag length (bytes).
pub const TAG_LEN: usize = 16;

/// Associated data bound to every envelope. Empty in wire format v1.
pub const EMPTY_AAD: &[u8] = &[];

/// Wire sentinel for "never expires".
pub const NO_EXPIRY: i64 = -1;

/// Shortest token text that can decode to a full nonce (ceil(24 * 8 / 6)).
pub const MIN_TOKEN_LEN: usize = (XNONCE_LEN * 8 + 5) / 6;

/// Defaults when SealerConfig fields are not overridden.
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// Upper bound on a decompressed envelope (1 MiB).
/// Cookies top out around 4 KiB, so anything near this is hostile.
pub const DEFAULT_MAX_DECOMPRESSED_LEN: usize = 1024 * 1024;
