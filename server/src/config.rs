/// Maximum JSON body size for the contact route, in bytes
pub const MAX_JSON_SIZE: u64 = 32 * 1024;

/// Maximum multipart body size for the career route, in bytes.
/// Sized for a resume upload.
pub const MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;
