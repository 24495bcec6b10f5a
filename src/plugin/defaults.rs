//! Built-in identifier tables.
//!
//! Symbology identifiers are the stable names callers and configuration use.
//! Legacy identifiers are the flattened, fully-qualified names older callers
//! still send; they are derived from the symbology identifier so the two
//! schemes share one source of truth.

/// Well-known symbology identifiers.
pub const SYMBOLOGIES: &[&str] = &[
    "codabar",
    "code128",
    "code25",
    "code25interleaved",
    "code39",
    "ean13",
    "ean2",
    "ean5",
    "ean8",
    "error",
    "identcode",
    "itf14",
    "leitcode",
    "planet",
    "postnet",
    "royalmail",
    "upca",
    "upce",
];

/// Prefix of every legacy identifier.
pub const LEGACY_PREFIX: &str = "barcodeobject";

/// Vendor-qualified legacy prefix still sent by older callers.
///
/// `zendbarcodeobjectcode128` is accepted as `barcodeobjectcode128`.
pub const VENDOR_LEGACY_PREFIX: &str = "zendbarcodeobject";

/// Normalize a symbology identifier or alias: trimmed and lowercased.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Flatten a fully-qualified name to legacy form.
///
/// Lowercases and drops everything that is not ASCII alphanumeric, so
/// `Barcode::Object::Code128` and `barcode\object\code128` both become
/// `barcodeobjectcode128`.
pub fn flatten(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Legacy identifier for a symbology identifier.
pub fn legacy_identifier(symbology: &str) -> String {
    format!("{}{}", LEGACY_PREFIX, flatten(symbology))
}

/// Key a legacy name is looked up under.
///
/// Flattens `name` and rewrites the vendor-qualified prefix to
/// [`LEGACY_PREFIX`].
pub fn legacy_key(name: &str) -> String {
    let flat = flatten(name);
    match flat.strip_prefix(VENDOR_LEGACY_PREFIX) {
        Some(rest) => format!("{}{}", LEGACY_PREFIX, rest),
        None => flat,
    }
}

/// Check whether `name` is one of the well-known symbologies.
pub fn is_well_known(name: &str) -> bool {
    let name = normalize(name);
    SYMBOLOGIES.contains(&name.as_str())
}
