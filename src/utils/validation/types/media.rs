//! Registry of the file extensions the form knows about, the media types they
//! map to, and the byte-size helpers used to express upload limits.

use std::fmt;

use mime::Mime;

/// A file extension accepted somewhere in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExtension {
    Pdf,
    Doc,
    Docx,
    Txt,
    Png,
    Jpeg,
}

impl FileExtension {
    /// Returns the extension with its leading dot, as shown to users
    pub fn as_str(self) -> &'static str {
        match self {
            FileExtension::Pdf => ".pdf",
            FileExtension::Doc => ".doc",
            FileExtension::Docx => ".docx",
            FileExtension::Txt => ".txt",
            FileExtension::Png => ".png",
            FileExtension::Jpeg => ".jpeg",
        }
    }

    /// Media types a browser may declare for a file with this extension
    pub fn mime_types(self) -> &'static [&'static str] {
        match self {
            FileExtension::Pdf => &["application/pdf"],
            FileExtension::Doc => &["application/msword"],
            FileExtension::Docx => {
                &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"]
            }
            FileExtension::Txt => &["text/plain"],
            FileExtension::Png => &["image/png"],
            FileExtension::Jpeg => &["image/jpeg"],
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flattens the accepted media types of a set of extensions
pub fn mime_types_for(extensions: &[FileExtension]) -> Vec<&'static str> {
    extensions
        .iter()
        .flat_map(|ext| ext.mime_types().iter().copied())
        .collect()
}

/// Checks whether a declared media type is one of the types accepted for the
/// given extensions. Parameters such as `charset` are ignored and the
/// comparison is case-insensitive; an unparseable declaration never matches.
pub fn is_accepted_media_type(declared: &str, extensions: &[FileExtension]) -> bool {
    let Ok(mime) = declared.trim().parse::<Mime>() else {
        return false;
    };

    mime_types_for(extensions)
        .iter()
        .any(|accepted| mime.essence_str().eq_ignore_ascii_case(accepted))
}

/// Units used to express size limits. Conversions are 1024-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl SizeUnit {
    /// Converts `amount` of this unit to a number of bytes, saturating at
    /// `u64::MAX`
    pub const fn to_bytes(self, amount: u64) -> u64 {
        match self {
            SizeUnit::Bytes => amount,
            SizeUnit::Kilobytes => amount.saturating_mul(1024),
            SizeUnit::Megabytes => amount.saturating_mul(1024 * 1024),
            SizeUnit::Gigabytes => amount.saturating_mul(1024 * 1024 * 1024),
        }
    }
}

const SIZE_LABELS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Renders a byte count for humans, e.g. `10485760` becomes `"10 MB"`.
///
/// At most two decimals are kept and trailing zeros are dropped.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_LABELS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_LABELS[unit])
}
