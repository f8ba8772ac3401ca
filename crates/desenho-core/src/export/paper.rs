//! Output format and paper size selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Encoded file format of a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }

    /// Whether the encoded file can carry transparency.
    pub fn has_alpha(self) -> bool {
        matches!(self, ExportFormat::Png)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            _ => Err(UnknownOption {
                kind: "format",
                value: s.to_string(),
            }),
        }
    }
}

/// Print size the download is scaled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// Keep the source dimensions.
    #[default]
    Original,
    A4,
    A5,
}

impl PaperSize {
    /// A4 portrait width at 300 DPI (210 mm).
    pub const A4_WIDTH_PX: u32 = 2480;
    /// A5 portrait width at 300 DPI (148 mm).
    pub const A5_WIDTH_PX: u32 = 1748;

    /// Fixed target width, or `None` to keep the source width.
    pub fn target_width(self) -> Option<u32> {
        match self {
            PaperSize::Original => None,
            PaperSize::A4 => Some(Self::A4_WIDTH_PX),
            PaperSize::A5 => Some(Self::A5_WIDTH_PX),
        }
    }

    /// Surface dimensions for a source of `width` x `height`.
    ///
    /// The height always follows from the width so the aspect ratio is kept;
    /// it is rounded to the nearest pixel and never drops below 1.
    pub fn target_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        match self.target_width() {
            None => (width, height),
            Some(target_width) => {
                if width == 0 {
                    return (target_width, 0);
                }
                let ratio = height as f64 / width as f64;
                let target_height = (target_width as f64 * ratio).round() as u32;
                (target_width, target_height.max(1))
            }
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaperSize::Original => "original",
            PaperSize::A4 => "a4",
            PaperSize::A5 => "a5",
        })
    }
}

impl FromStr for PaperSize {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(PaperSize::Original),
            "a4" => Ok(PaperSize::A4),
            "a5" => Ok(PaperSize::A5),
            _ => Err(UnknownOption {
                kind: "paper size",
                value: s.to_string(),
            }),
        }
    }
}

/// A format or paper size string that isn't one of the known options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extension_and_mime() {
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportFormat::Jpeg.extension(), "jpeg");
        assert_eq!(ExportFormat::Png.mime_type(), "image/png");
        assert_eq!(ExportFormat::Jpeg.mime_type(), "image/jpeg");
        assert!(ExportFormat::Png.has_alpha());
        assert!(!ExportFormat::Jpeg.has_alpha());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("png".parse::<ExportFormat>(), Ok(ExportFormat::Png));
        assert_eq!("JPG".parse::<ExportFormat>(), Ok(ExportFormat::Jpeg));
        assert_eq!(" jpeg ".parse::<ExportFormat>(), Ok(ExportFormat::Jpeg));
        assert!("webp".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_paper_from_str() {
        assert_eq!("original".parse::<PaperSize>(), Ok(PaperSize::Original));
        assert_eq!("A4".parse::<PaperSize>(), Ok(PaperSize::A4));
        assert_eq!("a5".parse::<PaperSize>(), Ok(PaperSize::A5));

        let err = "letter".parse::<PaperSize>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown paper size: \"letter\"");
    }

    #[test]
    fn test_original_keeps_dimensions() {
        assert_eq!(PaperSize::Original.target_dimensions(1000, 1333), (1000, 1333));
        assert_eq!(PaperSize::Original.target_dimensions(1, 1), (1, 1));
    }

    #[test]
    fn test_a4_from_three_by_four_source() {
        // 2480 * 1333 / 1000 = 3305.84
        assert_eq!(PaperSize::A4.target_dimensions(1000, 1333), (2480, 3306));
    }

    #[test]
    fn test_a5_from_three_by_four_source() {
        // 1748 * 4 / 3 = 2330.67
        assert_eq!(PaperSize::A5.target_dimensions(768, 1024), (1748, 2331));
    }

    #[test]
    fn test_wide_source_never_zero_height() {
        assert_eq!(PaperSize::A5.target_dimensions(100_000, 1), (1748, 1));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for paper in [PaperSize::Original, PaperSize::A4, PaperSize::A5] {
            assert_eq!(paper.to_string().parse::<PaperSize>(), Ok(paper));
        }
        for format in [ExportFormat::Png, ExportFormat::Jpeg] {
            assert_eq!(format.to_string().parse::<ExportFormat>(), Ok(format));
        }
    }
}
