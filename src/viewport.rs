use serde::{Deserialize, Serialize};

/// Browser window size used while prerendering, in CSS pixels.
///
/// Values are taken as configured; nothing here rejects zero or negative
/// sizes. Use [`ViewportConfig::dimensions`] to get a size a browser accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: i64,
    pub height: i64,
}

impl ViewportConfig {
    /// Both dimensions as `u32`, or `None` if either is non-positive or too large.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let width = u32::try_from(self.width).ok().filter(|w| *w > 0)?;
        let height = u32::try_from(self.height).ok().filter(|h| *h > 0)?;
        Some((width, height))
    }
}

impl std::fmt::Display for ViewportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_positive() {
        let vp = ViewportConfig {
            width: 1440,
            height: 900,
        };
        assert_eq!(vp.dimensions(), Some((1440, 900)));
    }

    #[test]
    fn test_dimensions_zero_or_negative() {
        assert_eq!(ViewportConfig::default().dimensions(), None);
        let vp = ViewportConfig {
            width: -1,
            height: 900,
        };
        assert_eq!(vp.dimensions(), None);
        let vp = ViewportConfig {
            width: 1440,
            height: 0,
        };
        assert_eq!(vp.dimensions(), None);
    }

    #[test]
    fn test_dimensions_overflow() {
        let vp = ViewportConfig {
            width: i64::from(u32::MAX) + 1,
            height: 900,
        };
        assert_eq!(vp.dimensions(), None);
    }

    #[test]
    fn test_display() {
        let vp = ViewportConfig {
            width: 1920,
            height: 1080,
        };
        assert_eq!(format!("{}", vp), "1920x1080");
    }

    #[test]
    fn test_partial_document_defaults_missing_side() {
        let vp: ViewportConfig = serde_yaml::from_str("width: 1280\n").unwrap();
        assert_eq!(vp.width, 1280);
        assert_eq!(vp.height, 0);
    }
}
