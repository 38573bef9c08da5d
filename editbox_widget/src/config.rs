//! Edit box configuration and layout

use std::num::NonZeroUsize;

use editbox_core::{EditMode, Style};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Rect;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bounds {width} columns wide leave no room for text")]
    ZeroWidth { width: usize },

    #[error("bounds {height} rows tall leave no room for text")]
    ZeroHeight { height: usize },

    #[error("bounds at ({left}, {top}) sized {width}x{height} exceed the addressable screen")]
    BoundsOverflow {
        left: usize,
        top: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Config result
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Construction parameters for an edit box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBoxConfig {
    pub bounds: Rect,
    /// Initial text; an empty document when absent
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mode: EditMode,
    /// Draw a one-cell frame around the text
    #[serde(default)]
    pub border: bool,
    #[serde(default)]
    pub text_style: Style,
}

impl EditBoxConfig {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            text: None,
            mode: EditMode::Command,
            border: false,
            text_style: Style::DEFAULT,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_mode(mut self, mode: EditMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn with_text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the geometry and resolve where text and status go
    pub fn validate(&self) -> ConfigResult<Layout> {
        Layout::resolve(self.bounds, self.border)
    }
}

/// Resolved placement of the text area and status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left cell of the text area
    pub left: usize,
    pub top: usize,
    /// Characters per visual row
    pub text_width: NonZeroUsize,
    /// Visual rows shown at once
    pub view_height: NonZeroUsize,
    /// Screen row of the status line
    pub status_row: usize,
}

impl Layout {
    /// Lay out text inside `bounds`.
    ///
    /// A border takes one cell per side. When at least two rows remain the
    /// last one is kept for the status line; a single row is shared.
    pub fn resolve(bounds: Rect, border: bool) -> ConfigResult<Self> {
        if bounds.left.checked_add(bounds.width).is_none()
            || bounds.top.checked_add(bounds.height).is_none()
        {
            return Err(ConfigError::BoundsOverflow {
                left: bounds.left,
                top: bounds.top,
                width: bounds.width,
                height: bounds.height,
            });
        }

        let inner = if border { bounds.inset(1) } else { bounds };

        let text_width = NonZeroUsize::new(inner.width).ok_or(ConfigError::ZeroWidth {
            width: bounds.width,
        })?;
        if inner.height == 0 {
            return Err(ConfigError::ZeroHeight {
                height: bounds.height,
            });
        }

        let status_row = inner.bottom() - 1;
        let rows = if inner.height >= 2 {
            inner.height - 1
        } else {
            inner.height
        };
        let view_height = NonZeroUsize::new(rows).ok_or(ConfigError::ZeroHeight {
            height: bounds.height,
        })?;

        Ok(Self {
            left: inner.left,
            top: inner.top,
            text_width,
            view_height,
            status_row,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_layout_reserves_status_row() {
        let layout = Layout::resolve(Rect::new(2, 6, 30, 10), false).unwrap();
        assert_eq!((layout.left, layout.top), (2, 6));
        assert_eq!(layout.text_width.get(), 30);
        assert_eq!(layout.view_height.get(), 9);
        assert_eq!(layout.status_row, 15);
    }

    #[test]
    fn test_bordered_layout() {
        let layout = Layout::resolve(Rect::new(2, 6, 30, 10), true).unwrap();
        assert_eq!((layout.left, layout.top), (3, 7));
        assert_eq!(layout.text_width.get(), 28);
        assert_eq!(layout.view_height.get(), 7);
        assert_eq!(layout.status_row, 14);
    }

    #[test]
    fn test_single_row_shares_status() {
        let layout = Layout::resolve(Rect::new(0, 3, 5, 1), false).unwrap();
        assert_eq!(layout.view_height.get(), 1);
        assert_eq!(layout.status_row, 3);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = Layout::resolve(Rect::new(0, 0, 0, 4), false).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroWidth { width: 0 }));

        let err = Layout::resolve(Rect::new(0, 0, 2, 4), true).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroWidth { width: 2 }));
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = Layout::resolve(Rect::new(0, 0, 4, 0), false).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroHeight { height: 0 }));

        let err = Layout::resolve(Rect::new(0, 0, 4, 2), true).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroHeight { height: 2 }));
    }

    #[test]
    fn test_builder() {
        let config = EditBoxConfig::new(Rect::new(0, 0, 10, 3))
            .with_text("hi")
            .with_mode(EditMode::Insert)
            .with_border(true);
        assert_eq!(config.text.as_deref(), Some("hi"));
        assert_eq!(config.mode, EditMode::Insert);
        assert!(config.border);
    }

    #[test]
    fn test_from_json_defaults() {
        let config = EditBoxConfig::from_json(
            r#"{ "bounds": { "left": 1, "top": 2, "width": 20, "height": 5 } }"#,
        )
        .unwrap();
        assert_eq!(config, EditBoxConfig::new(Rect::new(1, 2, 20, 5)));
    }

    #[test]
    fn test_from_json_full() {
        let config = EditBoxConfig::from_json(
            r#"{
                "bounds": { "left": 0, "top": 0, "width": 8, "height": 4 },
                "text": "hello\nworld",
                "mode": "Insert",
                "border": true,
                "text_style": { "fg": "Green", "bg": { "Indexed": 236 } }
            }"#,
        )
        .unwrap();
        assert_eq!(config.text.as_deref(), Some("hello\nworld"));
        assert_eq!(config.mode, EditMode::Insert);
        assert!(config.border);
        assert_eq!(config.text_style.bg, editbox_core::Color::Indexed(236));
    }

    #[test]
    fn test_bounds_past_screen_edge_rejected() {
        let err = Layout::resolve(Rect::new(usize::MAX, 0, 5, 2), false).unwrap_err();
        assert!(matches!(err, ConfigError::BoundsOverflow { .. }));

        let config = EditBoxConfig::from_json(
            r#"{ "bounds": { "left": 0, "top": 18446744073709551615, "width": 5, "height": 2 } }"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BoundsOverflow {
                top: usize::MAX,
                height: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_bounds_ending_at_screen_edge_accepted() {
        let layout = Layout::resolve(Rect::new(usize::MAX - 5, 0, 5, 3), true).unwrap();
        assert_eq!(layout.left, usize::MAX - 4);
        assert_eq!(layout.text_width.get(), 3);
        assert_eq!(layout.status_row, 1);
    }

    #[test]
    fn test_from_json_rejects_missing_bounds() {
        let err = EditBoxConfig::from_json(r#"{ "text": "x" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
