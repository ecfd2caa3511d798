//! Application state and logic.

use std::path::PathBuf;

use crate::data::Point;
use crate::error::{PointplotError, Result};
use crate::{jitter, util};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Path of the loaded data file.
    pub file_path: PathBuf,
    /// Loaded points, translated in place once at load time.
    pub points: Vec<Point>,
    /// Original (x, y) pairs, captured by value before translation.
    pub original: Vec<(f64, f64)>,
    /// Translated (x, y) pairs.
    pub translated: Vec<(f64, f64)>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Build the application state from parsed points.
    ///
    /// Captures the original series by value, then runs the random
    /// translation pass over the points, so both the before and after
    /// series stay available for rendering.
    pub fn new(file_path: PathBuf, mut points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(PointplotError::empty_input(file_path));
        }

        let original: Vec<(f64, f64)> = points.iter().map(|p| (p.x(), p.y())).collect();

        let mut rng = rand::rng();
        jitter::translate_points(&mut points, &mut rng);

        let translated: Vec<(f64, f64)> = points.iter().map(|p| (p.x(), p.y())).collect();

        tracing::info!(
            "Loaded {} points from {}",
            points.len(),
            file_path.display()
        );

        let status = format!("{} points loaded from {}", points.len(), file_path.display());

        Ok(Self {
            file_path,
            points,
            original,
            translated,
            status,
            theme: Theme::GruvboxDark,
        })
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the point list to the clipboard.
    pub fn copy_points(&mut self) {
        let file_name = self
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());

        match util::copy_point_list(&self.points, file_name.as_deref()) {
            Ok(_) => self.status = format!("{} points copied!", self.points.len()),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Show the help line in the status bar.
    pub fn show_help(&mut self) {
        self.status = "Help: q=quit, T=theme, c=copy points, ?=help".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::MAX_OFFSET;

    #[test]
    fn empty_input_is_rejected() {
        let err = App::new(PathBuf::from("data.txt"), Vec::new()).unwrap_err();
        assert!(matches!(err, PointplotError::EmptyInput { .. }));
    }

    #[test]
    fn series_keep_positional_correspondence() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.5, -3.5),
        ];
        let app = App::new(PathBuf::from("data.txt"), points).unwrap();

        assert_eq!(app.original.len(), 3);
        assert_eq!(app.translated.len(), 3);
        assert_eq!(app.original[2], (2.5, -3.5));

        for ((ox, oy), (tx, ty)) in app.original.iter().zip(app.translated.iter()) {
            assert!(*tx >= *ox && *tx < *ox + MAX_OFFSET);
            assert!(*ty >= *oy && *ty < *oy + MAX_OFFSET);
        }
    }

    #[test]
    fn theme_cycles_through_both_palettes() {
        assert_eq!(Theme::GruvboxDark.next(), Theme::GruvboxLight);
        assert_eq!(Theme::GruvboxLight.next(), Theme::GruvboxDark);
    }
}
