//! Utility functions for Pointplot.

use crate::clipboard;
use crate::data::Point;
use crate::error::Result;

/// Copy the point list to the clipboard.
pub fn copy_point_list(points: &[Point], file_name: Option<&str>) -> Result<()> {
    clipboard::copy_to_clipboard(&format_point_list(points, file_name))
}

/// Format the point list as plain text, one point per line.
pub fn format_point_list(points: &[Point], file_name: Option<&str>) -> String {
    let mut text = String::new();

    if let Some(name) = file_name {
        text.push_str(&format!("Point List: {}\n", name));
    } else {
        text.push_str("Point List\n");
    }

    text.push_str(&"=".repeat(80));
    text.push_str("\n\n");

    for point in points {
        text.push_str(&format!("{}\n", point));
    }

    text
}
