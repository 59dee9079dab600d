//! Presentation data handed to plotting collaborators.
//!
//! Nothing here renders; it resolves style tags and picks tick sets so every
//! plotting backend draws the same thing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metrics::{series_max, series_min};
use crate::result::ResultRecord;

/// Stroke pattern of a plotted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    #[default]
    Solid,
    Dotted,
}

/// Resolved style of one plotted condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub dash: LineDash,
}

impl LineStyle {
    fn hidden() -> Self {
        Self {
            visible: false,
            color: None,
            dash: LineDash::Solid,
        }
    }

    fn colored(color: &str, dash: LineDash) -> Self {
        Self {
            visible: true,
            color: Some(color.to_string()),
            dash,
        }
    }
}

/// Explicit map from a condition's style tag to its line style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMap {
    styles: BTreeMap<String, LineStyle>,
}

impl Default for StyleMap {
    fn default() -> Self {
        let mut styles = BTreeMap::new();
        styles.insert("hidden".to_string(), LineStyle::hidden());
        for color in ["red", "blue", "green", "black"] {
            styles.insert(color.to_string(), LineStyle::colored(color, LineDash::Solid));
            styles.insert(
                format!("{color}-dotted"),
                LineStyle::colored(color, LineDash::Dotted),
            );
        }
        Self { styles }
    }
}

impl StyleMap {
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, tag: impl Into<String>, style: LineStyle) -> Option<LineStyle> {
        self.styles.insert(tag.into(), style)
    }

    pub fn resolve(&self, tag: &str) -> Option<&LineStyle> {
        self.styles.get(tag)
    }

    /// Legend entry for a record; hidden or unknown styles get none.
    pub fn legend_label<'a>(&self, record: &'a ResultRecord) -> Option<&'a str> {
        match self.resolve(record.style()) {
            Some(style) if style.visible => Some(record.label()),
            _ => None,
        }
    }
}

/// Radius-indexed series shown on a polar plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialSeries {
    /// Radius change against the reference's per-row radii.
    Raw,
    /// Radius change against the least-squares center.
    Corrected,
}

/// Polar tick set, chosen from the largest absolute displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialScale {
    /// Up to ±20 µm.
    Narrow,
    /// Above 20 µm, up to ±30 µm.
    Medium,
    /// Above 30 µm.
    Wide,
}

impl RadialScale {
    /// Pick the scale from the displayed (effective) series of all records.
    ///
    /// An empty record list yields [`RadialScale::Narrow`].
    pub fn for_records(records: &[ResultRecord], series: RadialSeries) -> Self {
        let max_abs = records
            .iter()
            .map(|rec| match series {
                RadialSeries::Raw => rec.effective_change_radius(),
                RadialSeries::Corrected => rec.effective_lsm_change_radius(),
            })
            .filter(|values| !values.is_empty())
            .map(|values| series_max(values).max(series_min(values).abs()))
            .fold(0.0, f64::max);
        Self::for_max_abs(max_abs)
    }

    pub fn for_max_abs(max_abs: f64) -> Self {
        if max_abs > 30.0 {
            Self::Wide
        } else if max_abs > 20.0 {
            Self::Medium
        } else {
            Self::Narrow
        }
    }

    /// Radial tick positions (µm). The first tick sets the plot's inner hole
    /// and carries an empty label.
    pub fn ticks(self) -> &'static [f64] {
        match self {
            Self::Wide => &[-250.0, -100.0, -75.0, -50.0, -25.0, 0.0, 25.0, 50.0, 75.0, 100.0],
            Self::Medium => &[-70.0, -30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0],
            Self::Narrow => &[-60.0, -20.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0],
        }
    }

    /// Labels paired with [`RadialScale::ticks`].
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Wide => &["", "-100[µm]", "-75", "-50", "-25", "0", "25", "50", "75", "100"],
            Self::Medium => &["", "-30[µm]", "-20", "-10", "0", "10", "20", "30"],
            Self::Narrow => &["", "-20[µm]", "-15", "-10", "-5", "0", "5", "10", "15", "20"],
        }
    }
}
