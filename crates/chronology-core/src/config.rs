// File: crates/chronology-core/src/config.rs
// Summary: Figure configuration (axes warps, tick policy, era boundaries, label nudges) loaded from YAML.

use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Current calendar year, the default "now" of the chart.
pub fn current_year() -> f64 {
    chrono::Local::now().year() as f64
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    /// Theme preset name ("light" or "dark").
    pub theme: String,
    /// Year treated as "now"; the current year when unset.
    pub now: Option<f64>,
    pub x: XAxisConfig,
    pub y: YAxisConfig,
    /// Era boundaries before now, descending; defaults to the standard origin list. Now itself is always prepended.
    pub past_eras: Option<Vec<f64>>,
    /// Era boundaries after now, ascending, not including now itself.
    pub future_eras: Vec<f64>,
    /// Hand-tuned label offsets applied after drawing.
    pub nudges: Vec<Nudge>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct XAxisConfig {
    pub label: String,
    pub linear_widths: Vec<f64>,
    /// Major tick years; the past era boundaries when unset.
    pub major_ticks: Option<Vec<f64>>,
    pub minor_step: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct YAxisConfig {
    pub label: String,
    pub linear_widths: Vec<f64>,
    /// Linear width the tick locators assume (independent of the axis warp).
    pub locator_linear_width: f64,
    pub numticks: usize,
    pub symthresh: f64,
    pub base: u32,
    pub minor_subs: Vec<f64>,
    /// Decimal places of the engineering-notation labels.
    pub label_places: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Nudge {
    pub text: String,
    /// Screen pixels, y up.
    pub offset: [f32; 2],
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            theme: "light".to_string(),
            now: None,
            x: XAxisConfig::default(),
            y: YAxisConfig::default(),
            past_eras: None,
            future_eras: vec![2100.0, 2500.0, 3000.0, 5000.0, 10_000.0, 100_000.0],
            nudges: Vec::new(),
        }
    }
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self {
            label: "Released".to_string(),
            linear_widths: vec![50.0, 20.0],
            major_ticks: None,
            minor_step: 20.0,
        }
    }
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            label: "Setting - Released".to_string(),
            linear_widths: vec![100.0, 20.0],
            locator_linear_width: 20.0,
            numticks: 11,
            symthresh: 0.2,
            base: 10,
            minor_subs: vec![2.0, 4.0, 6.0, 8.0],
            label_places: 0,
        }
    }
}

impl ChartConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_yaml_str(&std::fs::read_to_string(path)?)
    }

    pub fn now(&self) -> f64 {
        self.now.unwrap_or_else(current_year)
    }

    /// Past boundaries, starting at now.
    pub fn past_eras(&self) -> Vec<f64> {
        const DEFAULT: [f64; 10] = [2020.0, 2000.0, 1960.0, 1900.0, 1800.0, 1600.0, 1300.0, 600.0, 0.0, -2000.0];
        let now = self.now();
        let eras = self.past_eras.as_deref().unwrap_or(&DEFAULT);
        std::iter::once(now).chain(eras.iter().copied().filter(|&y| y < now)).collect()
    }

    /// Future boundaries, starting at now.
    pub fn future_eras(&self) -> Vec<f64> {
        let now = self.now();
        std::iter::once(now).chain(self.future_eras.iter().copied().filter(|&y| y > now)).collect()
    }

    pub fn x_major_ticks(&self) -> Vec<f64> {
        self.x.major_ticks.clone().unwrap_or_else(|| self.past_eras())
    }
}
