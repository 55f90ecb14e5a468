use serde::{Deserialize, Serialize};

use crate::consts::YEAR_WINDOW_LEN;
use crate::types::Year;

/// How the popover lets the user choose a year. Selected once at
/// configuration time; the picker dispatches on the resulting strategy
/// rather than re-deciding per render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearPickerMode {
    /// Collapsed year button that expands into a 12-year decade grid
    #[default]
    Decade,
    /// Single-choice list of every year between the configured bounds
    Scroll,
    /// 12-year window centered near the displayed year ("dynamic" on the wire)
    #[serde(rename = "dynamic")]
    Sliding,
}

impl YearPickerMode {
    /// Resolves a configuration keyword. Unrecognized or absent names fall
    /// back to the decade strategy.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("scroll") => Self::Scroll,
            Some("dynamic") => Self::Sliding,
            _ => Self::Decade,
        }
    }
}

/// Year-selection strategy state. Decade carries the only persistent
/// sub-state (grid start and expansion); Scroll carries its bounds; Sliding
/// is always recomputed from the displayed year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearPicker {
    Decade { decade_start: i32, expanded: bool },
    Scroll { year_min: i32, year_max: i32 },
    Sliding,
}

/// Render-relevant data for the active strategy, derived per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearPickerView {
    /// Single button showing the displayed year
    DecadeCollapsed { year: i32 },
    /// 12-year grid plus its header label data (`start` through `end`)
    DecadeExpanded {
        start: i32,
        end: i32,
        years: [i32; YEAR_WINDOW_LEN],
    },
    /// Every year between the bounds, empty when the bounds are inverted
    Scroll { years: Vec<i32> },
    /// Fixed window: 6 years before through 5 after the displayed year
    Sliding { years: [i32; YEAR_WINDOW_LEN] },
}

impl YearPicker {
    /// Builds the strategy for `mode`. The decade grid start is derived from
    /// the year displayed at construction and then persists for the picker's
    /// lifetime, surviving expand/collapse cycles.
    pub fn new(mode: YearPickerMode, current_year: Year, year_min: i32, year_max: i32) -> Self {
        match mode {
            YearPickerMode::Decade => Self::Decade {
                decade_start: current_year.decade_start(),
                expanded: false,
            },
            YearPickerMode::Scroll => Self::Scroll { year_min, year_max },
            YearPickerMode::Sliding => Self::Sliding,
        }
    }

    /// The mode this strategy was built for
    pub const fn mode(&self) -> YearPickerMode {
        match self {
            Self::Decade { .. } => YearPickerMode::Decade,
            Self::Scroll { .. } => YearPickerMode::Scroll,
            Self::Sliding => YearPickerMode::Sliding,
        }
    }

    /// View data for the active strategy given the currently displayed year
    pub fn view(&self, current_year: Year) -> YearPickerView {
        match *self {
            Self::Decade {
                expanded: false, ..
            } => YearPickerView::DecadeCollapsed {
                year: i32::from(current_year.get()),
            },
            Self::Decade {
                decade_start,
                expanded: true,
            } => YearPickerView::DecadeExpanded {
                start: decade_start,
                end: decade_start + (YEAR_WINDOW_LEN as i32 - 1),
                years: window(decade_start),
            },
            Self::Scroll { year_min, year_max } => YearPickerView::Scroll {
                years: (year_min..=year_max).collect(),
            },
            Self::Sliding => YearPickerView::Sliding {
                years: window(i32::from(current_year.get()) - 6),
            },
        }
    }

    /// Reveals the decade grid; no-op for the other strategies
    pub fn expand(&mut self) {
        if let Self::Decade { expanded, .. } = self {
            *expanded = true;
        }
    }

    /// Hides the decade grid; no-op for the other strategies
    pub fn collapse(&mut self) {
        if let Self::Decade { expanded, .. } = self {
            *expanded = false;
        }
    }

    /// Shifts the decade grid ten years back. Deliberately unclamped: decade
    /// browsing ignores the configured year bounds.
    pub fn prev_decade(&mut self) {
        if let Self::Decade { decade_start, .. } = self {
            *decade_start = decade_start.saturating_sub(10);
        }
    }

    /// Shifts the decade grid ten years forward, unclamped like `prev_decade`
    pub fn next_decade(&mut self) {
        if let Self::Decade { decade_start, .. } = self {
            *decade_start = decade_start.saturating_add(10);
        }
    }

    /// Attempts to select `year`, returning the accepted year. Each strategy
    /// accepts exactly the years its view presents; everything else is a
    /// silent no-op. A decade selection collapses the grid.
    pub fn select(&mut self, year: i32, current_year: Year) -> Option<Year> {
        let accepted = match *self {
            Self::Decade {
                decade_start,
                expanded,
            } => {
                expanded && (decade_start..decade_start + YEAR_WINDOW_LEN as i32).contains(&year)
            }
            Self::Scroll { year_min, year_max } => (year_min..=year_max).contains(&year),
            Self::Sliding => {
                let current = i32::from(current_year.get());
                (current - 6..=current + 5).contains(&year)
            }
        };
        if !accepted {
            return None;
        }

        let year = Year::new(u16::try_from(year).ok()?).ok()?;
        self.collapse();
        Some(year)
    }
}

/// Twelve consecutive years starting at `start`
fn window(start: i32) -> [i32; YEAR_WINDOW_LEN] {
    let mut years = [0; YEAR_WINDOW_LEN];
    for (offset, slot) in years.iter_mut().enumerate() {
        *slot = start + offset as i32;
    }
    years
}
