use crate::consts::{
    DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN, PATTERN_LEN, PATTERN_PLACEHOLDER, WEEK_LEN,
    WEEKDAY_LABELS,
};
use crate::grid::MonthCursor;
use crate::range::DateRange;
use crate::year_picker::{YearPicker, YearPickerMode, YearPickerView};
use crate::CalendarDate;

/// Construction configuration for a [`DatePicker`], mirroring the host's
/// controlled-component props. `value` is the committed selection in the
/// fixed pattern (empty = no selection); bounds that don't parse or that
/// invert are silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    pub value: String,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub disabled: bool,
    pub year_picker_mode: YearPickerMode,
    pub year_min: i32,
    pub year_max: i32,
    /// Injectable "today" for deterministic views; defaults to the system
    /// clock when absent
    pub today: Option<CalendarDate>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            value: String::new(),
            min_date: None,
            max_date: None,
            disabled: false,
            year_picker_mode: YearPickerMode::default(),
            year_min: DEFAULT_YEAR_MIN,
            year_max: DEFAULT_YEAR_MAX,
            today: None,
        }
    }
}

/// The notification a gesture produced, carrying the host's `onChange`
/// payload. The controller performs no I/O and holds no callbacks; the host
/// forwards `as_value()` wherever it keeps the committed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A new valid, in-range date was committed
    Selected(CalendarDate),
    /// The selection was cleared (invalid or out-of-range input on blur)
    Cleared,
}

impl Change {
    /// The committed selection as the host sees it: the fixed-pattern text,
    /// or the empty string for a cleared selection
    pub fn as_value(&self) -> String {
        match self {
            Self::Selected(date) => date.to_string(),
            Self::Cleared => String::new(),
        }
    }
}

/// One grid position of the derived view model. Recomputed on every
/// [`DatePicker::view`] call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
}

/// Everything a presentation layer needs to render the widget. Derived;
/// holds no authority over the picker's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    /// Raw text currently in the input field
    pub buffer: String,
    /// Hint for an empty input field
    pub placeholder: &'static str,
    pub is_open: bool,
    pub is_disabled: bool,
    /// Full month name for the popover header
    pub month_label: &'static str,
    /// Displayed year for the popover header
    pub year: u16,
    /// Sunday-first single-letter column headers
    pub weekday_labels: [&'static str; WEEK_LEN],
    /// The fixed six-week grid, 42 cells
    pub cells: Vec<DayCell>,
    pub year_picker: YearPickerView,
}

/// The date-picker controller: a small synchronous state machine over the
/// popover (open/closed), the displayed month, the raw input buffer, and the
/// committed selection. Every gesture handler runs to completion and at most
/// emits one [`Change`]; parse and range failures are handled silently by
/// clearing (fail closed, fail quiet).
#[derive(Debug, Clone)]
pub struct DatePicker {
    selected: Option<CalendarDate>,
    buffer: String,
    cursor: MonthCursor,
    range: DateRange,
    year_picker: YearPicker,
    open: bool,
    disabled: bool,
    today: CalendarDate,
}

impl DatePicker {
    pub fn new(config: PickerConfig) -> Self {
        let today = config.today.unwrap_or_else(CalendarDate::today_utc);
        let selected: Option<CalendarDate> = config.value.parse().ok();

        let min = config.min_date.as_deref().and_then(|s| s.parse().ok());
        let max = config.max_date.as_deref().and_then(|s| s.parse().ok());
        let range = DateRange::new(min, max).unwrap_or_default();

        let cursor = MonthCursor::of(selected.unwrap_or(today));
        let year_picker = YearPicker::new(
            config.year_picker_mode,
            cursor.year_typed(),
            config.year_min,
            config.year_max,
        );

        Self {
            selected,
            buffer: config.value,
            cursor,
            range,
            year_picker,
            open: false,
            disabled: config.disabled,
            today,
        }
    }

    /// The committed selection in the fixed pattern; empty when none
    pub fn value(&self) -> String {
        self.selected.map(|d| d.to_string()).unwrap_or_default()
    }

    /// The committed selection, if any
    pub const fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Raw text currently in the input field
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The displayed month, independent of the selection
    pub const fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// The configured selectable range
    pub const fn range(&self) -> DateRange {
        self.range
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Host write-back for the controlled `value` prop: replaces the buffer
    /// and the committed selection, and moves the displayed month to the new
    /// value's month when it parses
    pub fn set_value(&mut self, value: &str) {
        self.selected = value.parse().ok();
        self.buffer = value.to_owned();
        if let Some(date) = self.selected {
            self.cursor = MonthCursor::of(date);
        }
    }

    /// Input path: replaces the buffer with the field's current text. Once
    /// the text reaches the full pattern width and names a selectable date,
    /// the selection is committed. Partial or invalid text is not yet
    /// actionable and produces nothing.
    pub fn input(&mut self, text: &str) -> Option<Change> {
        if self.disabled {
            return None;
        }
        self.buffer = text.to_owned();
        if self.buffer.len() != PATTERN_LEN {
            return None;
        }
        let date: CalendarDate = self.buffer.parse().ok()?;
        if !self.range.is_selectable(date) {
            return None;
        }
        Some(self.commit(date))
    }

    /// Blur path: strict accept-or-clear. A buffer that fails to parse or
    /// parses out of range clears both the buffer and the committed
    /// selection and closes the popover; a valid buffer changes nothing
    /// (it was committed while typing).
    pub fn blur(&mut self) -> Option<Change> {
        if self.disabled {
            return None;
        }
        match self.buffer.parse::<CalendarDate>() {
            Ok(date) if self.range.is_selectable(date) => None,
            _ => {
                self.buffer.clear();
                self.selected = None;
                self.open = false;
                Some(Change::Cleared)
            }
        }
    }

    /// Grid-cell click: commits the cell's date if it is selectable, syncs
    /// the buffer, and closes the popover
    pub fn click_day(&mut self, date: CalendarDate) -> Option<Change> {
        if self.disabled || !self.range.is_selectable(date) {
            return None;
        }
        let change = self.commit(date);
        self.buffer = date.to_string();
        self.open = false;
        Some(change)
    }

    /// Shows the previous month; never touches the committed selection
    pub fn prev_month(&mut self) {
        if !self.disabled {
            self.cursor = self.cursor.shift(-1);
        }
    }

    /// Shows the next month; never touches the committed selection
    pub fn next_month(&mut self) {
        if !self.disabled {
            self.cursor = self.cursor.shift(1);
        }
    }

    /// Calendar-icon toggle for the popover
    pub fn toggle_popover(&mut self) {
        if self.disabled {
            return;
        }
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        if !self.disabled {
            self.open = true;
        }
    }

    /// Closes the popover. Also the capability the host's outside-click
    /// dismissal handling calls.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Reveals the decade grid (decade strategy only)
    pub fn expand_years(&mut self) {
        if !self.disabled {
            self.year_picker.expand();
        }
    }

    /// Hides the decade grid (decade strategy only)
    pub fn collapse_years(&mut self) {
        self.year_picker.collapse();
    }

    pub fn prev_decade(&mut self) {
        if !self.disabled {
            self.year_picker.prev_decade();
        }
    }

    pub fn next_decade(&mut self) {
        if !self.disabled {
            self.year_picker.next_decade();
        }
    }

    /// Year click: moves the displayed month to (year, same month) when the
    /// active strategy accepts the year. The committed selection is
    /// untouched.
    pub fn select_year(&mut self, year: i32) {
        if self.disabled {
            return;
        }
        if let Some(accepted) = self.year_picker.select(year, self.cursor.year_typed()) {
            if let Some(cursor) = self.cursor.with_year(i32::from(accepted.get())) {
                self.cursor = cursor;
            }
        }
    }

    /// Derives the render view model from the current state
    pub fn view(&self) -> PickerView {
        let cells = self
            .cursor
            .build_grid()
            .into_iter()
            .map(|date| DayCell {
                date,
                in_current_month: self.cursor.contains(&date),
                is_today: date == self.today,
                is_selected: self.selected == Some(date),
                is_disabled: self.disabled || !self.range.is_selectable(date),
            })
            .collect();

        PickerView {
            buffer: self.buffer.clone(),
            placeholder: PATTERN_PLACEHOLDER,
            is_open: self.open,
            is_disabled: self.disabled,
            month_label: self.cursor.month_name(),
            year: self.cursor.year(),
            weekday_labels: WEEKDAY_LABELS,
            cells,
            year_picker: self.year_picker.view(self.cursor.year_typed()),
        }
    }

    fn commit(&mut self, date: CalendarDate) -> Change {
        self.selected = Some(date);
        self.cursor = MonthCursor::of(date);
        Change::Selected(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GRID_LEN;

    fn date(text: &str) -> CalendarDate {
        text.parse().unwrap()
    }

    fn picker(config: PickerConfig) -> DatePicker {
        DatePicker::new(PickerConfig {
            today: Some(date("03/07/2024")),
            ..config
        })
    }

    #[test]
    fn test_initial_state_empty_value() {
        let p = picker(PickerConfig::default());
        assert_eq!(p.selected(), None);
        assert_eq!(p.value(), "");
        assert_eq!(p.buffer(), "");
        assert!(!p.is_open());
        // Cursor starts at today's month when there is no selection
        assert_eq!(p.cursor().year(), 2024);
        assert_eq!(p.cursor().month(), 3);
    }

    #[test]
    fn test_initial_state_with_value() {
        let p = picker(PickerConfig {
            value: "11/22/1987".to_owned(),
            ..PickerConfig::default()
        });
        assert_eq!(p.selected(), Some(date("11/22/1987")));
        assert_eq!(p.value(), "11/22/1987");
        assert_eq!(p.buffer(), "11/22/1987");
        assert_eq!(p.cursor().year(), 1987);
        assert_eq!(p.cursor().month(), 11);
    }

    #[test]
    fn test_typing_commits_on_full_valid_input() {
        let mut p = picker(PickerConfig::default());

        // Partial input is not yet actionable
        for partial in ["0", "03", "03/", "03/1", "03/15/2", "03/15/202"] {
            assert_eq!(p.input(partial), None);
            assert_eq!(p.selected(), None);
        }

        let change = p.input("03/15/2024");
        assert_eq!(change, Some(Change::Selected(date("03/15/2024"))));
        assert_eq!(change.map(|c| c.as_value()), Some("03/15/2024".to_owned()));
        assert_eq!(p.value(), "03/15/2024");
    }

    #[test]
    fn test_malformed_input_cleared_on_blur() {
        let mut p = picker(PickerConfig::default());

        // Month 13 does not exist: full-width input commits nothing...
        assert_eq!(p.input("13/01/2024"), None);
        assert_eq!(p.selected(), None);

        // ...and blur applies the accept-or-clear policy
        let change = p.blur();
        assert_eq!(change, Some(Change::Cleared));
        assert_eq!(change.map(|c| c.as_value()), Some(String::new()));
        assert_eq!(p.buffer(), "");
        assert_eq!(p.value(), "");
    }

    #[test]
    fn test_out_of_range_input_cleared_on_blur() {
        let mut p = picker(PickerConfig {
            min_date: Some("01/01/2020".to_owned()),
            ..PickerConfig::default()
        });

        // Parses fine but falls below the minimum bound
        assert_eq!(p.input("12/31/2019"), None);
        assert_eq!(p.selected(), None);

        assert_eq!(p.blur(), Some(Change::Cleared));
        assert_eq!(p.buffer(), "");
    }

    #[test]
    fn test_blur_with_valid_buffer_changes_nothing() {
        let mut p = picker(PickerConfig::default());
        assert!(p.input("03/15/2024").is_some());
        assert_eq!(p.blur(), None);
        assert_eq!(p.value(), "03/15/2024");
        assert_eq!(p.buffer(), "03/15/2024");
    }

    #[test]
    fn test_blur_with_empty_buffer_still_clears() {
        let mut p = picker(PickerConfig::default());
        assert_eq!(p.blur(), Some(Change::Cleared));
    }

    #[test]
    fn test_blur_closes_popover_on_invalid_input() {
        let mut p = picker(PickerConfig::default());
        p.toggle_popover();
        assert!(p.is_open());
        assert_eq!(p.input("02/30/2024"), None);
        assert_eq!(p.blur(), Some(Change::Cleared));
        assert!(!p.is_open());
    }

    #[test]
    fn test_click_day_commits_and_closes() {
        let mut p = picker(PickerConfig::default());
        p.open();

        let change = p.click_day(date("07/04/2024"));
        assert_eq!(change, Some(Change::Selected(date("07/04/2024"))));
        assert_eq!(change.map(|c| c.as_value()), Some("07/04/2024".to_owned()));
        assert!(!p.is_open());
        assert_eq!(p.buffer(), "07/04/2024");
        assert_eq!(p.cursor().month(), 7);
    }

    #[test]
    fn test_click_disabled_day_is_noop() {
        let mut p = picker(PickerConfig {
            max_date: Some("12/31/2030".to_owned()),
            ..PickerConfig::default()
        });
        p.open();

        assert_eq!(p.click_day(date("01/01/2031")), None);
        assert_eq!(p.selected(), None);
        assert!(p.is_open());
    }

    #[test]
    fn test_month_navigation_preserves_selection() {
        let mut p = picker(PickerConfig {
            value: "03/15/2024".to_owned(),
            ..PickerConfig::default()
        });

        p.next_month();
        assert_eq!(p.cursor().month(), 4);
        p.prev_month();
        p.prev_month();
        assert_eq!(p.cursor().month(), 2);
        assert_eq!(p.selected(), Some(date("03/15/2024")));
    }

    #[test]
    fn test_popover_toggle_open_close() {
        let mut p = picker(PickerConfig::default());
        assert!(!p.is_open());
        p.toggle_popover();
        assert!(p.is_open());
        p.toggle_popover();
        assert!(!p.is_open());
        p.open();
        p.close();
        assert!(!p.is_open());
    }

    #[test]
    fn test_disabled_picker_ignores_gestures() {
        let mut p = picker(PickerConfig {
            disabled: true,
            ..PickerConfig::default()
        });

        assert_eq!(p.input("03/15/2024"), None);
        assert_eq!(p.blur(), None);
        assert_eq!(p.click_day(date("03/15/2024")), None);
        p.toggle_popover();
        p.open();
        assert!(!p.is_open());
        p.next_month();
        assert_eq!(p.cursor().month(), 3);
        assert_eq!(p.selected(), None);
    }

    #[test]
    fn test_invalid_bounds_are_dropped() {
        // Unparseable min and inverted bounds both degrade to unbounded
        let p = picker(PickerConfig {
            min_date: Some("tomorrow".to_owned()),
            max_date: Some("garbage".to_owned()),
            ..PickerConfig::default()
        });
        assert_eq!(p.range(), DateRange::unbounded());

        let p = picker(PickerConfig {
            min_date: Some("12/31/2030".to_owned()),
            max_date: Some("01/01/2020".to_owned()),
            ..PickerConfig::default()
        });
        assert_eq!(p.range(), DateRange::unbounded());
    }

    #[test]
    fn test_set_value_moves_cursor() {
        let mut p = picker(PickerConfig::default());
        p.set_value("06/15/1999");
        assert_eq!(p.selected(), Some(date("06/15/1999")));
        assert_eq!(p.buffer(), "06/15/1999");
        assert_eq!(p.cursor().year(), 1999);
        assert_eq!(p.cursor().month(), 6);

        // An unparseable write-back clears the selection but keeps the text
        p.set_value("nonsense");
        assert_eq!(p.selected(), None);
        assert_eq!(p.buffer(), "nonsense");
        assert_eq!(p.cursor().year(), 1999);
    }

    #[test]
    fn test_view_cells() {
        let p = picker(PickerConfig {
            value: "03/15/2024".to_owned(),
            min_date: Some("03/01/2024".to_owned()),
            max_date: Some("03/31/2024".to_owned()),
            ..PickerConfig::default()
        });
        let view = p.view();

        assert_eq!(view.cells.len(), GRID_LEN);
        assert_eq!(view.month_label, "March");
        assert_eq!(view.year, 2024);
        assert_eq!(view.weekday_labels, ["S", "M", "T", "W", "T", "F", "S"]);
        assert_eq!(view.placeholder, "MM/DD/YYYY");

        let selected: Vec<_> = view.cells.iter().filter(|c| c.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date("03/15/2024"));

        let today: Vec<_> = view.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date("03/07/2024"));

        assert_eq!(view.cells.iter().filter(|c| c.in_current_month).count(), 31);

        // With bounds covering exactly March, the padding cells from
        // February and April are the disabled ones
        for cell in &view.cells {
            assert_eq!(cell.is_disabled, !cell.in_current_month);
        }
    }

    #[test]
    fn test_view_all_cells_disabled_when_picker_disabled() {
        let p = picker(PickerConfig {
            disabled: true,
            ..PickerConfig::default()
        });
        let view = p.view();
        assert!(view.is_disabled);
        assert!(view.cells.iter().all(|c| c.is_disabled));
    }

    #[test]
    fn test_decade_flow_through_controller() {
        let mut p = picker(PickerConfig::default());
        assert!(matches!(
            p.view().year_picker,
            YearPickerView::DecadeCollapsed { year: 2024 }
        ));

        p.expand_years();
        assert!(matches!(
            p.view().year_picker,
            YearPickerView::DecadeExpanded { start: 2020, .. }
        ));

        p.select_year(2027);
        assert_eq!(p.cursor().year(), 2027);
        assert_eq!(p.cursor().month(), 3);
        assert!(matches!(
            p.view().year_picker,
            YearPickerView::DecadeCollapsed { year: 2027 }
        ));
        // Year navigation never touches the committed selection
        assert_eq!(p.selected(), None);
    }

    #[test]
    fn test_scroll_mode_presents_configured_years() {
        let mut p = picker(PickerConfig {
            value: "06/15/2003".to_owned(),
            year_picker_mode: YearPickerMode::Scroll,
            year_min: 2000,
            year_max: 2005,
            ..PickerConfig::default()
        });

        match p.view().year_picker {
            YearPickerView::Scroll { years } => {
                assert_eq!(years, vec![2000, 2001, 2002, 2003, 2004, 2005]);
            }
            other => panic!("expected scroll view, got {other:?}"),
        }

        p.select_year(2005);
        assert_eq!(p.cursor().year(), 2005);
        p.select_year(2006);
        assert_eq!(p.cursor().year(), 2005);
    }

    #[test]
    fn test_sliding_mode_recenters_after_selection() {
        let mut p = picker(PickerConfig {
            value: "06/15/2024".to_owned(),
            year_picker_mode: YearPickerMode::Sliding,
            ..PickerConfig::default()
        });

        match p.view().year_picker {
            YearPickerView::Sliding { years } => assert_eq!(years[0], 2018),
            other => panic!("expected sliding view, got {other:?}"),
        }

        p.select_year(2020);
        match p.view().year_picker {
            YearPickerView::Sliding { years } => {
                assert_eq!(years[0], 2014);
                assert_eq!(years[11], 2025);
            }
            other => panic!("expected sliding view, got {other:?}"),
        }
    }

    #[test]
    fn test_commit_effects_visible_before_next_event() {
        let mut p = picker(PickerConfig::default());
        let change = p.input("08/09/2024");
        assert_eq!(change, Some(Change::Selected(date("08/09/2024"))));
        // The committed state is fully observable before any further gesture
        assert_eq!(p.value(), "08/09/2024");
        assert_eq!(p.cursor().month(), 8);
        assert_eq!(p.blur(), None);
    }
}
