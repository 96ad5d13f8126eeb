//! Due-Date Status Derivation
//!
//! Pure classification of an item's due date against "today", reused by
//! the per-row status pill, the aggregate summary chip, and the toast
//! policy for due-date edits.

use chrono::{Local, NaiveDate};

use crate::item::TodoItem;

/// A task due exactly this many days ahead counts as due-soon.
pub const DUE_SOON_THRESHOLD_DAYS: i64 = 1;

/// Supplies the midnight-normalized current date.
///
/// Injected into the engine so tests can pin "today".
pub trait Today {
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalToday;

impl Today for LocalToday {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Mutually exclusive due-date classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// No due date set, or the date string does not parse.
    None,
    /// Completed, or due more than one day out.
    Scheduled,
    DueToday,
    DueSoon,
    Overdue { days: i64 },
}

impl DueStatus {
    /// Stable kind string, also used as the row status class.
    pub fn kind(&self) -> &'static str {
        match self {
            DueStatus::None => "none",
            DueStatus::Scheduled => "scheduled",
            DueStatus::DueToday => "due-today",
            DueStatus::DueSoon => "due-soon",
            DueStatus::Overdue { .. } => "overdue",
        }
    }

    /// Human label for the status pill; `None` when no pill is shown.
    pub fn label(&self) -> Option<String> {
        match self {
            DueStatus::None => None,
            DueStatus::Scheduled => Some("Scheduled".to_string()),
            DueStatus::DueToday => Some("Due today".to_string()),
            DueStatus::DueSoon => Some("Due tomorrow".to_string()),
            DueStatus::Overdue { days } => Some(if *days == 1 {
                "1 day overdue".to_string()
            } else {
                format!("{} days overdue", days)
            }),
        }
    }

    /// Pill modifier: `warning` for due-soon/due-today, `alert` for overdue.
    pub fn pill_variant(&self) -> Option<&'static str> {
        match self {
            DueStatus::DueToday | DueStatus::DueSoon => Some("warning"),
            DueStatus::Overdue { .. } => Some("alert"),
            _ => None,
        }
    }

    /// Statuses that warrant a toast when a due-date edit lands on them.
    pub fn is_urgent(&self) -> bool {
        matches!(
            self,
            DueStatus::DueToday | DueStatus::DueSoon | DueStatus::Overdue { .. }
        )
    }
}

/// Parse a strict `yyyy-mm-dd` due date; anything else is "no date".
fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Classify one item against `today`.
pub fn classify(item: &TodoItem, today: NaiveDate) -> DueStatus {
    let Some(due) = parse_due_date(&item.due_date) else {
        return DueStatus::None;
    };
    if item.completed {
        return DueStatus::Scheduled;
    }
    let days_until = (due - today).num_days();
    if days_until < 0 {
        DueStatus::Overdue { days: -days_until }
    } else if days_until == 0 {
        DueStatus::DueToday
    } else if days_until == DUE_SOON_THRESHOLD_DAYS {
        DueStatus::DueSoon
    } else {
        DueStatus::Scheduled
    }
}

/// Aggregate counts for the summary indicators.
///
/// `due_soon` counts due-soon and due-today items together (both render
/// with the warning tone), `overdue` counts overdue incomplete items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueSummary {
    pub due_soon: usize,
    pub overdue: usize,
}

/// Summary chip content; overdue takes precedence over due-soon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryChip {
    pub label: String,
    /// `warning` or `alert`.
    pub tone: &'static str,
}

impl DueSummary {
    pub fn chip(&self) -> Option<SummaryChip> {
        if self.overdue > 0 {
            Some(SummaryChip {
                label: format!("{} overdue", self.overdue),
                tone: "alert",
            })
        } else if self.due_soon > 0 {
            Some(SummaryChip {
                label: format!("{} due soon", self.due_soon),
                tone: "warning",
            })
        } else {
            None
        }
    }
}

pub fn summarize(items: &[TodoItem], today: NaiveDate) -> DueSummary {
    let mut summary = DueSummary::default();
    for item in items {
        match classify(item, today) {
            DueStatus::DueSoon | DueStatus::DueToday => summary.due_soon += 1,
            DueStatus::Overdue { .. } => summary.overdue += 1,
            _ => {}
        }
    }
    summary
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Warning,
    Danger,
}

impl ToastSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastSeverity::Warning => "warning",
            ToastSeverity::Danger => "danger",
        }
    }
}

/// Toast emitted when a due-date edit makes an item urgent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastPayload {
    pub copy: String,
    pub severity: ToastSeverity,
}

/// Build the toast for a due-date edit, or `None` when the item is
/// completed or the new status is not urgent.
pub fn due_date_toast(item: &TodoItem, status: DueStatus) -> Option<ToastPayload> {
    if item.completed || !status.is_urgent() {
        return None;
    }
    let label = status.label()?;
    let name = item.description.trim();
    let name = if name.is_empty() { "Untitled task" } else { name };
    Some(ToastPayload {
        copy: format!("{} is {}", name, label.to_lowercase()),
        severity: match status {
            DueStatus::Overdue { .. } => ToastSeverity::Danger,
            _ => ToastSeverity::Warning,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    fn item(due: &str, completed: bool) -> TodoItem {
        TodoItem {
            description: "task".into(),
            due_date: due.into(),
            completed,
            ..TodoItem::default()
        }
    }

    #[test]
    fn tomorrow_is_due_soon() {
        let status = classify(&item("2024-02-11", false), today());
        assert_eq!(status, DueStatus::DueSoon);
        assert_eq!(status.label().as_deref(), Some("Due tomorrow"));
        assert_eq!(status.pill_variant(), Some("warning"));
    }

    #[test]
    fn same_day_is_due_today() {
        let status = classify(&item("2024-02-10", false), today());
        assert_eq!(status, DueStatus::DueToday);
        assert_eq!(status.label().as_deref(), Some("Due today"));
    }

    #[test]
    fn yesterday_is_one_day_overdue() {
        let status = classify(&item("2024-02-09", false), today());
        assert_eq!(status, DueStatus::Overdue { days: 1 });
        assert_eq!(status.label().as_deref(), Some("1 day overdue"));
        assert_eq!(status.pill_variant(), Some("alert"));
    }

    #[test]
    fn overdue_label_pluralizes() {
        let status = classify(&item("2024-02-01", false), today());
        assert_eq!(status, DueStatus::Overdue { days: 9 });
        assert_eq!(status.label().as_deref(), Some("9 days overdue"));
    }

    #[test]
    fn completed_items_are_scheduled_even_when_past_due() {
        assert_eq!(
            classify(&item("2024-02-01", true), today()),
            DueStatus::Scheduled
        );
    }

    #[test]
    fn far_future_dates_are_scheduled() {
        assert_eq!(
            classify(&item("2024-02-15", false), today()),
            DueStatus::Scheduled
        );
    }

    #[test]
    fn empty_or_malformed_dates_have_no_status() {
        assert_eq!(classify(&item("", false), today()), DueStatus::None);
        assert_eq!(classify(&item("next week", false), today()), DueStatus::None);
        assert_eq!(classify(&item("2024-13-40", false), today()), DueStatus::None);
    }

    #[test]
    fn summary_counts_soon_and_overdue() {
        let items = vec![
            item("2024-02-11", false),
            item("2024-02-10", false),
            item("2024-02-09", false),
            item("2024-02-01", true),
            item("", false),
        ];
        let summary = summarize(&items, today());
        assert_eq!(summary.due_soon, 2);
        assert_eq!(summary.overdue, 1);
        let chip = summary.chip().unwrap();
        assert_eq!(chip.label, "1 overdue");
        assert_eq!(chip.tone, "alert");
    }

    #[test]
    fn due_today_counts_toward_the_due_soon_bucket() {
        let items = vec![item("2024-02-10", false)];
        let summary = summarize(&items, today());
        assert_eq!(summary.due_soon, 1);
        assert_eq!(summary.overdue, 0);
    }

    #[test]
    fn chip_prefers_due_soon_when_nothing_overdue() {
        let summary = DueSummary {
            due_soon: 1,
            overdue: 0,
        };
        let chip = summary.chip().unwrap();
        assert_eq!(chip.label, "1 due soon");
        assert_eq!(chip.tone, "warning");
    }

    #[test]
    fn chip_hidden_when_nothing_urgent() {
        assert!(DueSummary::default().chip().is_none());
    }

    #[test]
    fn toast_for_due_tomorrow_uses_lowercased_label() {
        let it = item("2024-02-11", false);
        let toast = due_date_toast(&it, classify(&it, today())).unwrap();
        assert_eq!(toast.copy, "task is due tomorrow");
        assert_eq!(toast.severity, ToastSeverity::Warning);
    }

    #[test]
    fn toast_for_overdue_is_danger_with_untitled_fallback() {
        let mut it = item("2024-02-09", false);
        it.description = "   ".into();
        let toast = due_date_toast(&it, classify(&it, today())).unwrap();
        assert_eq!(toast.copy, "Untitled task is 1 day overdue");
        assert_eq!(toast.severity, ToastSeverity::Danger);
    }

    #[test]
    fn no_toast_for_scheduled_or_completed() {
        let scheduled = item("2024-02-20", false);
        assert!(due_date_toast(&scheduled, classify(&scheduled, today())).is_none());

        let done = item("2024-02-09", true);
        assert!(due_date_toast(&done, classify(&done, today())).is_none());
    }
}
