//! Administrative series management: list, edit, save, delete.

use reelhub_protocol::{Series, SeriesDraft, SeriesId};

use crate::context::AppContext;
use crate::guard::{Destination, GuardDecision};

// ---------------------------------------------------------------------------
// Edit form
// ---------------------------------------------------------------------------

/// The series edit form, all fields kept as the raw strings a shell's
/// inputs hold. Conversion to a wire draft happens at save time.
#[derive(Debug, Clone, Default)]
pub struct SeriesForm {
    /// Id of the series being edited; `None` means "create new".
    pub series_id: Option<SeriesId>,
    pub name: String,
    pub language_code: String,
    pub origin_country: String,
    pub release_date: String,
    pub num_episodes: String,
    pub description: String,
    pub maturity_rating: String,
    pub poster_url: String,
    pub banner_url: String,
}

impl SeriesForm {
    /// Loads a fetched series into the form for editing.
    pub fn populate(&mut self, series: &Series) {
        self.series_id = Some(series.series_id);
        self.name = series.name.clone();
        self.language_code = series.language_code.clone().unwrap_or_default();
        self.origin_country =
            series.origin_country.clone().unwrap_or_default();
        self.release_date = series.release_date.clone().unwrap_or_default();
        self.num_episodes = series
            .num_episodes
            .map(|n| n.to_string())
            .unwrap_or_default();
        self.description = series.description.clone().unwrap_or_default();
        self.maturity_rating =
            series.maturity_rating.clone().unwrap_or_default();
        self.poster_url = series.poster_url.clone().unwrap_or_default();
        self.banner_url = series.banner_url.clone().unwrap_or_default();
    }

    /// Clears every field, dropping any edit in progress.
    pub fn reset(&mut self) {
        *self = SeriesForm::default();
    }

    /// Converts the raw fields into a wire draft: text trimmed, blank
    /// optionals as `None` (serialized `null`), an empty or
    /// unparseable episode count as `0`.
    pub fn to_draft(&self) -> SeriesDraft {
        SeriesDraft {
            name: self.name.trim().to_owned(),
            language_code: self.language_code.trim().to_owned(),
            origin_country: self.origin_country.trim().to_owned(),
            release_date: self.release_date.clone(),
            num_episodes: self.num_episodes.trim().parse().unwrap_or(0),
            description: optional(&self.description),
            maturity_rating: optional(&self.maturity_rating),
            poster_url: optional(&self.poster_url),
            banner_url: optional(&self.banner_url),
        }
    }
}

/// Trimmed value, or `None` when nothing is left.
fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// Drives the admin series page: a rows table, one edit form, and two
/// inline error lines (one for the table, one for the form).
pub struct AdminScreen {
    ctx: AppContext,
    /// Every series known to the service, in service order.
    pub series: Vec<Series>,
    pub form: SeriesForm,
    /// Inline error text above the table; empty when the last load
    /// succeeded.
    pub list_error: String,
    /// Inline error text under the form; empty when the last form
    /// operation succeeded.
    pub form_error: String,
    filter: String,
}

impl AdminScreen {
    /// Gates on a privileged session, then performs the initial load.
    ///
    /// `Err` carries where the shell should navigate instead. The
    /// guard runs before any network traffic.
    pub async fn open(ctx: AppContext) -> Result<Self, Destination> {
        if let GuardDecision::Redirect(destination) =
            ctx.guard().require_privileged()
        {
            return Err(destination);
        }

        let mut screen = Self {
            ctx,
            series: Vec::new(),
            form: SeriesForm::default(),
            list_error: String::new(),
            form_error: String::new(),
            filter: String::new(),
        };
        screen.refresh().await;
        Ok(screen)
    }

    /// Reloads the series list. On failure the table empties and the
    /// service's message lands in [`list_error`](Self::list_error).
    pub async fn refresh(&mut self) {
        match self.ctx.catalog().list_series().await {
            Ok(series) => {
                tracing::debug!(count = series.len(), "series list loaded");
                self.series = series;
                self.list_error.clear();
            }
            Err(e) => {
                self.series.clear();
                self.list_error = format!("Failed to load series: {e}");
            }
        }
    }

    /// Fetches one series into the edit form.
    pub async fn edit(&mut self, id: SeriesId) {
        self.form_error.clear();
        match self.ctx.catalog().fetch_series(id).await {
            Ok(detail) => self.form.populate(&detail.series),
            Err(e) => self.form_error = e.to_string(),
        }
    }

    /// Saves the form: `PUT` when an id is loaded, `POST` otherwise.
    /// On success the form resets and the list reloads.
    pub async fn save(&mut self) {
        self.form_error.clear();
        let draft = self.form.to_draft();

        let result = match self.form.series_id {
            Some(id) => self.ctx.catalog().update_series(id, &draft).await,
            None => self.ctx.catalog().create_series(&draft).await,
        };

        match result {
            Ok(()) => {
                self.form.reset();
                self.ctx.toasts().success("Series saved");
                self.refresh().await;
            }
            Err(e) => self.form_error = e.to_string(),
        }
    }

    /// Deletes a series, then reloads the list.
    pub async fn delete(&mut self, id: SeriesId) {
        self.form_error.clear();
        match self.ctx.catalog().delete_series(id).await {
            Ok(()) => {
                self.ctx.toasts().success("Series deleted");
                self.refresh().await;
            }
            Err(e) => self.form_error = e.to_string(),
        }
    }

    /// Drops any edit in progress and clears the form error.
    pub fn reset(&mut self) {
        self.form.reset();
        self.form_error.clear();
    }

    /// Sets the name filter. Shells feeding keystrokes should route
    /// them through a [`Debouncer`] so only the settled query lands
    /// here.
    ///
    /// [`Debouncer`]: reelhub_notify::Debouncer
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Rows matching the current filter, service order preserved.
    /// Matching is a case-insensitive name substring; an empty filter
    /// shows everything.
    pub fn visible(&self) -> Vec<&Series> {
        if self.filter.is_empty() {
            return self.series.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.series
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reelhub_notify::Debouncer;
    use reelhub_session::MemoryStorage;

    use super::*;

    fn offline_screen() -> AdminScreen {
        let ctx = AppContext::builder()
            .base_url("http://localhost:8000")
            .storage(MemoryStorage::new())
            .build()
            .expect("context should build");
        AdminScreen {
            ctx,
            series: Vec::new(),
            form: SeriesForm::default(),
            list_error: String::new(),
            form_error: String::new(),
            filter: String::new(),
        }
    }

    fn named_series(id: u64, name: &str) -> Series {
        Series {
            series_id: SeriesId(id),
            name: name.to_owned(),
            language_code: None,
            origin_country: None,
            release_date: None,
            num_episodes: None,
            description: None,
            maturity_rating: None,
            poster_url: None,
            banner_url: None,
        }
    }

    // =====================================================================
    // Form conversion
    // =====================================================================

    #[test]
    fn test_to_draft_trims_and_nulls_blank_optionals() {
        let form = SeriesForm {
            name: "  Deep Water ".into(),
            language_code: "en".into(),
            origin_country: " US".into(),
            release_date: "2024-06-01".into(),
            num_episodes: "8".into(),
            description: "   ".into(),
            ..SeriesForm::default()
        };

        let draft = form.to_draft();
        assert_eq!(draft.name, "Deep Water");
        assert_eq!(draft.origin_country, "US");
        assert_eq!(draft.num_episodes, 8);
        assert_eq!(draft.description, None);
        assert_eq!(draft.poster_url, None);
    }

    #[test]
    fn test_to_draft_bad_episode_count_becomes_zero() {
        let form = SeriesForm {
            num_episodes: "lots".into(),
            ..SeriesForm::default()
        };
        assert_eq!(form.to_draft().num_episodes, 0);

        let blank = SeriesForm::default();
        assert_eq!(blank.to_draft().num_episodes, 0);
    }

    #[test]
    fn test_populate_then_reset_round_trip() {
        let mut series = named_series(4, "Signal Lost");
        series.num_episodes = Some(10);
        series.description = Some("A thriller".into());

        let mut form = SeriesForm::default();
        form.populate(&series);
        assert_eq!(form.series_id, Some(SeriesId(4)));
        assert_eq!(form.name, "Signal Lost");
        assert_eq!(form.num_episodes, "10");
        assert_eq!(form.description, "A thriller");
        assert_eq!(form.poster_url, "");

        form.reset();
        assert_eq!(form.series_id, None);
        assert_eq!(form.name, "");
    }

    // =====================================================================
    // Filtering
    // =====================================================================

    #[test]
    fn test_visible_empty_filter_shows_all() {
        let mut screen = offline_screen();
        screen.series = vec![
            named_series(1, "Signal Lost"),
            named_series(2, "Harbor Lights"),
        ];
        assert_eq!(screen.visible().len(), 2);
    }

    #[test]
    fn test_visible_filter_matches_case_insensitively() {
        let mut screen = offline_screen();
        screen.series = vec![
            named_series(1, "Signal Lost"),
            named_series(2, "Harbor Lights"),
            named_series(3, "Lost Harbor"),
        ];

        screen.set_filter("harbor");
        let names: Vec<&str> =
            screen.visible().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Harbor Lights", "Lost Harbor"]);

        screen.set_filter("SIGNAL");
        assert_eq!(screen.visible().len(), 1);

        screen.set_filter("nothing matches this");
        assert!(screen.visible().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_debounce_delivers_only_the_settled_query() {
        // Shell-style wiring: keystrokes feed a debouncer, and only
        // the query that survives the quiet period reaches the screen.
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let debouncer = Debouncer::new(
            Duration::from_millis(100),
            move |query: String| {
                tx.send(query).ok();
            },
        );

        debouncer.call("h".to_owned());
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.call("ha".to_owned());
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.call("harbor".to_owned());
        tokio::time::sleep(Duration::from_millis(150)).await;

        let settled = rx.try_recv().expect("one query should fire");
        assert!(rx.try_recv().is_err(), "earlier keystrokes must not fire");

        let mut screen = offline_screen();
        screen.series = vec![
            named_series(1, "Signal Lost"),
            named_series(2, "Harbor Lights"),
        ];
        screen.set_filter(settled);
        assert_eq!(screen.visible().len(), 1);
        assert_eq!(screen.visible()[0].name, "Harbor Lights");
    }
}
