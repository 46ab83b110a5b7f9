//! Series detail page: header info, episodes, and viewer feedback.

use reelhub_protocol::{FeedbackSummary, NewFeedback, SeriesDetail, SeriesId};

use crate::context::AppContext;
use crate::guard::{Destination, GuardDecision};

/// Validation text shown when the rating field is missing, not a
/// whole number, or out of range.
pub const RATING_RANGE_MESSAGE: &str = "Rating must be between 1 and 5.";

/// The feedback form, fields held as the raw strings a shell's inputs
/// carry.
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    pub rating: String,
    pub text: String,
}

/// Drives one series' detail page.
///
/// The header/episodes section and the feedback section load and fail
/// independently; a broken feedback endpoint never blanks the series
/// header, and vice versa.
pub struct DetailScreen {
    ctx: AppContext,
    series_id: SeriesId,
    pub detail: Option<SeriesDetail>,
    pub feedback: Option<FeedbackSummary>,
    /// Inline error for the header/episodes section.
    pub detail_error: String,
    /// Inline error for the feedback list section.
    pub feedback_error: String,
    pub form: FeedbackForm,
    /// Inline error under the submit form, validation or remote.
    pub form_error: String,
}

impl DetailScreen {
    /// Gates on any authenticated session, then loads both sections.
    ///
    /// `Err` carries where the shell should navigate instead. The
    /// guard runs before any network traffic.
    pub async fn open(
        ctx: AppContext,
        series_id: SeriesId,
    ) -> Result<Self, Destination> {
        if let GuardDecision::Redirect(destination) =
            ctx.guard().require_authenticated()
        {
            return Err(destination);
        }

        let mut screen = Self {
            ctx,
            series_id,
            detail: None,
            feedback: None,
            detail_error: String::new(),
            feedback_error: String::new(),
            form: FeedbackForm::default(),
            form_error: String::new(),
        };
        screen.load().await;
        Ok(screen)
    }

    pub fn series_id(&self) -> SeriesId {
        self.series_id
    }

    /// Reloads the detail and feedback sections concurrently.
    pub async fn load(&mut self) {
        let (detail, feedback) = tokio::join!(
            self.ctx.catalog().fetch_series(self.series_id),
            self.ctx.catalog().fetch_feedback(self.series_id),
        );

        match detail {
            Ok(d) => {
                self.detail = Some(d);
                self.detail_error.clear();
            }
            Err(e) => {
                self.detail = None;
                self.detail_error = format!("Failed to load series: {e}");
            }
        }

        match feedback {
            Ok(f) => {
                self.feedback = Some(f);
                self.feedback_error.clear();
            }
            Err(e) => {
                self.feedback = None;
                self.feedback_error = format!("Failed to load feedback: {e}");
            }
        }
    }

    /// Validates and submits the feedback form.
    ///
    /// A rating that isn't a whole number from 1 to 5 is rejected
    /// right here, before any network call, with the exact text the
    /// form shows. A successful submit clears the form, raises a
    /// toast, and reloads both sections so the new rating is visible.
    pub async fn submit_feedback(&mut self) {
        self.form_error.clear();

        let rating: u8 = match self.form.rating.trim().parse() {
            Ok(r) if (1..=5).contains(&r) => r,
            _ => {
                self.form_error = RATING_RANGE_MESSAGE.to_owned();
                return;
            }
        };

        let text = self.form.text.trim().to_owned();
        let feedback = NewFeedback {
            rating,
            feedback_text: (!text.is_empty()).then_some(text),
        };

        match self
            .ctx
            .catalog()
            .submit_feedback(self.series_id, &feedback)
            .await
        {
            Ok(()) => {
                self.form = FeedbackForm::default();
                self.ctx.toasts().success("Feedback submitted");
                self.load().await;
            }
            Err(e) => self.form_error = e.to_string(),
        }
    }
}
