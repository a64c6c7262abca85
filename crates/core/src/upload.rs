//! Progress bar for the upload form.

use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadProgress {
    pub loaded: f64,
    pub total: f64,
}

impl UploadProgress {
    pub fn new(loaded: f64, total: f64) -> Self {
        Self { loaded, total }
    }

    /// `loaded / total * 100`, clamped to `0..=100`. An unknown or zero total
    /// reads as no progress.
    pub fn percent(&self) -> f64 {
        if !self.total.is_finite() || self.total <= 0.0 || !self.loaded.is_finite() {
            return 0.0;
        }
        (self.loaded / self.total * 100.0).clamp(0.0, 100.0)
    }

    /// CSS width value, e.g. `"42.5%"`.
    pub fn width(&self) -> String {
        format!("{}%", self.percent())
    }
}

pub const RESET_WIDTH: &str = "0%";

pub trait ProgressSink {
    fn set_bar_width(&mut self, width: &str);
    fn clear_file_input(&mut self);
}

pub struct UploadProgressReporter<S> {
    form_id: String,
    sink: S,
}

impl<S: ProgressSink> UploadProgressReporter<S> {
    pub fn new(form_id: impl Into<String>, sink: S) -> Self {
        Self {
            form_id: form_id.into(),
            sink,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Progress from `form_id`'s request. Events from other forms are
    /// ignored; returns whether the bar was updated.
    ///
    /// Every event is written, even when the width has not changed, since the
    /// bar may have been replaced by a swap since the last write.
    pub fn on_progress(&mut self, form_id: &str, progress: UploadProgress) -> bool {
        if form_id != self.form_id {
            return false;
        }
        let width = progress.width();
        trace!(form = form_id, %width, "upload progress");
        self.sink.set_bar_width(&width);
        true
    }

    /// A request finished. When it was issued by the upload form, reset the
    /// bar and clear the file input so the same file can be sent again.
    pub fn on_after_request(&mut self, issuer_id: Option<&str>) -> bool {
        if issuer_id != Some(self.form_id.as_str()) {
            return false;
        }
        self.sink.set_bar_width(RESET_WIDTH);
        self.sink.clear_file_input();
        debug!(form = %self.form_id, "upload finished, progress reset");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        widths: Vec<String>,
        clears: u32,
    }

    impl ProgressSink for RecordingSink {
        fn set_bar_width(&mut self, width: &str) {
            self.widths.push(width.to_string());
        }

        fn clear_file_input(&mut self) {
            self.clears += 1;
        }
    }

    #[test]
    fn percent_handles_degenerate_totals() {
        assert_eq!(UploadProgress::new(50.0, 200.0).percent(), 25.0);
        assert_eq!(UploadProgress::new(10.0, 0.0).percent(), 0.0);
        assert_eq!(UploadProgress::new(10.0, f64::NAN).percent(), 0.0);
        assert_eq!(UploadProgress::new(300.0, 200.0).percent(), 100.0);
        assert_eq!(UploadProgress::new(-5.0, 200.0).percent(), 0.0);
    }

    #[test]
    fn width_is_a_css_percentage() {
        assert_eq!(UploadProgress::new(1.0, 2.0).width(), "50%");
        assert_eq!(UploadProgress::new(200.0, 200.0).width(), "100%");
        assert_eq!(UploadProgress::new(1.0, 8.0).width(), "12.5%");
    }

    #[test]
    fn only_the_upload_form_moves_the_bar() {
        let mut r = UploadProgressReporter::new("img-upload-form", RecordingSink::default());

        assert!(!r.on_progress("other-form", UploadProgress::new(1.0, 2.0)));
        assert!(r.on_progress("img-upload-form", UploadProgress::new(1.0, 4.0)));
        assert!(r.on_progress("img-upload-form", UploadProgress::new(3.0, 4.0)));

        assert_eq!(r.sink().widths, vec!["25%", "75%"]);
    }

    #[test]
    fn repeated_width_is_written_again() {
        let mut r = UploadProgressReporter::new("img-upload-form", RecordingSink::default());
        r.on_progress("img-upload-form", UploadProgress::new(2.0, 4.0));
        assert!(r.on_progress("img-upload-form", UploadProgress::new(2.0, 4.0)));
        assert_eq!(r.sink().widths, vec!["50%", "50%"]);
    }

    #[test]
    fn completion_resets_bar_and_file_input() {
        let mut r = UploadProgressReporter::new("img-upload-form", RecordingSink::default());
        r.on_progress("img-upload-form", UploadProgress::new(4.0, 4.0));

        assert!(!r.on_after_request(Some("guess-form")));
        assert!(!r.on_after_request(None));
        assert_eq!(r.sink().clears, 0);

        assert!(r.on_after_request(Some("img-upload-form")));
        assert_eq!(r.sink().widths, vec!["100%", "0%"]);
        assert_eq!(r.sink().clears, 1);

        // A second upload starts from zero again.
        assert!(r.on_progress("img-upload-form", UploadProgress::new(1.0, 4.0)));
        assert_eq!(r.sink().widths.last().map(String::as_str), Some("25%"));
    }
}
