// SPDX-License-Identifier: MPL-2.0
//! Component-local state of the registration form.
//!
//! The controller owns field values, validation marks, previews, the submit
//! status, the shake effect and the success dialog. Every handler runs to
//! completion and reports what asynchronous follow-up the caller has to
//! schedule; the controller itself never spawns work.

use super::dialog::SuccessDialog;
use super::field::{FieldId, ValidationMark};
use super::snapshot::FormSnapshot;
use super::validation::{self, FieldErrors};
use crate::error::Result;
use crate::media::{ImageData, Preview, PreviewKind, SelfiePreview, VideoPreview};
use crate::ui::animation::{Animation, Effect};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Whether a simulated submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Submit control disabled and showing the loading label.
    Submitting { since: Instant },
}

/// Follow-up requested by [`FormController::on_file_selected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    /// Nothing was picked; state is unchanged.
    Ignored,
    /// The video preview was assigned synchronously with its caption. The
    /// caller should extract a thumbnail of this file and report back through
    /// [`FormController::on_video_thumbnail`].
    VideoShown(PathBuf),
    /// The caller must decode this file and report back through
    /// [`FormController::on_selfie_decoded`].
    DecodeSelfie(PathBuf),
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every check passed; the caller must wait out the simulated delay and
    /// then call [`FormController::on_submission_completed`].
    Accepted,
    /// At least one field failed. The form is shaking; the caller must call
    /// [`FormController::on_shake_elapsed`] after the shake duration.
    Rejected(FieldErrors),
    /// A submission is already in flight.
    Ignored,
}

impl SubmitOutcome {
    /// The submit result as `onSubmit(snapshot) -> Result<(), fieldErrors>`.
    /// An ignored submit counts as success since nothing was rejected.
    pub fn into_result(self) -> std::result::Result<(), FieldErrors> {
        match self {
            SubmitOutcome::Rejected(errors) => Err(errors),
            SubmitOutcome::Accepted | SubmitOutcome::Ignored => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct FormController {
    snapshot: FormSnapshot,
    marks: BTreeMap<FieldId, ValidationMark>,
    video: Preview<VideoPreview>,
    selfie: Preview<SelfiePreview>,
    status: SubmitStatus,
    shake: Option<Animation>,
    dialog: Option<SuccessDialog>,
}

impl FormController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Event handlers
    // ---------------------------------------------------------------------

    /// Stores the edited value and clears the field's mark until the next
    /// submit. Idempotent on an untouched field.
    pub fn on_field_edited(&mut self, field: FieldId, value: impl Into<String>) {
        self.snapshot.set(field, value);
        self.marks.remove(&field);
    }

    /// Handles a file picked (or not) for one of the preview inputs.
    pub fn on_file_selected(&mut self, kind: PreviewKind, file: Option<PathBuf>) -> FileSelection {
        let Some(path) = file else {
            return FileSelection::Ignored;
        };

        match kind {
            PreviewKind::Video => {
                let preview = VideoPreview::from_path(path.clone());
                tracing::debug!(
                    input = kind.name(),
                    file = %preview.file_name,
                    "preview assigned"
                );
                self.video.show(preview, kind.entrance_effect());
                FileSelection::VideoShown(path)
            }
            PreviewKind::Selfie => FileSelection::DecodeSelfie(path),
        }
    }

    /// Assigns a finished selfie decode. Completions are applied in arrival
    /// order, so the last decode to finish wins even if it was started first.
    ///
    /// On failure the current preview is left as it was and the error is
    /// handed back for reporting.
    pub fn on_selfie_decoded(&mut self, result: Result<SelfiePreview>) -> Result<()> {
        let preview = result?;
        tracing::debug!(
            input = PreviewKind::Selfie.name(),
            file = %preview.path.display(),
            width = preview.image.width,
            height = preview.image.height,
            "preview assigned"
        );
        self.selfie
            .show(preview, PreviewKind::Selfie.entrance_effect());
        Ok(())
    }

    /// Attaches an extracted first frame to the video preview.
    ///
    /// Results for a file that is no longer previewed are dropped. On failure
    /// the caption stays on its own and the error is handed back.
    pub fn on_video_thumbnail(&mut self, path: &Path, result: Result<ImageData>) -> Result<()> {
        let Some(video) = self
            .video
            .content_mut()
            .filter(|video| video.path == path)
        else {
            tracing::debug!(file = %path.display(), "dropping stale video thumbnail");
            return Ok(());
        };

        let thumbnail = result?;
        tracing::debug!(
            input = PreviewKind::Video.name(),
            file = %video.file_name,
            width = thumbnail.width,
            height = thumbnail.height,
            "thumbnail attached"
        );
        video.thumbnail = Some(thumbnail);
        Ok(())
    }

    /// Runs the validation pass and decides whether to start the simulated
    /// submission.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }

        self.marks.clear();
        let report = validation::validate(&self.snapshot);
        self.marks.extend(report.marks());

        match report.into_result() {
            Ok(()) => {
                self.status = SubmitStatus::Submitting {
                    since: Instant::now(),
                };
                tracing::info!("registration accepted, simulating submission");
                SubmitOutcome::Accepted
            }
            Err(errors) => {
                // Re-adding an active effect does not restart it
                if self.shake.is_none() {
                    self.shake = Some(Animation::start(Effect::ShakeX));
                }
                tracing::info!(%errors, "registration rejected");
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Removes the shake effect. Every scheduled removal clears it, even one
    /// belonging to an earlier rejected submit.
    pub fn on_shake_elapsed(&mut self) {
        self.shake = None;
    }

    /// Finishes the simulated submission: shows the success dialog and
    /// resets the form.
    pub fn on_submission_completed(&mut self) {
        self.dialog = Some(SuccessDialog::show());
        self.snapshot.clear();
        self.video.hide();
        self.selfie.hide();
        self.status = SubmitStatus::Idle;
        self.marks.clear();
        tracing::info!("simulated submission completed");
    }

    /// Starts hiding the success dialog.
    pub fn on_dialog_acknowledged(&mut self) {
        if let Some(dialog) = &mut self.dialog {
            dialog.acknowledge();
        }
    }

    /// Advances time-based state: drops the dialog once its exit effect is
    /// over.
    pub fn tick(&mut self, now: Instant) {
        if self.dialog.is_some_and(|dialog| dialog.is_gone(now)) {
            self.dialog = None;
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        self.snapshot.get(field)
    }

    #[must_use]
    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn mark(&self, field: FieldId) -> ValidationMark {
        self.marks.get(&field).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting { .. })
    }

    #[must_use]
    pub fn video_preview(&self) -> &Preview<VideoPreview> {
        &self.video
    }

    #[must_use]
    pub fn selfie_preview(&self) -> &Preview<SelfiePreview> {
        &self.selfie
    }

    #[must_use]
    pub fn shake(&self) -> Option<&Animation> {
        self.shake.as_ref()
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&SuccessDialog> {
        self.dialog.as_ref()
    }

    /// Whether anything on screen changes with time alone and needs redraws.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_submitting()
            || self.shake.is_some()
            || self.video.is_animating(now)
            || self.selfie.is_animating(now)
            || self
                .dialog
                .is_some_and(|dialog| dialog.is_acknowledged() || dialog.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, PreviewError};

    fn fill_valid(controller: &mut FormController) {
        controller.on_field_edited(FieldId::RollNumber, "ab12");
        controller.on_field_edited(FieldId::FirstName, "Asha");
        controller.on_field_edited(FieldId::LastName, "Verma");
        controller.on_field_edited(FieldId::Institute, "City College");
        controller.on_field_edited(FieldId::Stream, "Electronics");
        controller.on_field_edited(FieldId::Year, "2nd Year");
        controller.on_field_edited(FieldId::Email, "a@b.co");
        controller.on_field_edited(FieldId::PhoneNumber, "1234567890");
    }

    fn selfie(name: &str) -> SelfiePreview {
        SelfiePreview {
            path: PathBuf::from(name),
            image: ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]),
        }
    }

    #[test]
    fn live_clear_removes_mark() {
        let mut controller = FormController::new();
        controller.on_submit();
        assert_eq!(controller.mark(FieldId::Email), ValidationMark::Invalid);

        controller.on_field_edited(FieldId::Email, "a");
        assert_eq!(controller.mark(FieldId::Email), ValidationMark::Untouched);
        assert_eq!(controller.mark(FieldId::RollNumber), ValidationMark::Invalid);
    }

    #[test]
    fn live_clear_on_untouched_field_is_noop() {
        let mut controller = FormController::new();
        controller.on_field_edited(FieldId::Year, "1st Year");
        let marks_before: Vec<_> = FieldId::ALL.iter().map(|f| controller.mark(*f)).collect();

        controller.on_field_edited(FieldId::Year, "1st Year");
        let marks_after: Vec<_> = FieldId::ALL.iter().map(|f| controller.mark(*f)).collect();

        assert_eq!(marks_before, marks_after);
        assert_eq!(controller.value(FieldId::Year), "1st Year");
    }

    #[test]
    fn no_file_selected_is_ignored() {
        let mut controller = FormController::new();
        assert_eq!(
            controller.on_file_selected(PreviewKind::Video, None),
            FileSelection::Ignored
        );
        assert_eq!(
            controller.on_file_selected(PreviewKind::Selfie, None),
            FileSelection::Ignored
        );
        assert!(!controller.video_preview().is_visible());
    }

    #[test]
    fn video_selection_shows_preview_immediately() {
        let mut controller = FormController::new();
        let outcome =
            controller.on_file_selected(PreviewKind::Video, Some(PathBuf::from("/tmp/a.mp4")));

        assert_eq!(outcome, FileSelection::VideoShown(PathBuf::from("/tmp/a.mp4")));
        let preview = controller.video_preview();
        assert!(preview.is_visible());
        assert_eq!(preview.entrance().map(Animation::effect), Some(Effect::FadeIn));
        assert!(preview.content().is_some_and(|video| video.thumbnail.is_none()));
    }

    #[test]
    fn extracted_thumbnail_is_attached_to_current_video() {
        let mut controller = FormController::new();
        let path = PathBuf::from("/tmp/a.mp4");
        controller.on_file_selected(PreviewKind::Video, Some(path.clone()));

        controller
            .on_video_thumbnail(&path, Ok(ImageData::from_rgba(2, 1, vec![0; 8])))
            .expect("thumbnail ok");

        let shown = controller.video_preview().content().expect("visible");
        assert_eq!(shown.thumbnail.as_ref().map(|t| (t.width, t.height)), Some((2, 1)));
    }

    #[test]
    fn thumbnail_of_replaced_video_is_dropped() {
        let mut controller = FormController::new();
        let first = PathBuf::from("/tmp/a.mp4");
        controller.on_file_selected(PreviewKind::Video, Some(first.clone()));
        controller.on_file_selected(PreviewKind::Video, Some(PathBuf::from("/tmp/b.mp4")));

        controller
            .on_video_thumbnail(&first, Ok(ImageData::from_rgba(1, 1, vec![0; 4])))
            .expect("stale results are not errors");

        let shown = controller.video_preview().content().expect("visible");
        assert_eq!(shown.file_name, "b.mp4");
        assert!(shown.thumbnail.is_none());
    }

    #[test]
    fn thumbnail_after_reset_is_dropped() {
        let mut controller = FormController::new();
        let path = PathBuf::from("/tmp/a.mp4");
        controller.on_file_selected(PreviewKind::Video, Some(path.clone()));
        controller.on_submission_completed();

        controller
            .on_video_thumbnail(&path, Ok(ImageData::from_rgba(1, 1, vec![0; 4])))
            .expect("stale results are not errors");

        assert!(!controller.video_preview().is_visible());
    }

    #[test]
    fn failed_thumbnail_keeps_caption_preview() {
        let mut controller = FormController::new();
        let path = PathBuf::from("/tmp/a.mp4");
        controller.on_file_selected(PreviewKind::Video, Some(path.clone()));

        let result = controller.on_video_thumbnail(
            &path,
            Err(Error::Preview(PreviewError::Corrupted("no frame".into()))),
        );

        assert!(result.is_err());
        let shown = controller.video_preview().content().expect("still visible");
        assert_eq!(shown.file_name, "a.mp4");
        assert!(shown.thumbnail.is_none());
    }

    #[test]
    fn second_video_replaces_first() {
        let mut controller = FormController::new();
        controller.on_file_selected(PreviewKind::Video, Some(PathBuf::from("/tmp/a.mp4")));
        controller.on_file_selected(PreviewKind::Video, Some(PathBuf::from("/tmp/b.mp4")));

        let shown = controller.video_preview().content().expect("visible");
        assert_eq!(shown.file_name, "b.mp4");
    }

    #[test]
    fn selfie_selection_requests_decode_without_showing() {
        let mut controller = FormController::new();
        let path = PathBuf::from("/tmp/me.png");
        let outcome = controller.on_file_selected(PreviewKind::Selfie, Some(path.clone()));

        assert_eq!(outcome, FileSelection::DecodeSelfie(path));
        assert!(!controller.selfie_preview().is_visible());
    }

    #[test]
    fn decoded_selfie_is_shown_with_zoom() {
        let mut controller = FormController::new();
        controller
            .on_selfie_decoded(Ok(selfie("me.png")))
            .expect("decode ok");

        let preview = controller.selfie_preview();
        assert!(preview.is_visible());
        assert_eq!(preview.entrance().map(Animation::effect), Some(Effect::ZoomIn));
    }

    #[test]
    fn last_decode_to_finish_wins() {
        // Known gap: an older decode finishing late overwrites a newer pick.
        let mut controller = FormController::new();
        controller
            .on_selfie_decoded(Ok(selfie("second.png")))
            .expect("decode ok");
        controller
            .on_selfie_decoded(Ok(selfie("first.png")))
            .expect("decode ok");

        let shown = controller.selfie_preview().content().expect("visible");
        assert_eq!(shown.path, PathBuf::from("first.png"));
    }

    #[test]
    fn failed_decode_keeps_previous_selfie() {
        let mut controller = FormController::new();
        controller
            .on_selfie_decoded(Ok(selfie("good.png")))
            .expect("decode ok");

        let result = controller.on_selfie_decoded(Err(Error::Preview(
            PreviewError::UnsupportedFormat,
        )));

        assert!(result.is_err());
        let shown = controller.selfie_preview().content().expect("still visible");
        assert_eq!(shown.path, PathBuf::from("good.png"));
    }

    #[test]
    fn valid_submit_starts_submission() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);

        assert_eq!(controller.on_submit(), SubmitOutcome::Accepted);
        assert!(controller.is_submitting());
        assert!(controller.shake().is_none());
        for field in FieldId::ALL {
            assert_eq!(controller.mark(field), ValidationMark::Valid);
        }
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);
        controller.on_submit();

        assert_eq!(controller.on_submit(), SubmitOutcome::Ignored);
        assert!(controller.is_submitting());
    }

    #[test]
    fn fields_stay_editable_while_submitting() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);
        controller.on_submit();

        controller.on_field_edited(FieldId::FirstName, "Ravi");
        assert_eq!(controller.value(FieldId::FirstName), "Ravi");
        assert_eq!(controller.mark(FieldId::FirstName), ValidationMark::Untouched);
    }

    #[test]
    fn completion_resets_everything_and_shows_dialog() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);
        controller.on_file_selected(PreviewKind::Video, Some(PathBuf::from("/tmp/a.mp4")));
        controller
            .on_selfie_decoded(Ok(selfie("me.png")))
            .expect("decode ok");
        controller.on_submit();

        controller.on_submission_completed();

        assert!(controller.dialog().is_some());
        assert!(controller.snapshot().is_empty());
        assert!(!controller.video_preview().is_visible());
        assert!(!controller.selfie_preview().is_visible());
        assert_eq!(controller.status(), SubmitStatus::Idle);
        for field in FieldId::ALL {
            assert_eq!(controller.mark(field), ValidationMark::Untouched);
        }
    }

    #[test]
    fn rejected_submit_shakes_and_keeps_submit_enabled() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);
        controller.on_field_edited(FieldId::PhoneNumber, "12345");

        let outcome = controller.on_submit();

        let errors = outcome.into_result().expect_err("phone is invalid");
        assert_eq!(errors.fields(), &[FieldId::PhoneNumber]);
        assert_eq!(controller.mark(FieldId::PhoneNumber), ValidationMark::Invalid);
        assert!(!controller.is_submitting());
        assert!(controller.dialog().is_none());
        assert_eq!(
            controller.shake().map(Animation::effect),
            Some(Effect::ShakeX)
        );

        controller.on_shake_elapsed();
        assert!(controller.shake().is_none());
    }

    #[test]
    fn repeated_rejection_does_not_restart_shake() {
        let mut controller = FormController::new();
        controller.on_submit();
        let first = *controller.shake().expect("shaking");

        controller.on_submit();
        assert_eq!(controller.shake(), Some(&first));
    }

    #[test]
    fn resubmit_clears_stale_marks_first() {
        let mut controller = FormController::new();
        controller.on_submit();
        assert_eq!(controller.mark(FieldId::FirstName), ValidationMark::Invalid);

        fill_valid(&mut controller);
        controller.on_field_edited(FieldId::RollNumber, "ab-12");
        controller.on_submit();

        assert_eq!(controller.mark(FieldId::FirstName), ValidationMark::Valid);
        assert_eq!(controller.mark(FieldId::RollNumber), ValidationMark::Invalid);
    }

    #[test]
    fn dialog_is_removed_after_hide_animation() {
        let mut controller = FormController::new();
        controller.on_submission_completed();
        controller.on_dialog_acknowledged();

        let hide = controller.dialog().expect("dialog").animation();
        controller.tick(hide.started_at());
        assert!(controller.dialog().is_some());

        controller.tick(hide.started_at() + Effect::BounceOut.duration());
        assert!(controller.dialog().is_none());
    }

    #[test]
    fn idle_form_is_not_animating() {
        let controller = FormController::new();
        assert!(!controller.is_animating(Instant::now()));
    }
}
