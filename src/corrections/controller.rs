//! Correction Selection Controller
//!
//! State machine behind the "apply selected corrections" workflow. The
//! request is built from a snapshot of the selection; after the response
//! only the snapshot's checkboxes are touched, so boxes checked while the
//! request was in flight survive.

use serde_json::Value;

use super::selection::SelectionState;
use crate::error::{ApplyError, ValidationError};
use crate::models::{ApplyRequest, CorrectionId, CorrectionItem};
use crate::notifications::AlertKind;

/// Page elements the controller reads and updates
pub trait CorrectionView {
    /// Ids of boxes currently checked in the page
    fn checked_ids(&self) -> Vec<CorrectionId>;
    /// Payload embedded for `id`, read fresh on every call
    fn payload(&self, id: &CorrectionId) -> Option<Value>;
    fn resume_text(&self) -> String;
    fn set_resume_text(&mut self, text: &str);
    fn uncheck(&mut self, id: &CorrectionId);
    fn set_apply_enabled(&mut self, enabled: bool);
    fn notify(&mut self, kind: AlertKind, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    IdleEmpty,
    IdleSelected,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    Applied { count: usize },
    Failed(ApplyError),
    /// A response arrived with nothing in flight
    Ignored,
}

pub struct CorrectionController<V> {
    selection: SelectionState,
    in_flight: Option<Vec<CorrectionId>>,
    view: V,
}

impl<V: CorrectionView> CorrectionController<V> {
    /// Seed from boxes the browser restored as checked
    pub fn new(mut view: V) -> Self {
        let selection: SelectionState = view.checked_ids().into_iter().collect();
        view.set_apply_enabled(!selection.is_empty());
        Self {
            selection,
            in_flight: None,
            view,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Submitting
        } else if self.selection.is_empty() {
            Phase::IdleEmpty
        } else {
            Phase::IdleSelected
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[cfg(test)]
    fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Checkbox change. While submitting the set changes for the next
    /// submission only and the apply control stays disabled.
    pub fn toggle(&mut self, id: CorrectionId, checked: bool) {
        log::debug!("[CORRECTIONS] {} {}", id, if checked { "checked" } else { "unchecked" });
        self.selection.set(id, checked);
        if self.in_flight.is_none() {
            self.sync_apply_control();
        }
    }

    /// Apply click. Returns the request to send, or None when nothing
    /// should go over the wire.
    pub fn begin_apply(&mut self) -> Option<ApplyRequest> {
        if self.in_flight.is_some() {
            log::debug!("[CORRECTIONS] apply ignored, a request is already in flight");
            return None;
        }
        if self.selection.is_empty() {
            self.view
                .notify(AlertKind::Warning, &ValidationError::NoCorrectionSelected.to_string());
            return None;
        }

        let mut items = Vec::with_capacity(self.selection.len());
        for id in self.selection.snapshot() {
            match self.view.payload(&id) {
                Some(payload) => items.push(CorrectionItem { id, payload }),
                None => log::warn!("[CORRECTIONS] no payload for {}, skipping it", id),
            }
        }
        if items.is_empty() {
            self.view.notify(
                AlertKind::Warning,
                "The selected corrections could not be read. Please reload the page.",
            );
            return None;
        }

        let request = ApplyRequest::new(&items, self.view.resume_text());
        self.in_flight = Some(items.into_iter().map(|item| item.id).collect());
        self.view.set_apply_enabled(false);

        log::info!("[CORRECTIONS] submitting {} correction(s)", request.len());
        Some(request)
    }

    /// Settle the in-flight request
    pub fn finish_apply(&mut self, result: Result<String, ApplyError>) -> ApplyOutcome {
        let Some(snapshot) = self.in_flight.take() else {
            log::warn!("[CORRECTIONS] response arrived with no request in flight");
            return ApplyOutcome::Ignored;
        };

        match result {
            Ok(corrected_text) => {
                self.view.set_resume_text(&corrected_text);
                for id in &snapshot {
                    self.view.uncheck(id);
                    self.selection.remove(id);
                }
                self.sync_apply_control();

                let count = snapshot.len();
                log::info!("[CORRECTIONS] applied {} correction(s)", count);
                self.view.notify(
                    AlertKind::Success,
                    &format!("Successfully applied {} correction(s).", count),
                );
                ApplyOutcome::Applied { count }
            }
            Err(err) => {
                log::error!("[CORRECTIONS] applying corrections failed: {}", err);
                self.sync_apply_control();
                self.view.notify(
                    AlertKind::Danger,
                    "Failed to apply corrections. Please try again.",
                );
                ApplyOutcome::Failed(err)
            }
        }
    }

    fn sync_apply_control(&mut self) {
        self.view.set_apply_enabled(!self.selection.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    struct FakeView {
        boxes: Vec<(CorrectionId, bool)>,
        payloads: HashMap<CorrectionId, Value>,
        text: String,
        apply_enabled: bool,
        notifications: Vec<(AlertKind, String)>,
    }

    impl FakeView {
        fn new(ids: &[&str]) -> Self {
            Self {
                boxes: ids.iter().map(|id| (CorrectionId::new(*id), false)).collect(),
                payloads: ids
                    .iter()
                    .map(|id| (CorrectionId::new(*id), json!({ "id": id, "suggestion": "fix" })))
                    .collect(),
                text: "Original resume body.".to_string(),
                apply_enabled: true,
                notifications: Vec::new(),
            }
        }

        fn is_checked(&self, id: &str) -> bool {
            self.boxes.iter().any(|(b, checked)| b.as_str() == id && *checked)
        }
    }

    impl CorrectionView for FakeView {
        fn checked_ids(&self) -> Vec<CorrectionId> {
            self.boxes.iter().filter(|(_, c)| *c).map(|(id, _)| id.clone()).collect()
        }

        fn payload(&self, id: &CorrectionId) -> Option<Value> {
            self.payloads.get(id).cloned()
        }

        fn resume_text(&self) -> String {
            self.text.clone()
        }

        fn set_resume_text(&mut self, text: &str) {
            self.text = text.to_string();
        }

        fn uncheck(&mut self, id: &CorrectionId) {
            for (b, checked) in &mut self.boxes {
                if b == id {
                    *checked = false;
                }
            }
        }

        fn set_apply_enabled(&mut self, enabled: bool) {
            self.apply_enabled = enabled;
        }

        fn notify(&mut self, kind: AlertKind, message: &str) {
            self.notifications.push((kind, message.to_string()));
        }
    }

    /// Flip a box the way a user click would, then deliver the change event
    fn click(controller: &mut CorrectionController<FakeView>, id: &str) {
        let checked = {
            let entry = controller
                .view_mut()
                .boxes
                .iter_mut()
                .find(|(b, _)| b.as_str() == id)
                .unwrap();
            entry.1 = !entry.1;
            entry.1
        };
        controller.toggle(CorrectionId::new(id), checked);
    }

    fn controller() -> CorrectionController<FakeView> {
        CorrectionController::new(FakeView::new(&["c1", "c2", "c3"]))
    }

    #[test]
    fn test_starts_idle_empty_with_apply_disabled() {
        let c = controller();
        assert_eq!(c.phase(), Phase::IdleEmpty);
        assert!(!c.view().apply_enabled);
    }

    #[test]
    fn test_apply_enabled_iff_selection_non_empty() {
        let mut c = controller();
        for id in ["c1", "c2", "c1", "c3", "c2", "c3", "c3", "c3"] {
            click(&mut c, id);
            assert_eq!(c.view().apply_enabled, !c.selection().is_empty());
        }
    }

    #[test]
    fn test_empty_submit_never_builds_request() {
        let mut c = controller();
        assert!(c.begin_apply().is_none());
        assert_eq!(c.phase(), Phase::IdleEmpty);
        assert_eq!(c.view().notifications.len(), 1);
        assert_eq!(c.view().notifications[0].0, AlertKind::Warning);
    }

    #[test]
    fn test_successful_apply_of_subset() {
        let mut c = controller();
        click(&mut c, "c1");
        click(&mut c, "c3");

        let request = c.begin_apply().unwrap();
        assert_eq!(c.phase(), Phase::Submitting);
        assert!(!c.view().apply_enabled);
        assert_eq!(request.resume_text, "Original resume body.");
        assert_eq!(
            request.selected_corrections,
            vec![
                json!({"id": "c1", "suggestion": "fix"}),
                json!({"id": "c3", "suggestion": "fix"}),
            ]
        );

        let outcome = c.finish_apply(Ok("Fixed résumé body.".to_string()));

        assert_eq!(outcome, ApplyOutcome::Applied { count: 2 });
        let view = c.view();
        assert_eq!(view.text, "Fixed résumé body.");
        assert!(!view.is_checked("c1"));
        assert!(!view.is_checked("c3"));
        assert!(!view.is_checked("c2"));
        assert!(!view.apply_enabled);
        assert_eq!(c.phase(), Phase::IdleEmpty);
        assert_eq!(view.notifications.len(), 1);
        assert_eq!(view.notifications[0].0, AlertKind::Success);
        assert!(view.notifications[0].1.contains("2 correction(s)"));
    }

    #[test]
    fn test_failed_apply_leaves_state_untouched() {
        let mut c = controller();
        click(&mut c, "c1");
        click(&mut c, "c3");
        let selection_before = c.selection().clone();

        c.begin_apply().unwrap();
        let outcome = c.finish_apply(Err(ApplyError::Transport("network down".to_string())));

        assert_eq!(
            outcome,
            ApplyOutcome::Failed(ApplyError::Transport("network down".to_string()))
        );
        let view = c.view();
        assert_eq!(view.text, "Original resume body.");
        assert!(view.is_checked("c1"));
        assert!(view.is_checked("c3"));
        assert!(view.apply_enabled);
        assert_eq!(c.selection(), &selection_before);
        assert_eq!(c.phase(), Phase::IdleSelected);
        assert_eq!(view.notifications.len(), 1);
        assert_eq!(view.notifications[0].0, AlertKind::Danger);
    }

    #[test]
    fn test_missing_corrected_text_is_a_failure() {
        let mut c = controller();
        click(&mut c, "c2");
        c.begin_apply().unwrap();

        let outcome = c.finish_apply(Err(ApplyError::MissingCorrectedText));

        assert!(matches!(outcome, ApplyOutcome::Failed(_)));
        assert!(c.view().is_checked("c2"));
        assert_eq!(c.view().text, "Original resume body.");
    }

    #[test]
    fn test_toggle_during_flight_only_affects_next_submission() {
        let mut c = controller();
        click(&mut c, "c1");
        let request = c.begin_apply().unwrap();
        assert_eq!(request.len(), 1);

        click(&mut c, "c2");
        assert!(!c.view().apply_enabled);
        assert_eq!(c.phase(), Phase::Submitting);

        c.finish_apply(Ok("Fixed.".to_string()));

        assert!(!c.view().is_checked("c1"));
        assert!(c.view().is_checked("c2"));
        assert!(c.view().apply_enabled);
        assert_eq!(c.selection().snapshot(), vec![CorrectionId::new("c2")]);
        assert_eq!(c.phase(), Phase::IdleSelected);
    }

    #[test]
    fn test_second_click_while_submitting_is_inert() {
        let mut c = controller();
        click(&mut c, "c1");
        assert!(c.begin_apply().is_some());
        assert!(c.begin_apply().is_none());
        assert!(c.view().notifications.is_empty());
    }

    #[test]
    fn test_payload_resolved_at_click_time() {
        let mut c = controller();
        click(&mut c, "c1");
        c.view_mut()
            .payloads
            .insert(CorrectionId::new("c1"), json!({"suggestion": "late edit"}));

        let request = c.begin_apply().unwrap();
        assert_eq!(request.selected_corrections, vec![json!({"suggestion": "late edit"})]);
    }

    #[test]
    fn test_unresolvable_payload_is_skipped() {
        let mut c = controller();
        click(&mut c, "c1");
        click(&mut c, "c2");
        c.view_mut().payloads.remove(&CorrectionId::new("c2"));

        let request = c.begin_apply().unwrap();
        assert_eq!(request.len(), 1);

        c.finish_apply(Ok("Fixed.".to_string()));
        assert!(!c.view().is_checked("c1"));
        assert!(c.view().is_checked("c2"));
    }

    #[test]
    fn test_no_resolvable_payload_sends_nothing() {
        let mut c = controller();
        click(&mut c, "c1");
        c.view_mut().payloads.clear();

        assert!(c.begin_apply().is_none());
        assert_eq!(c.phase(), Phase::IdleSelected);
        assert_eq!(c.view().notifications[0].0, AlertKind::Warning);
    }

    #[test]
    fn test_stray_response_is_ignored() {
        let mut c = controller();
        assert_eq!(c.finish_apply(Ok("x".to_string())), ApplyOutcome::Ignored);
        assert_eq!(c.view().text, "Original resume body.");
    }

    #[test]
    fn test_seeds_selection_from_restored_checkboxes() {
        let mut view = FakeView::new(&["c1", "c2"]);
        view.boxes[1].1 = true;
        view.apply_enabled = false;

        let c = CorrectionController::new(view);

        assert_eq!(c.phase(), Phase::IdleSelected);
        assert!(c.view().apply_enabled);
    }
}
