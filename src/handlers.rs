//! Event handling and the submission lifecycle for the visitor form

use gpui::{ClickEvent, Context, Window};

use crate::api::SubmissionReceipt;
use crate::app::VisitorForm;
use crate::error::SubmitError;
use crate::models::{FieldId, Toast, VisitRequest};

impl VisitorForm {
    pub fn on_field_changed(&mut self, field: FieldId, text: String, cx: &mut Context<Self>) {
        if self.state.value(field) == text {
            return;
        }
        if self.state.set_value(field, text) {
            tracing::trace!(field = field.key(), "field updated");
            cx.notify();
        }
    }

    pub fn toggle_recipient_menu(&mut self, cx: &mut Context<Self>) {
        self.recipient_menu_open = !self.recipient_menu_open;
        cx.notify();
    }

    pub fn select_recipient(&mut self, id: &'static str, cx: &mut Context<Self>) {
        self.recipient_menu_open = false;
        if self.state.schema().directory.contains(id) {
            self.state.set_value(FieldId::Recipient, id);
        }
        cx.notify();
    }

    pub fn handle_submit_click(
        &mut self,
        _event: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.submit(window, cx);
    }

    pub fn handle_reset_click(
        &mut self,
        _event: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        tracing::debug!("form cleared by user");
        self.state.reset();
        self.clear_inputs(window, cx);
        cx.notify();
    }

    /// Validate, then hand the request to the security desk in the background
    pub fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.recipient_menu_open = false;

        let request = match self.state.begin_submit() {
            Ok(request) => request,
            Err(SubmitError::InProgress) => {
                tracing::debug!("submit ignored, request already in flight");
                return;
            }
            Err(err @ SubmitError::Invalid(_)) => {
                let failed: Vec<_> = self.state.errors().keys().map(|id| id.key()).collect();
                tracing::debug!(%err, ?failed, "visit request rejected");
                cx.notify();
                return;
            }
        };
        cx.notify();
        tracing::info!(
            delay_ms = self.client.delay().as_millis() as u64,
            "submitting visit request"
        );

        let client = self.client.clone();
        cx.spawn_in(window, async move |this, cx| {
            let result = client.submit(&request).await;

            let _ = this.update_in(cx, |form, window, cx| match result {
                Ok(receipt) => form.complete_submission(request, receipt, window, cx),
                Err(e) => {
                    tracing::error!(error = %e, "failed to send visit request");
                    form.state.abort_submit();
                    cx.notify();
                }
            });
        })
        .detach();
    }

    fn complete_submission(
        &mut self,
        request: VisitRequest,
        receipt: SubmissionReceipt,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let copy = &self.state.schema().copy;
        let toast = Toast::success(copy.success_title, copy.success_description);
        self.notifications.update(cx, |center, cx| {
            center.push(toast, cx);
        });

        tracing::info!(
            submission_id = %receipt.id,
            submitted_at = %receipt.submitted_at.format("%Y-%m-%d %H:%M:%S"),
            visitor = %request.full_name,
            recipient = %request.recipient,
            values = %receipt.payload,
            "visit request handed over to the security desk"
        );

        self.state.finish_submit();
        self.clear_inputs(window, cx);
        cx.notify();
    }

    fn clear_inputs(&self, window: &mut Window, cx: &mut Context<Self>) {
        for input_state in self.inputs.values() {
            input_state.update(cx, |state, cx| {
                state.set_value("", window, cx);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gpui::{AppContext as _, Entity, TestAppContext, VisualTestContext};
    use gpui_component::input::InputEvent;
    use gpui_component::Root;

    use super::*;
    use crate::api::GuardDeskClient;
    use crate::components::toast::NotificationCenter;
    use crate::schema::{FormSchema, FormVariant};
    use crate::theme::FormTheme;

    fn mount(
        variant: FormVariant,
        cx: &mut TestAppContext,
    ) -> (Entity<VisitorForm>, Entity<NotificationCenter>, &mut VisualTestContext) {
        cx.update(|cx| gpui_component::init(cx));

        let notifications =
            cx.new(|_| NotificationCenter::new(FormTheme::new(), Duration::from_secs(60)));
        let mut form = None;
        let (_root, cx) = cx.add_window_view(|window, cx| {
            let entity = cx.new(|cx| {
                VisitorForm::new(
                    FormSchema::for_variant(variant),
                    GuardDeskClient::new(Some(Duration::ZERO)),
                    notifications.clone(),
                    FormTheme::new(),
                    window,
                    cx,
                )
            });
            form = Some(entity.clone());
            Root::new(entity, window, cx)
        });

        (form.unwrap(), notifications, cx)
    }

    fn type_into(
        form: &mut VisitorForm,
        field: FieldId,
        text: &str,
        window: &mut Window,
        cx: &mut Context<VisitorForm>,
    ) {
        if let Some(input_state) = form.inputs.get(&field).cloned() {
            input_state.update(cx, |state, cx| state.set_value(text.to_string(), window, cx));
        }
        form.on_field_changed(field, text.to_string(), cx);
    }

    fn fill_valid(form: &mut VisitorForm, window: &mut Window, cx: &mut Context<VisitorForm>) {
        type_into(form, FieldId::FullName, "Иванов Иван", window, cx);
        type_into(form, FieldId::Organization, "ООО Ромашка", window, cx);
        type_into(form, FieldId::VisitDuration, "1 час", window, cx);
        type_into(form, FieldId::RoomNumber, "305", window, cx);
        form.select_recipient("2", cx);
    }

    #[gpui::test]
    fn test_submit_shows_toast_and_clears_inputs(cx: &mut TestAppContext) {
        let (form, notifications, cx) = mount(FormVariant::Standard, cx);

        form.update_in(cx, |form, window, cx| {
            fill_valid(form, window, cx);
            form.submit(window, cx);
            assert!(form.state.is_submitting());
            // second press while the first request is in flight
            form.submit(window, cx);
        });
        cx.run_until_parked();

        notifications.read_with(cx, |center, _| {
            assert_eq!(center.toasts().len(), 1);
            assert_eq!(center.toasts()[0].title, "Форма отправлена успешно");
        });
        form.read_with(cx, |form, cx| {
            assert!(!form.state.is_submitting());
            assert!(!form.state.is_dirty());
            assert_eq!(form.state.value(FieldId::Recipient), "");
            for input_state in form.inputs.values() {
                assert!(input_state.read(cx).value().is_empty());
            }
        });
    }

    #[gpui::test]
    fn test_invalid_submit_keeps_values_and_shows_errors(cx: &mut TestAppContext) {
        let (form, notifications, cx) = mount(FormVariant::Standard, cx);

        form.update_in(cx, |form, window, cx| {
            type_into(form, FieldId::FullName, "Ив", window, cx);
            form.submit(window, cx);
        });
        cx.run_until_parked();

        notifications.read_with(cx, |center, _| assert!(center.toasts().is_empty()));
        form.read_with(cx, |form, cx| {
            assert!(!form.state.is_submitting());
            assert_eq!(form.state.errors().len(), 5);
            assert_eq!(
                form.state.error(FieldId::FullName),
                Some("ФИО должно содержать не менее 3 символов")
            );
            let full_name = &form.inputs[&FieldId::FullName];
            assert_eq!(full_name.read(cx).value().to_string(), "Ив");
        });
    }

    #[gpui::test]
    fn test_select_recipient_outside_directory_is_ignored(cx: &mut TestAppContext) {
        let (form, _notifications, cx) = mount(FormVariant::Standard, cx);

        form.update_in(cx, |form, _window, cx| {
            form.toggle_recipient_menu(cx);
            assert!(form.recipient_menu_open);

            form.select_recipient("42", cx);
            assert!(!form.recipient_menu_open);
            assert_eq!(form.state.value(FieldId::Recipient), "");

            form.select_recipient("5", cx);
            assert_eq!(form.state.value(FieldId::Recipient), "5");
        });
    }

    #[gpui::test]
    fn test_material_purpose_is_a_text_area(cx: &mut TestAppContext) {
        let (form, notifications, cx) = mount(FormVariant::Material, cx);

        form.update_in(cx, |form, window, cx| {
            assert!(form.inputs.contains_key(&FieldId::VisitPurpose));
            assert!(!form.inputs.contains_key(&FieldId::Recipient));

            type_into(form, FieldId::VisitPurpose, "Переговоры\nпо договору", window, cx);
            assert_eq!(
                form.state.value(FieldId::VisitPurpose),
                "Переговоры\nпо договору"
            );
        });

        // Enter inside the text area must not submit
        let purpose = form.read_with(cx, |form, _| form.inputs[&FieldId::VisitPurpose].clone());
        purpose.update(cx, |_, cx| cx.emit(InputEvent::PressEnter { secondary: false }));
        cx.run_until_parked();

        form.read_with(cx, |form, _| {
            assert!(!form.state.is_submitting());
            assert!(form.state.errors().is_empty());
        });
        notifications.read_with(cx, |center, _| assert!(center.toasts().is_empty()));
    }

    #[gpui::test]
    fn test_toast_dismiss(cx: &mut TestAppContext) {
        let (_form, notifications, cx) = mount(FormVariant::Standard, cx);

        let toast = Toast::success("Форма отправлена успешно", "");
        let toast_id = toast.id.clone();
        notifications.update(cx, |center, cx| {
            center.push(toast, cx);
            center.dismiss("unknown", cx);
            assert_eq!(center.toasts().len(), 1);

            center.dismiss(&toast_id, cx);
            assert!(center.toasts().is_empty());
        });
    }
}
