//! Page and form entities for the visitor pass window

use std::collections::BTreeMap;

use gpui::{AppContext as _, Context, Entity, Window};
use gpui_component::input::{InputEvent, InputState as GpuiInputState};

use crate::api::GuardDeskClient;
use crate::components::toast::NotificationCenter;
use crate::config::AppConfig;
use crate::form::FormState;
use crate::models::FieldId;
use crate::schema::{FieldKind, FormSchema};
use crate::theme::FormTheme;

/// Page: static header plus the one mounted form
pub struct App {
    pub theme: FormTheme,
    pub form: Entity<VisitorForm>,
    pub notifications: Entity<NotificationCenter>,
}

impl App {
    pub fn new(config: AppConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let theme = FormTheme::new();

        let notifications =
            cx.new(|_| NotificationCenter::new(theme.clone(), config.toast_duration));

        let form = cx.new(|cx| {
            VisitorForm::new(
                FormSchema::for_variant(config.variant),
                GuardDeskClient::new(Some(config.submit_delay)),
                notifications.clone(),
                theme.clone(),
                window,
                cx,
            )
        });

        Self {
            theme,
            form,
            notifications,
        }
    }
}

/// Visitor registration form
pub struct VisitorForm {
    pub theme: FormTheme,
    pub state: FormState,

    // One input per text or text-area field, with IME support
    pub inputs: BTreeMap<FieldId, Entity<GpuiInputState>>,
    pub recipient_menu_open: bool,

    pub client: GuardDeskClient,
    pub notifications: Entity<NotificationCenter>,
}

impl VisitorForm {
    pub fn new(
        schema: FormSchema,
        client: GuardDeskClient,
        notifications: Entity<NotificationCenter>,
        theme: FormTheme,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut inputs = BTreeMap::new();

        for spec in &schema.fields {
            let kind = spec.kind();
            if kind == FieldKind::Select {
                continue;
            }
            let field = spec.id;
            let placeholder = spec.placeholder;
            let input_state = cx.new(|cx| {
                GpuiInputState::new(window, cx)
                    .multi_line(kind == FieldKind::TextArea)
                    .placeholder(placeholder)
            });

            cx.subscribe_in(
                &input_state,
                window,
                move |this, input_state: &Entity<GpuiInputState>, event: &InputEvent, window, cx| {
                    match event {
                        InputEvent::Change { .. } => {
                            let text = input_state.read(cx).value().to_string();
                            this.on_field_changed(field, text, cx);
                        }
                        // Enter in a text area is a line break
                        InputEvent::PressEnter { .. } if kind == FieldKind::Text => {
                            this.submit(window, cx);
                        }
                        _ => {}
                    }
                },
            )
            .detach();

            inputs.insert(field, input_state);
        }

        tracing::debug!(
            variant = ?schema.variant,
            fields = schema.fields.len(),
            "visitor form mounted"
        );

        Self {
            theme,
            state: FormState::new(schema),
            inputs,
            recipient_menu_open: false,
            client,
            notifications,
        }
    }

    /// Focus the first text input
    pub fn focus_first(&self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(input_state) = self.inputs.get(&FieldId::FullName) {
            input_state.update(cx, |state, cx| {
                state.focus(window, cx);
            });
        }
    }
}
