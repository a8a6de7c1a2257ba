//! Form card: header, fields and validation messages

use gpui::{
    div, prelude::FluentBuilder, px, AnyElement, Context, FontWeight, IntoElement, ParentElement,
    Render, Styled, Window,
};
use gpui_component::input::Input;

use crate::app::VisitorForm;
use crate::schema::{FieldKind, FieldSpec};

impl VisitorForm {
    fn render_card_header(&self) -> Option<impl IntoElement> {
        let theme = &self.theme;
        let copy = &self.state.schema().copy;

        if copy.badge.is_none() && copy.title.is_none() && copy.description.is_none() {
            return None;
        }

        Some(
            div()
                .w_full()
                .pb_6()
                .flex()
                .flex_col()
                .items_center()
                .gap_1()
                .when_some(copy.badge, |el, badge| {
                    el.child(
                        div()
                            .mb_2()
                            .px_3()
                            .py_1()
                            .rounded_full()
                            .bg(theme.accent_subtle)
                            .text_xs()
                            .text_color(theme.accent)
                            .child(badge),
                    )
                })
                .when_some(copy.title, |el, title| {
                    el.child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.foreground)
                            .child(title),
                    )
                })
                .when_some(copy.description, |el, description| {
                    el.child(
                        div()
                            .text_sm()
                            .text_color(theme.foreground_muted)
                            .child(description),
                    )
                }),
        )
    }

    fn render_label(&self, spec: &FieldSpec) -> impl IntoElement {
        let theme = &self.theme;
        let mark = self.state.schema().copy.mark_required && spec.required();

        div()
            .flex()
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .text_color(theme.foreground)
            .child(spec.label)
            .when(mark, |el| el.child(div().ml(px(2.)).text_color(theme.error).child("*")))
    }

    /// Message under a field; nothing until the field fails its rule
    fn render_error(&self, spec: &FieldSpec) -> Option<impl IntoElement> {
        self.state.error(spec.id).map(|message| {
            div()
                .text_xs()
                .font_weight(FontWeight::MEDIUM)
                .text_color(self.theme.error)
                .child(message)
        })
    }

    fn render_field(&self, spec: &FieldSpec, cx: &Context<Self>) -> AnyElement {
        let theme = &self.theme;
        let has_error = self.state.error(spec.id).is_some();

        let control = match spec.kind() {
            FieldKind::Select => self.render_recipient_select(spec, cx).into_any_element(),
            kind @ (FieldKind::Text | FieldKind::TextArea) => match self.inputs.get(&spec.id) {
                Some(input_state) => div()
                    .w_full()
                    .rounded(px(6.))
                    .border_1()
                    .border_color(if has_error { theme.error } else { theme.border })
                    .when(kind == FieldKind::TextArea, |el| el.min_h(px(96.)))
                    .child(Input::new(input_state))
                    .into_any_element(),
                None => div().into_any_element(),
            },
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_2()
            .child(self.render_label(spec))
            .child(control)
            .children(self.render_error(spec))
            .into_any_element()
    }
}

impl Render for VisitorForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        let fields: Vec<AnyElement> = self
            .state
            .schema()
            .fields
            .iter()
            .map(|spec| self.render_field(spec, cx))
            .collect();

        div()
            .w_full()
            .p_6()
            .bg(theme.card_background)
            .border_1()
            .border_color(theme.border)
            .rounded(px(8.))
            .shadow_sm()
            .flex()
            .flex_col()
            .children(self.render_card_header())
            .child(div().w_full().flex().flex_col().gap_5().children(fields))
            .child(self.render_actions(cx))
    }
}
