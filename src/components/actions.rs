//! Submit and reset buttons, plus the footer disclaimer

use gpui::{
    div, prelude::FluentBuilder, px, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, StatefulInteractiveElement, Styled,
};

use crate::app::VisitorForm;

impl VisitorForm {
    pub fn render_actions(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let copy = &self.state.schema().copy;
        let is_submitting = self.state.is_submitting();
        let is_dirty = self.state.is_dirty();

        div()
            .w_full()
            .mt_6()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                // Disabled while a submission is in flight
                div()
                    .id("submit-btn")
                    .w_full()
                    .h(px(44.))
                    .rounded(px(6.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(if is_submitting { theme.accent_disabled } else { theme.accent })
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.foreground_on_accent)
                    .when(!is_submitting, |el| {
                        el.cursor_pointer()
                            .hover(|style| style.bg(theme.accent.opacity(0.9)))
                            .on_click(cx.listener(Self::handle_submit_click))
                    })
                    .child(if is_submitting {
                        copy.submitting_label
                    } else {
                        copy.submit_label
                    }),
            )
            .child(
                div()
                    .id("reset-btn")
                    .w_full()
                    .h(px(40.))
                    .rounded(px(6.))
                    .border_1()
                    .border_color(theme.border)
                    .flex()
                    .items_center()
                    .justify_center()
                    .cursor_pointer()
                    .text_sm()
                    .text_color(if is_dirty { theme.foreground } else { theme.foreground_muted })
                    .hover(|style| style.bg(theme.option_hover))
                    .on_click(cx.listener(Self::handle_reset_click))
                    .child(copy.reset_label),
            )
            .when_some(copy.footer, |el, footer| {
                el.child(
                    div()
                        .pt_2()
                        .px_8()
                        .flex()
                        .justify_center()
                        .text_xs()
                        .text_color(theme.foreground_muted)
                        .child(footer),
                )
            })
    }
}
