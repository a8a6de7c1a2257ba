//! Closed-set selector for the recipient field

use gpui::{
    deferred, div, prelude::FluentBuilder, px, Context, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled,
};

use crate::app::VisitorForm;
use crate::models::FieldId;
use crate::schema::FieldSpec;

impl VisitorForm {
    pub fn render_recipient_select(
        &self,
        spec: &FieldSpec,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let theme = &self.theme;
        let directory = self.state.schema().directory;
        let selected = self.state.value(FieldId::Recipient);
        let selected_name = directory.display_name(selected);
        let show_menu = self.recipient_menu_open;
        let has_error = self.state.error(spec.id).is_some();

        div()
            .id("recipient-select")
            .relative()
            .w_full()
            .child(
                div()
                    .id("recipient-button")
                    .w_full()
                    .h(px(40.))
                    .px_3()
                    .rounded(px(6.))
                    .bg(theme.card_background)
                    .border_1()
                    .border_color(if has_error {
                        theme.error
                    } else if show_menu {
                        theme.border_focus
                    } else {
                        theme.border
                    })
                    .cursor_pointer()
                    .flex()
                    .items_center()
                    .justify_between()
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.toggle_recipient_menu(cx);
                    }))
                    .child(
                        div()
                            .text_sm()
                            .text_color(if selected_name.is_some() {
                                theme.foreground
                            } else {
                                theme.foreground_muted
                            })
                            .child(selected_name.unwrap_or(spec.placeholder)),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.foreground_muted)
                            .child(if show_menu { "▲" } else { "▼" }),
                    ),
            )
            .when(show_menu, |this| {
                // Top layer so the menu overlaps the fields below; spans the trigger width
                this.child(
                    deferred(
                        div()
                            .id("recipient-menu")
                            .occlude()
                            .absolute()
                            .top(px(44.))
                            .left_0()
                            .right_0()
                            .py_1()
                            .bg(theme.card_background)
                            .border_1()
                            .border_color(theme.border)
                            .rounded(px(6.))
                            .shadow_lg()
                            .flex()
                            .flex_col()
                            .children(directory.entries().iter().map(|recipient| {
                                let recipient_id = recipient.id;
                                let is_selected = recipient.id == selected;
                                div()
                                    .id(SharedString::from(format!("recipient-{}", recipient.id)))
                                    .w_full()
                                    .px_3()
                                    .py_2()
                                    .cursor_pointer()
                                    .text_sm()
                                    .text_color(if is_selected {
                                        theme.accent
                                    } else {
                                        theme.foreground
                                    })
                                    .bg(if is_selected {
                                        theme.option_selected
                                    } else {
                                        theme.card_background
                                    })
                                    .hover(|s| s.bg(theme.option_hover))
                                    .on_click(cx.listener(move |this, _event, _window, cx| {
                                        this.select_recipient(recipient_id, cx);
                                    }))
                                    .child(recipient.name)
                            })),
                    )
                    .with_priority(1),
                )
            })
    }
}
