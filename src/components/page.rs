//! Page layout: header card, the form, and the toast layer

use gpui::{
    div, px, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::App;

const PAGE_TITLE: &str = "Форма для входа в здание МЭКР";
const PAGE_SUBTITLE: &str =
    "Пожалуйста, заполните все необходимые поля для регистрации вашего визита";

impl App {
    pub fn render_header(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .px_6()
            .py_6()
            .bg(theme.card_background)
            .border_t_8()
            .border_color(theme.accent)
            .rounded(px(8.))
            .shadow_sm()
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.foreground)
                    .mb_2()
                    .child(PAGE_TITLE),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.foreground_muted)
                    .child(PAGE_SUBTITLE),
            )
    }
}

impl Render for App {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .size_full()
            .relative()
            .bg(theme.page_background)
            .text_color(theme.foreground)
            .child(
                div()
                    .id("page-scroll")
                    .size_full()
                    .overflow_y_scroll()
                    .flex()
                    .flex_col()
                    .items_center()
                    .px_4()
                    .py_12()
                    .child(
                        div()
                            .w_full()
                            .max_w(px(576.))
                            .flex()
                            .flex_col()
                            .gap_4()
                            .child(self.render_header())
                            .child(self.form.clone()),
                    ),
            )
            // Toasts float above the page, top center
            .child(
                div()
                    .absolute()
                    .top_4()
                    .left_0()
                    .right_0()
                    .flex()
                    .justify_center()
                    .child(self.notifications.clone()),
            )
    }
}
