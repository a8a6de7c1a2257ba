//! Notification surface: transient toasts at the top of the window

use std::time::Duration;

use gpui::{
    div, prelude::FluentBuilder, px, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::models::Toast;
use crate::theme::FormTheme;

pub struct NotificationCenter {
    theme: FormTheme,
    toasts: Vec<Toast>,
    duration: Duration,
}

impl NotificationCenter {
    pub fn new(theme: FormTheme, duration: Duration) -> Self {
        Self {
            theme,
            toasts: vec![],
            duration,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Show a toast; it goes away on its own after the configured duration
    pub fn push(&mut self, toast: Toast, cx: &mut Context<Self>) {
        let toast_id = toast.id.clone();
        self.toasts.push(toast);
        cx.notify();

        let duration = self.duration;
        cx.spawn(async move |this, cx| {
            smol::Timer::after(duration).await;
            let _ = this.update(cx, |center, cx| {
                center.dismiss(&toast_id, cx);
            });
        })
        .detach();
    }

    pub fn dismiss(&mut self, toast_id: &str, cx: &mut Context<Self>) {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != toast_id);
        if self.toasts.len() != before {
            cx.notify();
        }
    }
}

impl Render for NotificationCenter {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .children(self.toasts().iter().map(|toast| {
                let toast_id = toast.id.clone();
                div()
                    .id(SharedString::from(format!("toast-{}", toast.id)))
                    .occlude()
                    .w(px(360.))
                    .px_4()
                    .py_3()
                    .rounded(px(8.))
                    .bg(theme.card_background)
                    .border_1()
                    .border_color(theme.border)
                    .shadow_lg()
                    .cursor_pointer()
                    .flex()
                    .gap_3()
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.dismiss(&toast_id, cx);
                    }))
                    .child(div().text_color(theme.success).child("✓"))
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(theme.foreground)
                                    .child(toast.title),
                            )
                            .when(!toast.description.is_empty(), |el| {
                                el.child(
                                    div()
                                        .text_xs()
                                        .text_color(theme.foreground_muted)
                                        .child(toast.description),
                                )
                            }),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.foreground_muted)
                            .child(SharedString::from(toast.timestamp.clone())),
                    )
            }))
    }
}
