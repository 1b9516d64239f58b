// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are narrowed down to the few the
//! landing view reacts to; everything else is dropped here.

use super::Message;
use crate::ui::transition::Transition;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::{Duration, Instant};

/// Frame interval while a transition runs (about 60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Window size changes and the Escape key.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::CloseMenu),
        _ => None,
    })
}

/// Creates a frame tick subscription, active only while one of the
/// transitions still runs.
pub fn create_tick_subscription(transitions: &[&Transition], now: Instant) -> Subscription<Message> {
    if transitions.iter().any(|transition| transition.is_running(now)) {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
