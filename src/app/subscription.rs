// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, Screen};
use crate::ui::navbar;
use iced::keyboard::{self, key};
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for the rotating sections and the
/// stats count-up.
///
/// The timer only runs on screens that animate: the services and
/// highlights rotators, and the network screen while its counters are
/// still counting up. Everything else leaves the event loop idle.
pub fn create_tick_subscription(screen: Screen, stats_running: bool) -> Subscription<Message> {
    let needs_ticks = match screen {
        Screen::Services | Screen::Highlights => true,
        Screen::Network => stats_running,
        Screen::Faq | Screen::Settings => false,
    };

    if needs_ticks {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Dismisses any open navbar dropdown when Escape is pressed.
pub fn create_escape_subscription() -> Subscription<Message> {
    keyboard::listen().filter_map(|event| match event {
        keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        } => Some(Message::Navbar(navbar::Message::CloseMenus)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriptions_build_for_every_screen() {
        // Smoke test: building the subscription must not panic for any
        // screen/animation combination.
        for screen in [
            Screen::Network,
            Screen::Services,
            Screen::Highlights,
            Screen::Faq,
            Screen::Settings,
        ] {
            let _ = create_tick_subscription(screen, false);
            let _ = create_tick_subscription(screen, true);
        }
        let _ = create_escape_subscription();
    }
}
