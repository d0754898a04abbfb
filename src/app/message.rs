// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::ui::faq;
use crate::ui::highlights;
use crate::ui::map;
use crate::ui::navbar;
use crate::ui::services;
use crate::ui::theming::ThemeMode;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Launch parameters parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub lang: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Map(map::Message),
    Services(services::Message),
    Highlights(highlights::Message),
    Faq(faq::Message),
    SwitchScreen(Screen),
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    RotationTickInputChanged(String),
    RotationResumeInputChanged(String),
    ApplyRotationTiming,
    /// Periodic tick driving the rotators and the stats count-up.
    Tick(Instant),
}
