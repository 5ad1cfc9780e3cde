//! Screen state machine
//!
//! Navigation is flat: every screen other than the splash is entered from the
//! main menu and "back" always lands on the main menu. There is no history.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::NavError;
use crate::menu::Course;

/// Delay before the splash screen advances on its own
pub const SPLASH_DELAY: Duration = Duration::from_millis(3000);

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    MainMenu,
    Category(Course),
    Filter,
    Chef,
}

/// Things that move between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    SplashElapsed,
    OpenCategory(Course),
    OpenFilter,
    OpenChef,
    Back,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Splash => "Welcome",
            Screen::MainMenu => "Main Menu",
            Screen::Category(course) => course.label(),
            Screen::Filter => "Filter Menu Items",
            Screen::Chef => "Chef Control Panel",
        }
    }

    /// Where `action` leads from here, if anywhere
    pub fn transition(&self, action: NavAction) -> Option<Screen> {
        match (self, action) {
            (Screen::Splash, NavAction::SplashElapsed) => Some(Screen::MainMenu),
            (Screen::MainMenu, NavAction::OpenCategory(course)) => Some(Screen::Category(course)),
            (Screen::MainMenu, NavAction::OpenFilter) => Some(Screen::Filter),
            (Screen::MainMenu, NavAction::OpenChef) => Some(Screen::Chef),
            (Screen::Category(_) | Screen::Filter | Screen::Chef, NavAction::Back) => {
                Some(Screen::MainMenu)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

/// One-shot timer driven by the event loop's ticks
#[derive(Debug, Clone)]
pub struct SplashTimer {
    deadline: Instant,
    state: TimerState,
}

impl SplashTimer {
    pub fn starting_at(start: Instant, delay: Duration) -> Self {
        Self {
            deadline: start + delay,
            state: TimerState::Pending,
        }
    }

    /// True exactly once, on the first poll at or after the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == TimerState::Pending && now >= self.deadline {
            self.state = TimerState::Fired;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        if self.state == TimerState::Pending {
            self.state = TimerState::Cancelled;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == TimerState::Pending
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// Owner of the current screen and the splash timer
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
    splash: SplashTimer,
}

impl Navigator {
    pub fn new(splash_delay: Duration) -> Self {
        Self::starting_at(Instant::now(), splash_delay)
    }

    pub fn starting_at(start: Instant, splash_delay: Duration) -> Self {
        Self {
            screen: Screen::Splash,
            splash: SplashTimer::starting_at(start, splash_delay),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn splash_remaining(&self, now: Instant) -> Duration {
        self.splash.remaining(now)
    }

    /// Apply a user action. Invalid actions leave the screen unchanged.
    pub fn dispatch(&mut self, action: NavAction) -> Result<Screen, NavError> {
        let next = self
            .screen
            .transition(action)
            .ok_or(NavError::InvalidTransition {
                from: self.screen,
                action,
            })?;

        info!(from = ?self.screen, to = ?next, "Screen transition");
        self.screen = next;
        Ok(next)
    }

    /// Advance the splash screen once its delay has passed
    pub fn tick(&mut self, now: Instant) -> Option<Screen> {
        if self.screen != Screen::Splash || !self.splash.poll(now) {
            return None;
        }
        self.dispatch(NavAction::SplashElapsed).ok()
    }

    /// Drop a pending splash advance, e.g. when quitting during the splash
    pub fn shutdown(&mut self) {
        if self.splash.is_pending() {
            debug!("Cancelling pending splash advance");
        }
        self.splash.cancel();
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(SPLASH_DELAY)
    }
}
