use std::time::{Instant, Duration};
use log::warn;

use crate::config::anti_spam::{
    MAX_RESPONSES_PER_SECOND, MAX_REQUESTS_PER_SECOND, BAN_DURATION_SECONDS, SUPPRESSIBLE_ERROR_CODES,
};

/// Tracks anti-spam state for a single WebSocket session.
#[derive(Debug)]
pub struct AntiSpamState {
    // Last error code sent (for suppression)
    last_error_code: Option<String>,
    // Start of the current one-second window
    last_tick: Instant,
    responses_this_tick: u32,
    requests_this_tick: u32,
    banned_until: Option<Instant>,
}

impl AntiSpamState {
    pub fn new() -> Self {
        Self {
            last_error_code: None,
            last_tick: Instant::now(),
            responses_this_tick: 0,
            requests_this_tick: 0,
            banned_until: None,
        }
    }

    /// Call at the start of every incoming request (message).
    /// Returns true if the session is currently banned.
    pub fn record_request(&mut self, session: &str) -> bool {
        self.tick();
        self.requests_this_tick += 1;
        if self.requests_this_tick > MAX_REQUESTS_PER_SECOND {
            self.ban(session, "Too many requests per second");
            return true;
        }
        self.is_banned()
    }

    /// Call before every outgoing response (including errors).
    /// Returns true if the session is currently banned.
    pub fn record_response(&mut self, session: &str) -> bool {
        self.tick();
        self.responses_this_tick += 1;
        if self.responses_this_tick > MAX_RESPONSES_PER_SECOND {
            self.ban(session, "Too many responses per second");
            return true;
        }
        self.is_banned()
    }

    /// Call when sending an error. Returns false only for a protocol error
    /// repeating the previous one; command errors are always sent.
    pub fn should_send_error(&mut self, error_code: &str, session: &str) -> bool {
        let suppressible = SUPPRESSIBLE_ERROR_CODES.contains(&error_code);
        if suppressible && self.last_error_code.as_deref() == Some(error_code) {
            warn!("[AntiSpam] Suppressed duplicate error '{}' for session={}", error_code, session);
            return false;
        }
        self.last_error_code = Some(error_code.to_string());
        true
    }

    /// Call when a command succeeded.
    pub fn reset_on_valid_action(&mut self) {
        self.last_error_code = None;
    }

    pub fn is_banned(&self) -> bool {
        self.banned_until.is_some_and(|until| Instant::now() < until)
    }

    /// Remaining ban duration in seconds, or 0 if not banned.
    pub fn ban_remaining_secs(&self) -> u64 {
        self.banned_until
            .map(|until| until.saturating_duration_since(Instant::now()).as_secs())
            .unwrap_or(0)
    }

    fn ban(&mut self, session: &str, reason: &str) {
        let until = Instant::now() + Duration::from_secs(BAN_DURATION_SECONDS);
        self.banned_until = Some(until);
        warn!("[AntiSpam] Banned session={} for {}s: {}", session, BAN_DURATION_SECONDS, reason);
    }

    /// Reset per-second counters if a new second has started.
    fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= Duration::from_secs(1) {
            self.last_tick = now;
            self.responses_this_tick = 0;
            self.requests_this_tick = 0;
        }
    }
}

impl Default for AntiSpamState {
    fn default() -> Self {
        Self::new()
    }
}
