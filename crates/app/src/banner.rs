//! Transient banners with a bounded display duration.

use tutorhub_domain::time::{Timestamp, after_seconds};

/// How long a success banner stays visible.
pub const SUCCESS_BANNER_SECONDS: u32 = 30;
/// How long an error banner stays visible.
pub const ERROR_BANNER_SECONDS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub expires_at: Timestamp,
}

impl Banner {
    #[must_use]
    pub fn success(message: impl Into<String>, now: Timestamp) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
            expires_at: after_seconds(now, SUCCESS_BANNER_SECONDS),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>, now: Timestamp) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            expires_at: after_seconds(now, ERROR_BANNER_SECONDS),
        }
    }

    #[must_use]
    pub fn is_visible(&self, now: Timestamp) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorhub_domain::time::now;

    #[test]
    fn should_hide_success_banner_after_thirty_seconds() {
        let t0 = now();
        let banner = Banner::success("saved", t0);
        assert!(banner.is_visible(after_seconds(t0, 29)));
        assert!(!banner.is_visible(after_seconds(t0, 30)));
    }

    #[test]
    fn should_hide_error_banner_after_three_seconds() {
        let t0 = now();
        let banner = Banner::error("oops", t0);
        assert!(banner.is_visible(t0));
        assert!(!banner.is_visible(after_seconds(t0, 3)));
    }
}
