//! Host environment description and the mobile-refusal check.
//!
//! The engine is mouse-only: on touch-capable small screens, or when the
//! host's user-agent string matches a known mobile device, installation is
//! refused entirely rather than degraded.

use crate::geometry::Point;

/// Viewport width at or below which a touch-capable device counts as mobile.
const SMALL_VIEWPORT_MAX: f32 = 768.0;

/// Case-insensitive substrings that mark a user agent as a mobile device.
const MOBILE_HINTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Description of the host environment the effects run in.
#[derive(Debug, Clone)]
pub struct Platform {
    pub touch_points: u32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub user_agent: String,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            touch_points: 0,
            viewport_width: 1920.0,
            viewport_height: 1080.0,
            user_agent: String::new(),
        }
    }
}

impl Platform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_points(mut self, points: u32) -> Self {
        self.touch_points = points;
        self
    }

    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width / 2.0, self.viewport_height / 2.0)
    }

    /// Whether this environment counts as mobile: touch capability combined
    /// with a small viewport, or a recognized mobile user agent.
    pub fn is_mobile(&self) -> bool {
        if self.touch_points > 0 && self.viewport_width <= SMALL_VIEWPORT_MAX {
            return true;
        }
        let ua = self.user_agent.to_ascii_lowercase();
        MOBILE_HINTS.iter().any(|hint| ua.contains(hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_is_not_mobile() {
        let platform = Platform::new().viewport(1920.0, 1080.0).user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36",
        );
        assert!(!platform.is_mobile());
    }

    #[test]
    fn test_touch_small_viewport_is_mobile() {
        let platform = Platform::new().touch_points(5).viewport(390.0, 844.0);
        assert!(platform.is_mobile());
    }

    #[test]
    fn test_touch_large_viewport_is_not_mobile() {
        // Touch-capable desktop monitor
        let platform = Platform::new().touch_points(10).viewport(2560.0, 1440.0);
        assert!(!platform.is_mobile());
    }

    #[test]
    fn test_user_agent_match_is_mobile() {
        let platform = Platform::new()
            .viewport(1024.0, 1366.0)
            .user_agent("Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15");
        assert!(platform.is_mobile());
    }

    #[test]
    fn test_user_agent_match_is_case_insensitive() {
        let platform = Platform::new().user_agent("Opera Mini/36.2");
        assert!(platform.is_mobile());
    }

    #[test]
    fn test_viewport_center() {
        let platform = Platform::new().viewport(1920.0, 1080.0);
        assert_eq!(platform.viewport_center(), Point::new(960.0, 540.0));
    }
}
