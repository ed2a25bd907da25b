//! Navigation bar state.
//!
//! Three independent flags, each a total function of user or layout events.
//! The web crate wraps [`NavState`] in a signal and drives it from DOM
//! listeners; everything here is plain data so the rules can be tested
//! without a browser.

/// Vertical offset (px) past which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Viewport width (px) at and above which the desktop layout applies.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// Whether a vertical scroll offset counts as "scrolled".
#[inline]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Presentation mode chosen from the viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Inline links and actions in the bar.
    #[default]
    Desktop,
    /// Links and actions only in the slide-out panel.
    Mobile,
}

/// Media query that matches the desktop layout.
pub fn desktop_media_query() -> String {
    format!("(min-width: {DESKTOP_BREAKPOINT_PX}px)")
}

impl Layout {
    /// Layout for the result of [`desktop_media_query`].
    pub fn from_desktop_match(matches: bool) -> Self {
        if matches { Self::Desktop } else { Self::Mobile }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Header styling variant, derived only from the scrolled flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Opaque background, no shadow.
    Solid,
    /// Translucent blurred background with a shadow.
    Elevated,
}

/// Mutable state of the navigation bar for its rendered lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    mounted: bool,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Record the first post-render pass.
    ///
    /// Returns `true` only for the call that performed the transition; the
    /// flag never reverts.
    pub fn mount(&mut self) -> bool {
        let first = !self.mounted;
        self.mounted = true;
        first
    }

    /// Apply a scroll event. Returns `true` if the flag changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn header_variant(&self) -> HeaderVariant {
        if self.scrolled {
            HeaderVariant::Elevated
        } else {
            HeaderVariant::Solid
        }
    }

    /// Theme-dependent controls exist only after mount.
    pub fn theme_toggle_visible(&self) -> bool {
        self.mounted
    }

    /// Close the panel. Returns `true` if it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A link or auth action inside the panel was chosen.
    pub fn select_link(&mut self) {
        self.menu_open = false;
    }

    /// Apply a layout change. Reaching the desktop layout dismisses the
    /// panel. Returns `true` if the state changed.
    pub fn on_layout(&mut self, layout: Layout) -> bool {
        match layout {
            Layout::Desktop => self.close_menu(),
            Layout::Mobile => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(9.5));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.01));
        assert!(is_scrolled(50.0));
        assert!(!is_scrolled(-4.0));
    }

    #[test]
    fn test_mount_happens_once() {
        let mut state = NavState::new();
        assert!(!state.mounted());
        assert!(!state.theme_toggle_visible());

        assert!(state.mount());
        assert!(state.mounted());
        assert!(state.theme_toggle_visible());

        assert!(!state.mount());
        state.on_scroll(100.0);
        state.toggle_menu();
        state.close_menu();
        assert!(state.mounted());
    }

    #[test]
    fn test_scroll_tracks_latest_offset_only() {
        let mut state = NavState::new();
        for i in 0..20 {
            let offset = if i % 2 == 0 { 0.0 } else { 50.0 };
            state.on_scroll(offset);
            assert_eq!(state.scrolled(), offset > 10.0);
        }

        let offsets = [0.0, 50.0, 50.0, 11.0, 10.0, 3.0, 60.0, 0.0, 0.0, 12.0];
        for offset in offsets {
            state.on_scroll(offset);
            assert_eq!(state.scrolled(), is_scrolled(offset));
        }
    }

    #[test]
    fn test_on_scroll_reports_changes_only() {
        let mut state = NavState::new();
        assert!(!state.on_scroll(5.0));
        assert!(state.on_scroll(40.0));
        assert!(!state.on_scroll(80.0));
        assert!(state.on_scroll(0.0));
    }

    #[test]
    fn test_header_variant_follows_scrolled() {
        let mut state = NavState::new();
        assert_eq!(state.header_variant(), HeaderVariant::Solid);
        state.on_scroll(30.0);
        assert_eq!(state.header_variant(), HeaderVariant::Elevated);

        // Menu and mount flags have no bearing on the variant.
        state.toggle_menu();
        state.mount();
        assert_eq!(state.header_variant(), HeaderVariant::Elevated);
        state.on_scroll(10.0);
        assert_eq!(state.header_variant(), HeaderVariant::Solid);
    }

    #[test]
    fn test_select_link_always_closes() {
        for start_open in [false, true] {
            let mut state = NavState::new();
            if start_open {
                state.toggle_menu();
            }
            state.select_link();
            assert!(!state.menu_open());
        }
    }

    #[test]
    fn test_menu_flag_independent_of_scroll() {
        let mut state = NavState::new();
        state.toggle_menu();
        state.on_scroll(200.0);
        assert!(state.menu_open());
        assert!(state.close_menu());
        assert!(state.scrolled());
        assert!(!state.close_menu());

        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(desktop_media_query(), "(min-width: 768px)");
        assert_eq!(Layout::from_desktop_match(true), Layout::Desktop);
        assert!(Layout::from_desktop_match(false).is_mobile());
    }

    #[test]
    fn test_desktop_layout_closes_menu() {
        let mut state = NavState::new();
        state.toggle_menu();
        assert!(!state.on_layout(Layout::Mobile));
        assert!(state.menu_open());

        assert!(state.on_layout(Layout::Desktop));
        assert!(!state.menu_open());
        assert!(!state.on_layout(Layout::Desktop));

        // Returning to mobile does not reopen it.
        assert!(!state.on_layout(Layout::Mobile));
        assert!(!state.menu_open());
    }
}
