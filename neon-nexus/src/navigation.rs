pub const DEFAULT_BREAKPOINT: u32 = 800;

/// `aria-expanded` state of the menu toggle and the link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub toggle_expanded: bool,
    pub list_expanded: bool,
    pub viewport_width: u32,
    breakpoint: u32,
}

impl NavState {
    pub fn new(viewport_width: u32, breakpoint: u32) -> Self {
        let mut nav = NavState {
            toggle_expanded: false,
            list_expanded: false,
            viewport_width,
            breakpoint,
        };
        nav.resize(viewport_width);
        nav
    }

    pub fn is_wide(&self) -> bool {
        self.viewport_width > self.breakpoint
    }

    pub fn toggle(&mut self) {
        let expanded = !self.toggle_expanded;
        self.toggle_expanded = expanded;
        self.list_expanded = expanded;
    }

    /// A link in the menu was followed. Only collapses on narrow viewports.
    pub fn link_clicked(&mut self) -> bool {
        if self.is_wide() {
            return false;
        }
        self.toggle_expanded = false;
        self.list_expanded = false;
        true
    }

    pub fn resize(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
        if self.is_wide() {
            self.list_expanded = true;
            self.toggle_expanded = false;
        } else {
            self.list_expanded = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewport_starts_with_list_open() {
        let nav = NavState::new(1280, DEFAULT_BREAKPOINT);
        assert!(nav.list_expanded);
        assert!(!nav.toggle_expanded);
    }

    #[test]
    fn narrow_viewport_starts_collapsed() {
        let nav = NavState::new(800, DEFAULT_BREAKPOINT);
        assert!(!nav.list_expanded);
        assert!(!nav.toggle_expanded);
    }

    #[test]
    fn toggle_flips_both_attributes() {
        let mut nav = NavState::new(375, DEFAULT_BREAKPOINT);
        nav.toggle();
        assert!(nav.toggle_expanded && nav.list_expanded);
        nav.toggle();
        assert!(!nav.toggle_expanded && !nav.list_expanded);
    }

    #[test]
    fn link_click_collapses_only_when_narrow() {
        let mut narrow = NavState::new(600, DEFAULT_BREAKPOINT);
        narrow.toggle();
        assert!(narrow.link_clicked());
        assert!(!narrow.list_expanded);

        let mut wide = NavState::new(1024, DEFAULT_BREAKPOINT);
        assert!(!wide.link_clicked());
        assert!(wide.list_expanded);
    }

    #[test]
    fn resize_across_breakpoint_resets_menu() {
        let mut nav = NavState::new(600, DEFAULT_BREAKPOINT);
        nav.toggle();
        nav.resize(1200);
        assert!(nav.list_expanded);
        assert!(!nav.toggle_expanded);
        nav.resize(700);
        assert!(!nav.list_expanded);
    }
}
