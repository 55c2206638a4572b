//! Open/closed state of the suggestion panel.

use std::fmt;
use std::rc::Rc;

/// Who owns the panel's open flag.
///
/// With [`PanelControl::External`] every open/close goes through the supplied
/// setter, so a parent component (the mobile header) can close the panel
/// together with its own overlay.
#[derive(Clone)]
pub enum PanelControl {
    Internal(bool),
    External {
        is_open: Rc<dyn Fn() -> bool>,
        set_open: Rc<dyn Fn(bool)>,
    },
}

impl PanelControl {
    pub fn internal() -> Self {
        PanelControl::Internal(false)
    }

    pub fn external(is_open: impl Fn() -> bool + 'static, set_open: impl Fn(bool) + 'static) -> Self {
        PanelControl::External {
            is_open: Rc::new(is_open),
            set_open: Rc::new(set_open),
        }
    }

    pub fn is_open(&self) -> bool {
        match self {
            PanelControl::Internal(open) => *open,
            PanelControl::External { is_open, .. } => is_open(),
        }
    }

    pub fn set_open(&mut self, open: bool) {
        match self {
            PanelControl::Internal(current) => *current = open,
            PanelControl::External { set_open, .. } => set_open(open),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, PanelControl::External { .. })
    }
}

impl Default for PanelControl {
    fn default() -> Self {
        Self::internal()
    }
}

impl fmt::Debug for PanelControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelControl::Internal(open) => f.debug_tuple("Internal").field(open).finish(),
            PanelControl::External { is_open, .. } => f
                .debug_struct("External")
                .field("is_open", &is_open())
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_internal_toggle() {
        let mut panel = PanelControl::internal();
        assert!(!panel.is_open());
        panel.set_open(true);
        assert!(panel.is_open());
    }

    #[test]
    fn test_external_routes_through_setter() {
        let flag = Rc::new(Cell::new(false));
        let calls = Rc::new(Cell::new(0));

        let mut panel = PanelControl::external(
            {
                let flag = flag.clone();
                move || flag.get()
            },
            {
                let flag = flag.clone();
                let calls = calls.clone();
                move |open| {
                    calls.set(calls.get() + 1);
                    flag.set(open);
                }
            },
        );

        panel.set_open(true);
        assert!(flag.get());
        assert!(panel.is_open());
        panel.set_open(false);
        assert_eq!(calls.get(), 2);
        assert!(!panel.is_open());
    }
}
