//! UI state - presentation state separate from the data pipeline

/// Focusable field of the filter sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarFocus {
    #[default]
    StartDate,
    EndDate,
    Regions,
    Variants,
}

impl SidebarFocus {
    pub fn all() -> Vec<SidebarFocus> {
        vec![
            SidebarFocus::StartDate,
            SidebarFocus::EndDate,
            SidebarFocus::Regions,
            SidebarFocus::Variants,
        ]
    }

    pub fn next(self) -> SidebarFocus {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(self) -> SidebarFocus {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    pub fn is_date(self) -> bool {
        matches!(self, SidebarFocus::StartDate | SidebarFocus::EndDate)
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut focus = SidebarFocus::StartDate;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, SidebarFocus::StartDate);
        assert_eq!(SidebarFocus::StartDate.previous(), SidebarFocus::Variants);
        assert_eq!(SidebarFocus::Regions.next(), SidebarFocus::Variants);
    }
}
