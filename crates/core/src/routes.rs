//! Page route table: pathname to view.

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Employee bills list.
    Bills,
    /// New-bill submission form.
    NewBill,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Bills, Route::NewBill];

    /// The pathname the route is served under.
    pub fn path(self) -> &'static str {
        match self {
            Route::Bills => "/employee/bills",
            Route::NewBill => "/employee/bill/new",
        }
    }

    /// Resolve a pathname, ignoring one trailing slash.
    pub fn from_pathname(pathname: &str) -> Option<Self> {
        let trimmed = match pathname.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => pathname,
        };
        Self::ALL.into_iter().find(|r| r.path() == trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_resolves_to_itself() {
        for route in Route::ALL {
            assert_eq!(Route::from_pathname(route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::from_pathname("/employee/bills/"), Some(Route::Bills));
    }

    #[test]
    fn unknown_pathname() {
        assert_eq!(Route::from_pathname("/admin/dashboard"), None);
        assert_eq!(Route::from_pathname("/"), None);
    }
}
