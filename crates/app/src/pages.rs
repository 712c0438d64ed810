//! Role-gated page shell.
//!
//! Each dashboard route maps to one [`Page`]. [`render`] decides, purely
//! from the current user's role, whether the page's view is mounted or the
//! fixed 403 view is shown instead. There is no redirect.

use tutorhub_domain::user::{Role, User};

/// Dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Weekly availability slots.
    Availability,
    /// Multi-step service details form.
    ServiceDetails,
    /// Terms and conditions for teachers.
    Terms,
    /// Teacher listing with filters.
    TeacherListing,
}

/// Outcome of gating a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Mount(Page),
    Forbidden,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Availability,
        Page::ServiceDetails,
        Page::Terms,
        Page::TeacherListing,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Availability => "/dashboard/two",
            Self::ServiceDetails => "/dashboard/three",
            Self::Terms => "/dashboard/eight",
            Self::TeacherListing => "/teachers",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Availability => "Availability",
            Self::ServiceDetails => "Select Details",
            Self::Terms => "Terms and Conditions",
            Self::TeacherListing => "Teachers",
        }
    }

    #[must_use]
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Availability | Self::ServiceDetails | Self::Terms => &[Role::Teacher],
            Self::TeacherListing => &[Role::Student, Role::Admin],
        }
    }

    /// Previous step of a multi-step flow.
    #[must_use]
    pub fn back(self) -> Option<Page> {
        match self {
            Self::ServiceDetails => Some(Self::Availability),
            _ => None,
        }
    }

    /// Pages a user with `role` may open, in navigation order.
    #[must_use]
    pub fn visible_to(role: Role) -> Vec<Page> {
        Self::ALL
            .into_iter()
            .filter(|page| page.allowed_roles().contains(&role))
            .collect()
    }
}

/// Gate `page` for `user`; an anonymous visitor is always forbidden.
#[must_use]
pub fn render(page: Page, user: Option<&User>) -> Gate {
    match user {
        Some(user) if page.allowed_roles().contains(&user.role) => Gate::Mount(page),
        _ => Gate::Forbidden,
    }
}
