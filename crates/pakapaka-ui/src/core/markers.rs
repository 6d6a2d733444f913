//! The DOM contract the server templates provide: marker selectors, toggled
//! classes and the optional data attributes that replace structural lookups.

/// Class flipped on a burger and its menu.
pub const ACTIVE_CLASS: &str = "is-active";
/// Class flipped on a card's content region.
pub const HIDDEN_CLASS: &str = "is-hidden";
/// Class flipped on a card header's chevron.
pub const ROTATED_CLASS: &str = "fa-rotate-180";

/// Enclosing flash message removed by a dismiss button.
pub const NOTIFICATION_SELECTOR: &str = ".notification";

/// Burger attribute naming the menu element id.
pub const BURGER_TARGET_ATTR: &str = "data-target";
/// Card header attribute naming its content element id.
pub const CARD_CONTENT_ATTR: &str = "data-card-content";
/// Card header attribute naming its chevron element id.
pub const CARD_ICON_ATTR: &str = "data-card-icon";
/// Like icon attribute carrying the post id.
pub const POST_ID_ATTR: &str = "data-post-id";
/// Like icon attribute naming its counter element id.
pub const LIKES_TARGET_ATTR: &str = "data-likes-target";
/// Eye icon attribute naming the password input id.
pub const PASSWORD_TARGET_ATTR: &str = "data-password-target";

/// The independent click behaviors wired on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Mobile navigation burger.
    Burger,
    /// Flash message dismiss button.
    Notification,
    /// Collapsible card header.
    Card,
    /// Like icon backed by the server counter.
    Like,
    /// Password visibility eye icon.
    Password,
}

impl Behavior {
    /// All behaviors in binding order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Burger,
            Self::Notification,
            Self::Card,
            Self::Like,
            Self::Password,
        ]
    }

    /// CSS selector matching the clickable element of this behavior.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Burger => ".navbar-burger",
            Self::Notification => ".notification .delete",
            Self::Card => ".card-header",
            Self::Like => ".fa-heart",
            Self::Password => ".fa-eye-slash",
        }
    }

    /// Short name used in console diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Burger => "burger",
            Self::Notification => "notification",
            Self::Card => "card",
            Self::Like => "like",
            Self::Password => "password",
        }
    }
}
