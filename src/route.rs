/// Path prefix of the chat section, which is rendered without the footer frame.
pub const CHAT_PREFIX: &str = "/chat";
pub const CHECKOUT_PREFIX: &str = "/checkout";
pub const ACCOUNT_PREFIX: &str = "/account";

/// Layout flags derived from the current path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteFlags {
    /// Everything except the landing page gets the app nav bar.
    pub show_nav_bar: bool,
    pub is_checkout: bool,
    pub is_account: bool,
    pub is_chat: bool,
}

impl RouteFlags {
    pub fn from_path(path: &str) -> Self {
        Self {
            show_nav_bar: path != "/",
            is_checkout: path.starts_with(CHECKOUT_PREFIX),
            is_account: path.starts_with(ACCOUNT_PREFIX),
            is_chat: path.starts_with(CHAT_PREFIX),
        }
    }
}

/// Returns the element id a location hash points at, if any.
///
/// One leading `#` is stripped; an empty hash yields `None`.
pub fn anchor_id(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);

    if id.is_empty() { None } else { Some(id) }
}

/// Element to scroll to after a navigation: the page it lives on plus its id.
///
/// The path is part of the value so that following the same hash on another page
/// counts as a new target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteAnchor {
    pub path: String,
    pub id: String,
}

impl RouteAnchor {
    pub fn new(path: &str, hash: &str) -> Option<Self> {
        anchor_id(hash).map(|id| Self {
            path: path.to_string(),
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_hides_nav_bar() {
        assert!(!RouteFlags::from_path("/").show_nav_bar);
        assert!(RouteFlags::from_path("/pricing").show_nav_bar);
        assert!(RouteFlags::from_path("/chat").show_nav_bar);
        assert!(RouteFlags::from_path("").show_nav_bar);
    }

    #[test]
    fn chat_prefix_selects_chat_layout() {
        assert!(RouteFlags::from_path("/chat").is_chat);
        assert!(RouteFlags::from_path("/chat/42").is_chat);
        assert!(RouteFlags::from_path("/chatroom").is_chat);
        assert!(!RouteFlags::from_path("/account/chat").is_chat);
        assert!(!RouteFlags::from_path("/").is_chat);
    }

    #[test]
    fn checkout_and_account_flags() {
        let flags = RouteFlags::from_path("/checkout/success");
        assert!(flags.is_checkout);
        assert!(!flags.is_account);

        let flags = RouteFlags::from_path("/account");
        assert!(flags.is_account);
        assert!(!flags.is_checkout);
    }

    #[test]
    fn anchor_id_strips_single_hash() {
        assert_eq!(anchor_id("#section1"), Some("section1"));
        assert_eq!(anchor_id("section1"), Some("section1"));
        assert_eq!(anchor_id("##x"), Some("#x"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn same_hash_on_another_page_is_a_new_anchor() {
        let faq_on_a = RouteAnchor::new("/a", "#faq");
        let faq_on_b = RouteAnchor::new("/b", "#faq");

        assert!(faq_on_a.is_some());
        assert_ne!(faq_on_a, faq_on_b);
        assert_eq!(faq_on_b.map(|anchor| anchor.id), Some("faq".to_string()));
    }

    #[test]
    fn no_hash_no_anchor() {
        assert_eq!(RouteAnchor::new("/pricing", ""), None);
    }
}
