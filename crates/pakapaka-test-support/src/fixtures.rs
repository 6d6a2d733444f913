//! Markup fixtures copied from the shapes the server templates render.
//!
//! Every fixture takes the ids it emits as arguments so several fixtures can
//! be mounted into one document without colliding.

/// Id of the counter element the templates render next to a like icon.
#[must_use]
pub fn counter_id(post_id: &str) -> String {
    format!("number-of-likes-{post_id}")
}

/// Navbar with a burger whose `data-target` names the menu `menu_id`.
#[must_use]
pub fn navbar(burger_id: &str, menu_id: &str) -> String {
    format!(
        r#"<nav class="navbar" role="navigation">
  <div class="navbar-brand">
    <a class="navbar-item" href="/home">pakapaka</a>
    <a role="button" class="navbar-burger" id="{burger_id}" data-target="{menu_id}">
      <span aria-hidden="true"></span><span aria-hidden="true"></span><span aria-hidden="true"></span>
    </a>
  </div>
  <div id="{menu_id}" class="navbar-menu">
    <div class="navbar-end"><a class="navbar-item" href="/create-post">投稿</a></div>
  </div>
</nav>"#
    )
}

/// Navbar whose menu is rendered open while the burger is not, the state a
/// template bug leaves behind.
#[must_use]
pub fn open_menu_navbar(burger_id: &str, menu_id: &str) -> String {
    navbar(burger_id, menu_id).replacen(
        r#"class="navbar-menu""#,
        r#"class="navbar-menu is-active""#,
        1,
    )
}

/// Navbar burger whose `data-target` names nothing on the page.
#[must_use]
pub fn orphan_burger(burger_id: &str) -> String {
    format!(r#"<a role="button" class="navbar-burger" id="{burger_id}" data-target="missing-menu"></a>"#)
}

/// Flash messages, one dismissible notification per id.
#[must_use]
pub fn notifications(ids: &[&str]) -> String {
    ids.iter()
        .map(|id| {
            format!(
                r#"<div class="notification is-primary" id="{id}"><button class="delete"></button>投稿しました</div>"#
            )
        })
        .collect()
}

/// Post card as rendered by `home.html`: collapsible header, body with a like
/// icon whose id encodes the post id, and the like counter.
#[must_use]
pub fn post_card(card_id: &str, post_id: &str, likes: u64, liked: bool) -> String {
    let style = if liked { "fa-solid" } else { "fa-regular" };
    let counter = counter_id(post_id);
    format!(
        r#"<div class="card" id="{card_id}">
  <header class="card-header" id="{card_id}-header"><p class="card-header-title">user</p><button class="card-header-icon"><span class="icon"><i class="fas fa-angle-down" id="{card_id}-icon"></i></span></button></header>
  <div class="card-content" id="{card_id}-content">
    <p>本文</p>
    <i class="{style} fa-heart" id="like-button-{post_id}"></i>
    <span id="{counter}">{likes}</span>
  </div>
</div>"#
    )
}

/// Post card whose content is rendered hidden while the chevron is not
/// rotated.
#[must_use]
pub fn collapsed_card(card_id: &str, post_id: &str) -> String {
    post_card(card_id, post_id, 0, false).replacen(
        r#"class="card-content""#,
        r#"class="card-content is-hidden""#,
        1,
    )
}

/// Card header that names its content and icon through data attributes and
/// does not follow the legacy nesting.
#[must_use]
pub fn annotated_card(card_id: &str) -> String {
    format!(
        r#"<div class="card" id="{card_id}">
  <header class="card-header" id="{card_id}-header" data-card-content="{card_id}-content" data-card-icon="{card_id}-icon"><i class="fas fa-angle-down" id="{card_id}-icon"></i><p class="card-header-title">user</p></header>
  <footer class="card-footer">footer</footer>
  <div class="card-content" id="{card_id}-content">本文</div>
</div>"#
    )
}

/// Card header missing the nested icon the legacy navigation expects.
#[must_use]
pub fn broken_card(card_id: &str) -> String {
    format!(
        r#"<div class="card" id="{card_id}"><header class="card-header" id="{card_id}-header"><p class="card-header-title">user</p></header><div class="card-content" id="{card_id}-content"></div></div>"#
    )
}

/// Like icon that carries its post id and counter through data attributes.
#[must_use]
pub fn annotated_like(icon_id: &str, post_id: &str, counter: &str, likes: u64) -> String {
    format!(
        r#"<div><i class="fa-regular fa-heart" id="{icon_id}" data-post-id="{post_id}" data-likes-target="{counter}"></i><span id="{counter}">{likes}</span></div>"#
    )
}

/// Password field as rendered by `login.html`, `signup.html` and `delete.html`.
#[must_use]
pub fn password_field(icon_id: &str, input_id: &str) -> String {
    format!(
        r#"<div class="field">
  <label class="label"><span class="icon is-small"><i class="fa-regular fa-eye-slash" id="{icon_id}"></i></span>パスワード</label>
  <div class="control"><input class="input" type="password" id="{input_id}" name="password"></div>
</div>"#
    )
}

/// Password field whose icon names its input through `data-password-target`.
#[must_use]
pub fn annotated_password_field(icon_id: &str, input_id: &str) -> String {
    format!(
        r#"<div class="field"><input class="input" type="password" id="{input_id}"><i class="fa-regular fa-eye-slash" id="{icon_id}" data-password-target="{input_id}"></i></div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_links_burger_to_menu() {
        let html = navbar("burger", "menu");
        assert!(html.contains(r#"data-target="menu""#));
        assert!(html.contains(r#"id="menu""#));
    }

    #[test]
    fn notifications_render_one_block_per_id() {
        let html = notifications(&["a", "b", "c"]);
        assert_eq!(html.matches("class=\"notification").count(), 3);
        assert_eq!(html.matches("class=\"delete\"").count(), 3);
    }

    #[test]
    fn post_card_reflects_liked_state() {
        assert!(post_card("c", "42", 3, true).contains("fa-solid fa-heart"));
        assert!(post_card("c", "42", 3, false).contains("fa-regular fa-heart"));
        assert!(post_card("c", "42", 3, false).contains(r#"id="number-of-likes-42">3<"#));
    }

    #[test]
    fn desynced_fixtures_mark_only_one_side() {
        let navbar = open_menu_navbar("burger", "menu");
        assert!(navbar.contains(r#"class="navbar-menu is-active""#));
        assert!(!navbar.contains(r#"class="navbar-burger is-active""#));

        let card = collapsed_card("c", "7");
        assert!(card.contains(r#"class="card-content is-hidden""#));
        assert!(!card.contains("fa-rotate-180"));
    }

    #[test]
    fn password_fixtures_start_masked() {
        assert!(password_field("eye", "pw").contains(r#"type="password""#));
        assert!(annotated_password_field("eye", "pw").contains(r#"data-password-target="pw""#));
    }
}
