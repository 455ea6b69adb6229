// ============================================================================
// CLICK ROUTING - Qué hacer con un click en el documento
// ============================================================================
// App lee el DOM y arma un ClickSnapshot; la decisión es pura
// ============================================================================

use crate::router::internal_path;
use crate::viewmodels::UiAction;

/// Link más cercano al target del click
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkTarget<'a> {
    /// `href` resuelto por el navegador (absoluto)
    pub resolved_href: &'a str,
    pub new_tab: bool,
}

/// Lo que el listener sabe del click
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickSnapshot<'a> {
    pub action: Option<&'a str>,
    pub product_id: Option<&'a str>,
    pub in_nav_cart: bool,
    pub in_nav_search: bool,
    pub link: Option<LinkTarget<'a>>,
    /// Ctrl, Cmd o Shift pulsados
    pub modified: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClickIntent {
    Action(UiAction),
    UnknownAction(String),
    OpenCart,
    OpenSearch,
    /// Navegación interna: cerrar búsqueda y cargar la ruta
    FollowLink(String),
    /// El navegador se encarga
    Passthrough,
}

/// Orden: `data-action`, iconos del header, links del mismo origen
pub fn classify_click(click: &ClickSnapshot<'_>, origin: &str) -> ClickIntent {
    if let Some(action) = click.action {
        return match UiAction::parse(action, click.product_id) {
            Some(action) => ClickIntent::Action(action),
            None => ClickIntent::UnknownAction(action.to_string()),
        };
    }
    if click.in_nav_cart {
        return ClickIntent::OpenCart;
    }
    if click.in_nav_search {
        return ClickIntent::OpenSearch;
    }
    if click.modified {
        return ClickIntent::Passthrough;
    }
    match click.link {
        Some(link) if !link.new_tab => internal_path(link.resolved_href, origin)
            .map(ClickIntent::FollowLink)
            .unwrap_or(ClickIntent::Passthrough),
        _ => ClickIntent::Passthrough,
    }
}
