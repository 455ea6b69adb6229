// ============================================================================
// WIDGET COMPOSER - Widgets del servidor → secciones de la home
// ============================================================================
// Un fragmento por widget, en el orden recibido. Tipos desconocidos se
// renderizan como sección genérica y nunca fallan
// ============================================================================

use crate::models::{MarqueeStyle, Product, Widget};
use crate::utils::escape_html;
use crate::utils::html::escape_css_value;
use crate::views::product_card::render_product_card;

pub const DEFAULT_HERO_TITLE: &str = "STONE";
pub const DEFAULT_HERO_CONTENT: &str = "PREMIUM SNEAKERS";
pub const DEFAULT_COLLECTION_TITLE: &str = "NEW COLLECTION";
pub const DEFAULT_COLLECTION_CONTENT: &str = "Explore our carefully curated selection of premium sneakers.";
pub const DEFAULT_INFO_TITLE: &str = "INFORMATION";
pub const DEFAULT_WIDGET_TITLE: &str = "Widget";

const DEFAULT_MARQUEE_BG: &str = "#000";
const DEFAULT_MARQUEE_COLOR: &str = "#fff";
const DEFAULT_MARQUEE_FONT_SIZE: &str = "12px";
const DEFAULT_MARQUEE_SPEED: f64 = 20.0;

/// Datos que algunos widgets necesitan además de su descriptor
pub struct WidgetContext<'a> {
    pub featured: &'a [Product],
    pub currency: &'a str,
}

fn text_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => default,
    }
}

fn render_hero(title: &Option<String>, content: &Option<String>) -> String {
    format!(
        r#"<section class="balenciaga-hero fade-in"><div class="hero-content"><h1 class="hero-title balenciaga-heading">{}</h1><p class="hero-subtitle balenciaga-subheading">{}</p><a href="/catalog" class="hero-cta">SHOP COLLECTION</a></div></section>"#,
        escape_html(text_or(title, DEFAULT_HERO_TITLE)),
        escape_html(text_or(content, DEFAULT_HERO_CONTENT)),
    )
}

fn render_marquee(content: &Option<String>, style: &MarqueeStyle) -> String {
    let bg = escape_css_value(text_or(&style.bg_color, DEFAULT_MARQUEE_BG));
    let color = escape_css_value(text_or(&style.color, DEFAULT_MARQUEE_COLOR));
    let font_size = escape_css_value(text_or(&style.font_size, DEFAULT_MARQUEE_FONT_SIZE));
    let speed = style.speed.unwrap_or(DEFAULT_MARQUEE_SPEED);
    format!(
        r#"<div class="marquee-container" style="background: {bg}; color: {color}; padding: 16px 0; overflow: hidden;"><div class="marquee-content" style="display: inline-block; white-space: nowrap; animation: marquee {speed}s linear infinite; font-size: {font_size}; letter-spacing: 0.2em;">{content}</div><style>@keyframes marquee {{ 0% {{ transform: translateX(100%); }} 100% {{ transform: translateX(-100%); }} }}</style></div>"#,
        content = escape_html(text_or(content, "")),
    )
}

fn render_featured(ctx: &WidgetContext<'_>) -> String {
    if ctx.featured.is_empty() {
        return r#"<p class="text-center text-muted">No products available</p>"#.to_string();
    }
    ctx.featured.iter().map(|p| render_product_card(p, ctx.currency)).collect()
}

fn render_collection(title: &Option<String>, content: &Option<String>, ctx: &WidgetContext<'_>) -> String {
    format!(
        r#"<section class="collection-section p-48 fade-in delay-1"><h2 class="balenciaga-heading text-center mb-24">{}</h2><p class="text-center text-muted mb-48">{}</p><div class="product-grid">{}</div></section>"#,
        escape_html(text_or(title, DEFAULT_COLLECTION_TITLE)),
        escape_html(text_or(content, DEFAULT_COLLECTION_CONTENT)),
        render_featured(ctx),
    )
}

fn render_section(class: &str, title: &str, content: &str) -> String {
    format!(
        r#"<section class="{} p-24 fade-in"><h2>{}</h2><p>{}</p></section>"#,
        class,
        escape_html(title),
        escape_html(content),
    )
}

pub fn render_widget(widget: &Widget, ctx: &WidgetContext<'_>) -> String {
    match widget {
        Widget::Hero { title, content } => render_hero(title, content),
        Widget::Marquee { content, style } => render_marquee(content, style),
        Widget::Collection { title, content } => render_collection(title, content, ctx),
        Widget::Info { title, content } => {
            render_section("widget info-section", text_or(title, DEFAULT_INFO_TITLE), text_or(content, ""))
        }
        Widget::Other { kind, title, content } => {
            log::debug!("🧩 [WIDGETS] Tipo desconocido '{}', render genérico", kind);
            render_section("widget", text_or(title, DEFAULT_WIDGET_TITLE), text_or(content, ""))
        }
    }
}

/// Home completa: widgets concatenados dentro del wrapper
pub fn render_home(widgets: &[Widget], ctx: &WidgetContext<'_>) -> String {
    let sections: String = widgets.iter().map(|w| render_widget(w, ctx)).collect();
    format!(r#"<div class="home-page">{}</div>"#, sections)
}

/// Sin widgets del servidor la home muestra un hero por defecto
pub fn fallback_widgets() -> Vec<Widget> {
    vec![Widget::Hero { title: None, content: None }]
}
