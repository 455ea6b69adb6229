// Vistas de estado: carga, 404 y error de página

pub fn render_loading() -> String {
    r#"<div class="loading-page"><div class="loading-bar"></div></div>"#.to_string()
}

pub fn render_not_found() -> String {
    r#"<div class="page-not-found"><h1>404</h1><p>Page not found</p><a href="/">Go Home</a></div>"#.to_string()
}

pub fn render_page_error() -> String {
    r#"<div class="page-error"><p>Error loading page. Please try again.</p></div>"#.to_string()
}
