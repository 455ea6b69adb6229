/// Escapa texto no confiable antes de interpolarlo en HTML (contenido o atributos)
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Valor para una propiedad CSS inline: escapado y sin `;` ni llaves
pub fn escape_css_value(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '\\'))
        .collect();
    escape_html(cleaned.trim())
}
