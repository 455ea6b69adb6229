use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor crudo de `/api/widgets`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub widget_type: String,
    #[serde(default, deserialize_with = "text_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub content: Option<String>,
    /// Mapa libre (`bgColor`, `color`, `speed`, `fontSize`...). El backend
    /// puede mandar `null` o un objeto vacío
    #[serde(default, deserialize_with = "config_or_empty")]
    pub config: Map<String, Value>,
}

fn config_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

/// Strings tal cual, números como texto; cualquier otra cosa → `None`
fn lenient_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(lenient_text)
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| lenient_text(v).unwrap_or_default())
}

/// Sección de página descrita por el servidor
#[derive(Clone, Debug, PartialEq)]
pub enum Widget {
    Hero {
        title: Option<String>,
        content: Option<String>,
    },
    Marquee {
        content: Option<String>,
        style: MarqueeStyle,
    },
    Collection {
        title: Option<String>,
        content: Option<String>,
    },
    Info {
        title: Option<String>,
        content: Option<String>,
    },
    /// Cualquier tipo desconocido: título + contenido genérico
    Other {
        kind: String,
        title: Option<String>,
        content: Option<String>,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarqueeStyle {
    pub bg_color: Option<String>,
    pub color: Option<String>,
    pub font_size: Option<String>,
    /// Duración de la animación en segundos
    pub speed: Option<f64>,
}

impl MarqueeStyle {
    fn from_config(config: &Map<String, Value>) -> Self {
        Self {
            bg_color: config_string(config, "bgColor"),
            color: config_string(config, "color"),
            font_size: config_string(config, "fontSize"),
            speed: config.get("speed").and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }).filter(|s: &f64| s.is_finite() && *s > 0.0),
        }
    }
}

fn config_string(config: &Map<String, Value>, key: &str) -> Option<String> {
    match config.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl From<WidgetDescriptor> for Widget {
    fn from(d: WidgetDescriptor) -> Self {
        match d.widget_type.trim().to_ascii_lowercase().as_str() {
            "hero" => Widget::Hero { title: d.title, content: d.content },
            "marquee" => Widget::Marquee {
                content: d.content,
                style: MarqueeStyle::from_config(&d.config),
            },
            "collection" => Widget::Collection { title: d.title, content: d.content },
            "info" => Widget::Info { title: d.title, content: d.content },
            _ => Widget::Other {
                kind: d.widget_type,
                title: d.title,
                content: d.content,
            },
        }
    }
}

impl<'de> Deserialize<'de> for Widget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        WidgetDescriptor::deserialize(deserializer).map(Widget::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_widget_type() {
        let json = r##"[
            {"widget_type":"marquee","title":null,"content":"STONE | PREMIUM","config":{"speed":20,"color":"#ffffff","bgColor":"#000000"}},
            {"widget_type":"hero","title":"STONE","content":"returns","config":{}},
            {"widget_type":"info","title":"INFORMATION #LINDON","content":"money"},
            {"widget_type":"collection","title":"New Collection","content":"Explore","config":null},
            {"widget_type":"countdown","title":"Soon"}
        ]"##;
        let widgets: Vec<Widget> = serde_json::from_str(json).unwrap();
        assert_eq!(widgets.len(), 5);
        assert!(matches!(&widgets[0], Widget::Marquee { style, .. } if style.speed == Some(20.0)
            && style.bg_color.as_deref() == Some("#000000")));
        assert!(matches!(&widgets[1], Widget::Hero { title: Some(t), .. } if t == "STONE"));
        assert!(matches!(&widgets[2], Widget::Info { .. }));
        assert!(matches!(&widgets[3], Widget::Collection { .. }));
        assert!(matches!(&widgets[4], Widget::Other { kind, .. } if kind == "countdown"));
    }

    #[test]
    fn tolerates_missing_fields_and_odd_config() {
        let widget: Widget = serde_json::from_str(r#"{"config": ["not", "a", "map"]}"#).unwrap();
        assert!(matches!(widget, Widget::Other { title: None, content: None, .. }));

        let marquee: Widget =
            serde_json::from_str(r#"{"widget_type":"marquee","config":{"speed":"-4","fontSize":14}}"#).unwrap();
        let Widget::Marquee { style, .. } = marquee else { panic!("expected marquee") };
        assert_eq!(style.speed, None);
        assert_eq!(style.font_size.as_deref(), Some("14"));
    }

    #[test]
    fn odd_field_types_degrade_to_text_or_nothing() {
        let widget: Widget =
            serde_json::from_str(r#"{"widget_type":null,"title":{"en":"x"},"content":["a"]}"#).unwrap();
        assert_eq!(widget, Widget::Other { kind: String::new(), title: None, content: None });

        let promo: Widget = serde_json::from_str(r#"{"widget_type":"promo","title":2024,"content":true}"#).unwrap();
        assert_eq!(
            promo,
            Widget::Other { kind: "promo".to_string(), title: Some("2024".to_string()), content: None }
        );
    }
}
