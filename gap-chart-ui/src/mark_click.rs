//! Clicks on D3 marks, sent back to Rust as a DOM `CustomEvent`.
//!
//! The chart scripts dispatch `gap:mark-click` on `window` with a JSON
//! string in `event.detail`.

use gap_data::ViewEvent;
use serde::Deserialize;

/// Name of the DOM event fired by the chart scripts.
pub const MARK_CLICK_EVENT: &str = "gap:mark-click";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MarkClick {
    /// A scatter point was clicked
    Country { geo: String },
    /// A bar was clicked
    Region { region: String },
}

impl MarkClick {
    pub fn from_json(detail: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(detail)
    }
}

impl From<MarkClick> for ViewEvent {
    fn from(click: MarkClick) -> Self {
        match click {
            MarkClick::Country { geo } => ViewEvent::SelectCountry(geo),
            MarkClick::Region { region } => ViewEvent::ToggleRegion(region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_click() {
        let click = MarkClick::from_json(r#"{"kind":"country","geo":"swe"}"#).unwrap();
        assert_eq!(
            ViewEvent::from(click),
            ViewEvent::SelectCountry("swe".to_string())
        );
    }

    #[test]
    fn test_region_click() {
        let click = MarkClick::from_json(r#"{"kind":"region","region":"asia"}"#).unwrap();
        assert_eq!(
            ViewEvent::from(click),
            ViewEvent::ToggleRegion("asia".to_string())
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(MarkClick::from_json(r#"{"kind":"axis","name":"x"}"#).is_err());
        assert!(MarkClick::from_json("not json").is_err());
    }
}
