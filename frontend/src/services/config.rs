use shared::{ConfigError, DashboardConfig};

/// Id of the `<script type="application/json">` element carrying overrides
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Reads the dashboard config embedded in the page, falling back to the
/// defaults when the element is missing or invalid.
pub fn load_config() -> DashboardConfig {
    let embedded = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match parse_embedded(embedded.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            gloo::console::warn!(format!("Ignoring embedded dashboard config: {}", e));
            DashboardConfig::default()
        }
    }
}

fn parse_embedded(text: Option<&str>) -> Result<DashboardConfig, ConfigError> {
    match text.map(str::trim) {
        None | Some("") => Ok(DashboardConfig::default()),
        Some(json) => DashboardConfig::from_json(json),
    }
}
