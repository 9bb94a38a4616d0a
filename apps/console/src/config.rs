//! # Console Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BISTRO_*`)
//! 2. Defaults (this file)
//!
//! Currency and tax are fixed constants in `bistro-core` and are not
//! configurable here.

use serde::Serialize;

/// Kitchen staff roles that can be registered as order observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Chef,
    Waiter,
}

impl StaffRole {
    /// Parses a role name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chef" => Some(StaffRole::Chef),
            "waiter" => Some(StaffRole::Waiter),
            _ => None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Name shown in the welcome banner.
    pub restaurant_name: String,

    /// Print the receipt as JSON after the text form.
    pub json_receipt: bool,

    /// Observers registered with the kitchen, in notification order.
    pub kitchen_staff: Vec<StaffRole>,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Name: "Bistro"
    /// - JSON receipt: off
    /// - Staff: chef, then waiter
    fn default() -> Self {
        AppConfig {
            restaurant_name: "Bistro".to_string(),
            json_receipt: false,
            kitchen_staff: vec![StaffRole::Chef, StaffRole::Waiter],
        }
    }
}

impl AppConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BISTRO_RESTAURANT_NAME`: Override the banner name
    /// - `BISTRO_JSON_RECEIPT`: `1` or `true` to also print JSON receipts
    /// - `BISTRO_KITCHEN_STAFF`: Comma list, e.g. `chef,waiter` or `waiter`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(name) = lookup("BISTRO_RESTAURANT_NAME") {
            if !name.trim().is_empty() {
                config.restaurant_name = name.trim().to_string();
            }
        }

        if let Some(flag) = lookup("BISTRO_JSON_RECEIPT") {
            config.json_receipt = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true");
        }

        if let Some(staff) = lookup("BISTRO_KITCHEN_STAFF") {
            // Unknown names are skipped; an empty list means no observers.
            config.kitchen_staff = staff.split(',').filter_map(StaffRole::parse).collect();
        }

        config
    }

    /// JSON snapshot of the effective settings, logged at startup.
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.restaurant_name, "Bistro");
        assert!(!config.json_receipt);
        assert_eq!(config.kitchen_staff, vec![StaffRole::Chef, StaffRole::Waiter]);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BISTRO_RESTAURANT_NAME", " Nile Grill "),
            ("BISTRO_JSON_RECEIPT", "TRUE"),
            ("BISTRO_KITCHEN_STAFF", "waiter, Chef"),
        ]));

        assert_eq!(config.restaurant_name, "Nile Grill");
        assert!(config.json_receipt);
        assert_eq!(config.kitchen_staff, vec![StaffRole::Waiter, StaffRole::Chef]);
    }

    #[test]
    fn test_blank_name_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("BISTRO_RESTAURANT_NAME", "  ")]));
        assert_eq!(config.restaurant_name, "Bistro");
    }

    #[test]
    fn test_unknown_staff_skipped() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BISTRO_KITCHEN_STAFF", "chef,dishwasher"),
            ("BISTRO_JSON_RECEIPT", "yes"),
        ]));
        assert_eq!(config.kitchen_staff, vec![StaffRole::Chef]);
        assert!(!config.json_receipt);
    }

    #[test]
    fn test_snapshot_uses_camel_case() {
        let config = AppConfig::from_lookup(lookup_from(&[("BISTRO_KITCHEN_STAFF", "waiter")]));
        assert_eq!(
            config.snapshot().unwrap(),
            r#"{"restaurantName":"Bistro","jsonReceipt":false,"kitchenStaff":["waiter"]}"#
        );
    }

    #[test]
    fn test_empty_staff_list() {
        let config = AppConfig::from_lookup(lookup_from(&[("BISTRO_KITCHEN_STAFF", "")]));
        assert!(config.kitchen_staff.is_empty());
    }
}
