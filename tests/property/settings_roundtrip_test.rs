//! Property-based tests for BrowserSettings serialization round-trip.
//!
//! These tests verify that BrowserSettings can be serialized to JSON
//! and deserialized back without data loss for arbitrary valid inputs.

use i2p_browser::types::settings::{
    BrowserSettings, GeneralSettings, NetworkSettings, PrivacySettings, WindowSettings,
};
use proptest::prelude::*;

// --- Arbitrary strategies for all settings sub-types ---

fn arb_url() -> impl Strategy<Value = String> {
    ("(http|https)", "[a-z0-9]{1,12}", "(com|net|i2p)", "[a-z0-9/]{0,10}")
        .prop_map(|(scheme, host, tld, path)| format!("{}://{}.{}/{}", scheme, host, tld, path))
}

fn arb_general() -> impl Strategy<Value = GeneralSettings> {
    (arb_url(), arb_url()).prop_map(|(homepage, new_tab_url)| GeneralSettings {
        homepage,
        new_tab_url,
    })
}

fn arb_window() -> impl Strategy<Value = WindowSettings> {
    (
        ".{0,30}",
        -2000i32..4000,
        -2000i32..4000,
        1u32..8000,
        1u32..8000,
        "[a-zA-Z0-9_/]{0,20}\\.png",
    )
        .prop_map(|(title, x, y, width, height, icon_path)| WindowSettings {
            title,
            x,
            y,
            width,
            height,
            icon_path,
        })
}

fn arb_network() -> impl Strategy<Value = NetworkSettings> {
    (".{0,80}", any::<bool>()).prop_map(|(user_agent, proxy_enabled)| NetworkSettings {
        user_agent,
        proxy_enabled,
    })
}

fn arb_privacy() -> impl Strategy<Value = PrivacySettings> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(javascript_enabled, local_storage_enabled, record_history)| PrivacySettings {
            javascript_enabled,
            local_storage_enabled,
            record_history,
        },
    )
}

fn arb_settings() -> impl Strategy<Value = BrowserSettings> {
    (arb_general(), arb_window(), arb_network(), arb_privacy()).prop_map(
        |(general, window, network, privacy)| BrowserSettings {
            general,
            window,
            network,
            privacy,
        },
    )
}

// **Settings serialization round-trip**
//
// *For any* valid BrowserSettings, serializing to JSON and deserializing back
// SHALL produce an equivalent object.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: BrowserSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }

    /// Dropping a whole section from the file restores that section's defaults
    /// and leaves the others intact.
    #[test]
    fn missing_section_falls_back_to_default(settings in arb_settings()) {
        let mut value = serde_json::to_value(&settings).unwrap();
        value.as_object_mut().unwrap().remove("privacy");
        let back: BrowserSettings = serde_json::from_value(value).unwrap();
        prop_assert_eq!(back.privacy, PrivacySettings::default());
        prop_assert_eq!(back.general, settings.general);
        prop_assert_eq!(back.window, settings.window);
    }
}
