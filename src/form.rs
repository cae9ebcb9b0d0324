use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::command::{InterfaceName, WifiNetworkConfig};
use crate::error::{Error, Result};

pub const SUBMIT_FIELD: &str = "submitWifi";
pub const SSID_PREFIX: &str = "WIFIssid_";
pub const PASSPHRASE_PREFIX: &str = "WIFIpass_";
pub const PRIORITY_PREFIX: &str = "WIFIprio_";

/// Submitted form fields, passed in explicitly by the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WifiForm {
    fields: BTreeMap<String, String>,
}

impl<K, V> FromIterator<(K, V)> for WifiForm
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl WifiForm {
    /// Build a form from `FIELD=VALUE` strings. The value may itself contain `=`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|pair| {
                let pair = pair.as_ref();
                pair.split_once('=')
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .ok_or_else(|| {
                        Error::InvalidInput(format!("expected FIELD=VALUE, got {pair:?}"))
                    })
            })
            .collect::<Result<Vec<_>>>()
            .map(|fields| fields.into_iter().collect())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn is_submitted(&self) -> bool {
        self.fields.contains_key(SUBMIT_FIELD)
    }

    /// Every network index named by any of the per-network fields.
    ///
    /// Suffixes must be plain decimal (`0`, `12`), otherwise `01` and `1`
    /// would name the same row.
    pub fn indices(&self) -> Result<BTreeSet<usize>> {
        self.fields
            .keys()
            .filter_map(|key| {
                [SSID_PREFIX, PASSPHRASE_PREFIX, PRIORITY_PREFIX]
                    .iter()
                    .find_map(|prefix| key.strip_prefix(prefix))
                    .map(|suffix| (key, suffix))
            })
            .map(|(key, suffix)| match suffix.parse::<usize>() {
                Ok(index) if index.to_string() == suffix => Ok(index),
                _ => Err(Error::InvalidInput(format!("invalid network index in field {key:?}"))),
            })
            .collect()
    }

    /// The network at `index`, or `None` for a row left blank in the UI.
    pub fn network(
        &self,
        index: usize,
        interface: &InterfaceName,
    ) -> Result<Option<WifiNetworkConfig>> {
        let field = |prefix: &str| {
            let name = format!("{prefix}{index}");
            self.get(&name)
                .map(str::to_string)
                .ok_or_else(|| Error::missing(&name))
        };

        let ssid = field(SSID_PREFIX)?;
        if ssid.trim().is_empty() {
            debug!("Skipping empty network row {}", index);
            return Ok(None);
        }

        Ok(Some(WifiNetworkConfig {
            interface: interface.clone(),
            ssid,
            passphrase: field(PASSPHRASE_PREFIX)?,
            priority: field(PRIORITY_PREFIX)?,
        }))
    }

    /// All filled-in networks in index order. Fails on the first incomplete one.
    pub fn networks(&self, interface: &InterfaceName) -> Result<Vec<WifiNetworkConfig>> {
        let mut networks = Vec::new();
        for index in self.indices()? {
            if let Some(network) = self.network(index, interface)? {
                networks.push(network);
            }
        }
        Ok(networks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn wlan0() -> InterfaceName {
        InterfaceName::try_from("wlan0").unwrap()
    }

    #[fixture]
    fn form() -> WifiForm {
        WifiForm::from_iter([
            ("submitWifi", "submit"),
            ("WIFIssid_0", "Test 123"),
            ("WIFIpass_0", "testpass123"),
            ("WIFIprio_0", "10"),
        ])
    }

    #[rstest]
    fn reads_single_network(form: WifiForm, wlan0: InterfaceName) {
        assert!(form.is_submitted());
        let networks = form.networks(&wlan0).unwrap();

        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].ssid, "Test 123");
        assert_eq!(networks[0].passphrase, "testpass123");
        assert_eq!(networks[0].priority, "10");
        assert_eq!(networks[0].interface, wlan0);
    }

    #[rstest]
    fn networks_follow_index_order(mut form: WifiForm, wlan0: InterfaceName) {
        form.insert("WIFIssid_10", "Ten");
        form.insert("WIFIpass_10", "password10");
        form.insert("WIFIprio_10", "1");
        form.insert("WIFIssid_2", "Two");
        form.insert("WIFIpass_2", "password2");
        form.insert("WIFIprio_2", "2");

        let ssids: Vec<_> = form
            .networks(&wlan0)
            .unwrap()
            .into_iter()
            .map(|n| n.ssid)
            .collect();
        assert_eq!(ssids, ["Test 123", "Two", "Ten"]);
    }

    #[rstest]
    fn blank_rows_are_skipped(mut form: WifiForm, wlan0: InterfaceName) {
        form.insert("WIFIssid_1", "  ");
        form.insert("WIFIpass_1", "");
        form.insert("WIFIprio_1", "");

        assert_eq!(form.networks(&wlan0).unwrap().len(), 1);
    }

    #[rstest]
    #[case("WIFIpass_0")]
    #[case("WIFIprio_0")]
    #[case("WIFIssid_0")]
    fn missing_field_fails(form: WifiForm, wlan0: InterfaceName, #[case] removed: &str) {
        let form: WifiForm = form
            .fields
            .into_iter()
            .filter(|(k, _)| k != removed)
            .collect();

        let err = form.networks(&wlan0).unwrap_err();
        match err {
            Error::InvalidInput(msg) => assert!(msg.contains(removed)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn not_submitted_without_submit_field() {
        let form = WifiForm::from_iter([("WIFIssid_0", "net")]);
        assert!(!form.is_submitted());
    }

    #[test]
    fn ignores_unrelated_keys() {
        let form = WifiForm::from_iter([("other_3", "x"), ("WIFIprio_4", "1")]);
        assert_eq!(form.indices().unwrap().into_iter().collect::<Vec<_>>(), [4]);
    }

    #[rstest]
    #[case("WIFIssid_01")]
    #[case("WIFIpass_+1")]
    #[case("WIFIprio_00")]
    #[case("WIFIssid_x")]
    #[case("WIFIssid_")]
    fn non_decimal_index_is_rejected(mut form: WifiForm, #[case] key: &str) {
        form.insert(key, "value");

        match form.indices().unwrap_err() {
            Error::InvalidInput(msg) => assert!(msg.contains(key)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn padded_row_fails_instead_of_missing_field(wlan0: InterfaceName) {
        let form = WifiForm::from_iter([
            ("WIFIssid_01", "Padded"),
            ("WIFIpass_01", "password1"),
            ("WIFIprio_01", "1"),
        ]);

        match form.networks(&wlan0).unwrap_err() {
            Error::InvalidInput(msg) => {
                assert!(msg.contains("WIFI"));
                assert!(msg.contains("_01"));
                assert!(!msg.contains("missing"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn aliased_rows_are_not_dropped(mut form: WifiForm, wlan0: InterfaceName) {
        form.insert("WIFIssid_00", "Second");
        form.insert("WIFIpass_00", "password2");
        form.insert("WIFIprio_00", "2");

        assert!(form.networks(&wlan0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn parses_pairs_with_equals_in_value() {
        let form = WifiForm::from_pairs(["WIFIpass_0=a=b=c", "submitWifi=submit"]).unwrap();
        assert_eq!(form.get("WIFIpass_0"), Some("a=b=c"));
        assert!(form.is_submitted());
    }

    #[test]
    fn rejects_pair_without_equals() {
        let err = WifiForm::from_pairs(["WIFIssid_0"]).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
