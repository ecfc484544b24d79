use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const PREFIX: &str = "QM";
const RANDOM_CHARS: usize = 8;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `QM-<epoch millis, base36>-<8 random base36 chars>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(String);

impl RegistrationId {
    pub fn generate<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let millis = u128::try_from(now.timestamp_millis()).unwrap_or_default();
        let entropy = Uuid::new_v4().as_u128();
        let random: String = to_base36(entropy)
            .chars()
            .rev()
            .take(RANDOM_CHARS)
            .collect();
        Self(format!(
            "{PREFIX}-{}-{random:0>width$}",
            to_base36(millis),
            width = RANDOM_CHARS
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `value` has the shape produced by [`RegistrationId::generate`].
    pub fn is_well_formed(value: &str) -> bool {
        let mut parts = value.split('-');
        let (Some(prefix), Some(stamp), Some(random), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        let is_base36 = |s: &str| !s.is_empty() && s.bytes().all(|b| BASE36.contains(&b));
        prefix == PREFIX && is_base36(stamp) && random.len() == RANDOM_CHARS && is_base36(random)
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
