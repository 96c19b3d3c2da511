use crate::coerce::parse_string_or_number;
use crate::value::{Scalar, Value};
use serde::{Deserialize, Serialize, Serializer};

/// Known identity types and their canonical wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityType {
    /// Generic identity; the default for unrecognized names (code 0).
    Other,
    /// Customer-assigned identifier (code 1). Always sorts first on the wire.
    CustomerId,
    /// Facebook identity (code 2).
    Facebook,
    /// Twitter identity (code 3).
    Twitter,
    /// Google identity (code 4).
    Google,
    /// Microsoft identity (code 5).
    Microsoft,
    /// Yahoo identity (code 6).
    Yahoo,
    /// Email address (code 7).
    Email,
    /// Facebook custom audience identifier (code 9).
    FacebookCustomAudienceId,
    /// Second generic identity slot (code 10).
    Other2,
    /// Third generic identity slot (code 11).
    Other3,
    /// Fourth generic identity slot (code 12).
    Other4,
}

impl IdentityType {
    /// Canonical numeric wire code.
    pub fn code(self) -> u32 {
        match self {
            IdentityType::Other => 0,
            IdentityType::CustomerId => 1,
            IdentityType::Facebook => 2,
            IdentityType::Twitter => 3,
            IdentityType::Google => 4,
            IdentityType::Microsoft => 5,
            IdentityType::Yahoo => 6,
            IdentityType::Email => 7,
            IdentityType::FacebookCustomAudienceId => 9,
            IdentityType::Other2 => 10,
            IdentityType::Other3 => 11,
            IdentityType::Other4 => 12,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            IdentityType::Other => "other",
            IdentityType::CustomerId => "customerid",
            IdentityType::Facebook => "facebook",
            IdentityType::Twitter => "twitter",
            IdentityType::Google => "google",
            IdentityType::Microsoft => "microsoft",
            IdentityType::Yahoo => "yahoo",
            IdentityType::Email => "email",
            IdentityType::FacebookCustomAudienceId => "facebookcustomaudienceid",
            IdentityType::Other2 => "other2",
            IdentityType::Other3 => "other3",
            IdentityType::Other4 => "other4",
        }
    }

    /// Maps an identity name to its type. Unknown names fall back to
    /// [`IdentityType::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "customerid" => IdentityType::CustomerId,
            "facebook" => IdentityType::Facebook,
            "twitter" => IdentityType::Twitter,
            "google" => IdentityType::Google,
            "microsoft" => IdentityType::Microsoft,
            "yahoo" => IdentityType::Yahoo,
            "email" => IdentityType::Email,
            "facebookcustomaudienceid" => IdentityType::FacebookCustomAudienceId,
            "other2" => IdentityType::Other2,
            "other3" => IdentityType::Other3,
            "other4" => IdentityType::Other4,
            _ => IdentityType::Other,
        }
    }

    /// Maps a wire code back to its type when recognized.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(IdentityType::Other),
            1 => Some(IdentityType::CustomerId),
            2 => Some(IdentityType::Facebook),
            3 => Some(IdentityType::Twitter),
            4 => Some(IdentityType::Google),
            5 => Some(IdentityType::Microsoft),
            6 => Some(IdentityType::Yahoo),
            7 => Some(IdentityType::Email),
            9 => Some(IdentityType::FacebookCustomAudienceId),
            10 => Some(IdentityType::Other2),
            11 => Some(IdentityType::Other3),
            12 => Some(IdentityType::Other4),
            _ => None,
        }
    }
}

impl Serialize for IdentityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

/// Insertion-ordered identity-name to value map.
///
/// Caller insertion order is the ordering contract for filtering. Setting an
/// existing name replaces its value in place, so names never duplicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserIdentities {
    entries: Vec<(String, Value)>,
}

impl UserIdentities {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an identity value, replacing any existing entry for the name
    /// without moving it.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Looks up an identity value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff no identities are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for UserIdentities {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut identities = UserIdentities::new();
        for (name, value) in iter {
            identities.set(name, value);
        }
        identities
    }
}

/// An identity change request prior to validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityRequest {
    /// Identity-type name to identity value.
    pub user_identities: UserIdentities,
    /// Whether stored user attributes should be copied onto the resulting
    /// identity. Loosely typed; validated as boolean-like and coerced with
    /// [`crate::coerce::convert_to_boolean`].
    pub copy_user_attributes: Option<Value>,
}

/// Request methods an identity request can accompany.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityMethod {
    /// Initial identification of the current user.
    Identify,
    /// Transition to a known user.
    Login,
    /// Transition to an anonymous user.
    Logout,
    /// In-place change to the current user's identities.
    Modify,
}

/// A single normalized identity as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserIdentity {
    /// Identity payload.
    #[serde(rename = "Identity")]
    pub identity: Scalar,
    /// Canonical numeric type code.
    #[serde(rename = "Type")]
    pub identity_type: IdentityType,
}

/// Orders and filters user identities for a wire payload.
///
/// `filter_list` is a blocklist of type codes: identities whose code appears
/// in it are excluded entirely. Surviving identities keep caller insertion
/// order, except `customerid`, which always sorts first. Entries whose value
/// is absent, falsy, or not a string/number are skipped.
pub fn filter_user_identities(
    identities: &UserIdentities,
    filter_list: &[u32],
) -> Vec<UserIdentity> {
    let mut filtered = Vec::new();
    for (name, value) in identities.iter() {
        let identity_type = IdentityType::from_name(name);
        if filter_list.contains(&identity_type.code()) {
            continue;
        }
        if !value.is_truthy() {
            continue;
        }
        let identity = match parse_string_or_number(value) {
            Some(scalar) => scalar,
            None => continue,
        };
        let entry = UserIdentity {
            identity,
            identity_type,
        };
        if identity_type == IdentityType::CustomerId {
            filtered.insert(0, entry);
        } else {
            filtered.push(entry);
        }
    }
    filtered
}
