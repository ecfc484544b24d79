use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SummitError;

macro_rules! key_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

key_newtype!(SessionId);
key_newtype!(SpeakerKey);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    LightningTalk,
    Breakout,
}

impl SessionKind {
    /// Classifies a session id by its `lt` / `bs` prefix.
    pub fn from_id(id: &SessionId) -> Option<Self> {
        if id.as_str().starts_with("lt") {
            Some(Self::LightningTalk)
        } else if id.as_str().starts_with("bs") {
            Some(Self::Breakout)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LightningTalk => "Lightning Talks",
            Self::Breakout => "Breakout Sessions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub time: String,
    pub room: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,
    pub presenter: String,
    #[serde(default)]
    pub presenter_keys: Vec<SpeakerKey>,
    pub description: String,
}

impl Session {
    pub fn kind(&self) -> Option<SessionKind> {
        SessionKind::from_id(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub key: SpeakerKey,
    pub name: String,
    pub title: String,
    pub institution: String,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    Register,
    Speakers,
    Confirmation,
    Agenda,
    Keynote,
    Parking,
    Survey,
}

impl PageId {
    pub const ALL: [PageId; 8] = [
        PageId::Home,
        PageId::Register,
        PageId::Speakers,
        PageId::Confirmation,
        PageId::Agenda,
        PageId::Keynote,
        PageId::Parking,
        PageId::Survey,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Register => "register",
            Self::Speakers => "speakers",
            Self::Confirmation => "confirmation",
            Self::Agenda => "agenda",
            Self::Keynote => "keynote",
            Self::Parking => "parking",
            Self::Survey => "survey",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Register => "Register",
            Self::Speakers => "Speakers",
            Self::Confirmation => "Confirmation",
            Self::Agenda => "Agenda",
            Self::Keynote => "Keynote",
            Self::Parking => "Parking & Venue",
            Self::Survey => "Survey",
        }
    }

    /// Window title shown while the page is active.
    pub fn window_title(self) -> &'static str {
        match self {
            Self::Home => "UNC Quality Matters Summit 2025",
            Self::Register => "Registration - UNC QM Summit 2025",
            Self::Speakers => "Speakers - UNC QM Summit 2025",
            Self::Confirmation => "Registration Confirmed - UNC QM Summit 2025",
            Self::Agenda => "Agenda - UNC QM Summit 2025",
            Self::Keynote => "Keynote Speaker - UNC QM Summit 2025",
            Self::Parking => "Parking & Venue - UNC QM Summit 2025",
            Self::Survey => "Survey - UNC QM Summit 2025",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = SummitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| SummitError::Navigation(format!("invalid page id: {s}")))
    }
}

/// Registration form fields, in the order they appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "institution")]
    Institution,
    #[serde(rename = "phone")]
    Phone,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Institution,
        FieldName::Phone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Institution => "institution",
            Self::Phone => "phone",
        }
    }

    /// Human label derived from the camel-case field name ("firstName" -> "First Name").
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Institution => "Institution",
            Self::Phone => "Phone",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::FirstName | Self::LastName | Self::Email)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
