//! Fixed event, venue, and contact text.

pub const EVENT_NAME: &str = "UNC Quality Matters Summit 2025";
pub const EVENT_TAGLINE: &str =
    "Empowering Educators: Transforming Teaching through Quality Matters";
pub const EVENT_DATE: &str = "Friday, September 26, 2025";
pub const EVENT_TIME: &str = "9:00 AM - 4:30 PM";
pub const EVENT_LOCATION: &str = "North Carolina Central University Student Center";
pub const EVENT_ADDRESS: &str = "500 Nelson St, Durham, NC 27707";

pub const LIGHTNING_TALK_WINDOW: &str = "10:30-11:45 AM";
pub const BREAKOUT_WINDOW: &str = "1:30-4:05 PM";

pub const GENERAL_ATTENDANCE_MESSAGE: &str = "No specific sessions selected. You are registered for general attendance and can participate in any available sessions.";

pub struct InfoItem {
    pub label: &'static str,
    pub text: &'static str,
}

pub const IMPORTANT_INFO: &[InfoItem] = &[
    InfoItem {
        label: "Check-in",
        text: "Please arrive by 9:00 AM for continental breakfast and check-in.",
    },
    InfoItem {
        label: "Bring this confirmation",
        text: "Please bring this confirmation (printed or on your mobile device) for check-in.",
    },
    InfoItem {
        label: "Session flexibility",
        text: "While you've registered for specific sessions, you may attend other available sessions if space permits.",
    },
];

pub struct ParkingOption {
    pub name: &'static str,
    pub details: &'static [&'static str],
}

pub const PARKING_OPTIONS: &[ParkingOption] = &[
    ParkingOption {
        name: "Recommended: Latham Parking Deck",
        details: &[
            "Address: 701 E Lawson St, Durham, NC 27701",
            "Free shuttle service runs every 15 minutes to campus",
        ],
    },
    ParkingOption {
        name: "Alternative: NCCU Student Center Parking",
        details: &["Reserved for faculty/staff with valid passes (arrive 30-45 minutes early)"],
    },
];

pub const PARKING_PAYMENT: &str =
    "Visitors can use metered parking (ParkMobile accepted at Latham Deck)";

pub struct Contact {
    pub name: &'static str,
    pub email: &'static str,
}

pub const COORDINATORS: &[Contact] = &[
    Contact {
        name: "Dr. Larrisha McGill-Youngblood",
        email: "lmcgilly@nccu.edu",
    },
    Contact {
        name: "Dr. Charlotte Russell Cox",
        email: "ccox33@nccu.edu",
    },
];

pub struct AgendaSlot {
    pub time: &'static str,
    pub title: &'static str,
}

pub const AGENDA: &[AgendaSlot] = &[
    AgendaSlot {
        time: "9:00 AM",
        title: "Check-in and continental breakfast",
    },
    AgendaSlot {
        time: LIGHTNING_TALK_WINDOW,
        title: "Lightning Talks",
    },
    AgendaSlot {
        time: BREAKOUT_WINDOW,
        title: "Breakout Sessions",
    },
    AgendaSlot {
        time: "4:30 PM",
        title: "Closing",
    },
];

pub const KEYNOTE_HEADING: &str = "Keynote Address";
pub const KEYNOTE_NOTE: &str =
    "The keynote opens the summit program in the Student Center Great Hall following check-in.";

pub const SURVEY_HEADING: &str = "Post-Summit Survey";
pub const SURVEY_NOTE: &str = "Your feedback shapes next year's summit. The survey opens at the close of the event and takes about five minutes.";
