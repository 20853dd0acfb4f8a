//! Fixed code tables for faculties, sports, committee branches, committee
//! positions and volunteer roles.
//!
//! Codes and names are part of the saved-data format and of the help text,
//! so they must not be renamed.

use serde::{Deserialize, Serialize};

/// Declares a closed code table: an enum with a short code and a display
/// name per variant, serialized by its code.
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($code:literal, $display:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every entry, in help-table order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }

            /// Case-insensitive exact match on the short code.
            pub fn from_code(s: &str) -> Option<Self> {
                let s = s.trim();
                Self::ALL.iter().copied().find(|v| v.code().eq_ignore_ascii_case(s))
            }

            /// Case-insensitive exact match on the display name.
            pub fn from_name(s: &str) -> Option<Self> {
                let s = s.trim();
                Self::ALL.iter().copied().find(|v| v.name().eq_ignore_ascii_case(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

code_table! {
    /// A faculty, which doubles as a team in a match.
    Faculty {
        Business => ("BIZ", "Business"),
        DesignEngineering => ("CDE", "Design and Engineering"),
        Computing => ("COM", "Computing"),
        Dentistry => ("DEN", "Dentistry"),
        ArtsSocialSciences => ("FASS", "Arts and Social Sciences"),
        Law => ("LAW", "Law"),
        Medicine => ("MED", "Medicine"),
        NusCollege => ("NUSC", "NUS College"),
        Science => ("SCI", "Science"),
        YaleNusCollege => ("YNC", "Yale-NUS College"),
    }
}

code_table! {
    Sport {
        Badminton => ("BMT", "Badminton"),
        BasketballMen => ("BBM", "Basketball Men"),
        BasketballWomen => ("BBW", "Basketball Women"),
        BoulderingMen => ("BDM", "Bouldering Men"),
        BoulderingWomen => ("BDW", "Bouldering Women"),
        Chess => ("CHE", "Chess"),
        ContactBridge => ("COB", "Contact Bridge"),
        Dodgeball => ("DGB", "Dodgeball"),
        FloorballMen => ("FBM", "Floorball Men"),
        FloorballWomen => ("FBW", "Floorball Women"),
        HandballMen => ("HBM", "Handball Men"),
        HandballWomen => ("HBW", "Handball Women"),
        LeagueOfLegends => ("LOL", "League of Legends"),
        Netball => ("NET", "Netball"),
        Reversi => ("REV", "Reversi"),
        SoccerMen => ("SCM", "Soccer Men"),
        SoccerWomen => ("SCW", "Soccer Women"),
        Squash => ("SQH", "Squash"),
        SwimmingMen => ("SWM", "Swimming Men"),
        SwimmingWomen => ("SMW", "Swimming Women"),
        TableTennis => ("TBT", "Table Tennis"),
        Tchoukball => ("TCB", "Tchoukball"),
        Tennis => ("TEN", "Tennis"),
        TouchRugby => ("RUG", "Touch Rugby"),
        TrackMen => ("TKM", "Track Men"),
        TrackWomen => ("TKW", "Track Women"),
        UltimateFrisbee => ("ULT", "Ultimate Frisbee"),
        Valorant => ("VAL", "Valorant"),
        VolleyballMen => ("VBM", "Volleyball Men"),
        VolleyballWomen => ("VBW", "Volleyball Women"),
    }
}

code_table! {
    /// Organizing committee branch.
    Branch {
        Sports => ("SPO", "Sports"),
        Marketing => ("MKT", "Marketing"),
        Publicity => ("PUB", "Publicity"),
    }
}

code_table! {
    /// Position held within a committee branch.
    Position {
        ProjectDirector => ("PD", "Project Director"),
        ViceProjectDirector => ("VPD", "Vice Project Director"),
        SportsDirector => ("SD", "Sports Director"),
        ViceSportsDirector => ("VSD", "Vice Sports Director"),
        Member => ("MEM", "Member"),
    }
}

code_table! {
    VolunteerRole {
        Photographer => ("PHOTO", "Photographer"),
        Emcee => ("MC", "Emcee"),
        Usher => ("USH", "Usher"),
        Logistics => ("LOG", "Logistics"),
        FirstAid => ("FA", "First Aid"),
        BoothManner => ("BMA", "Booth Manner"),
    }
}

impl Sport {
    /// Sports are the one table where the full name is accepted as well as the code.
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_code(s).or_else(|| Self::from_name(s))
    }
}

impl Branch {
    /// Branches are written by name in role specs as often as by code
    /// (`committee - Sports - PD - COM`), so both are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_code(s).or_else(|| Self::from_name(s))
    }
}

/// Render a code table as numbered `CODE - Name` lines for the help page.
pub fn table_lines<T: Copy>(all: &[T], code: fn(&T) -> &'static str, name: fn(&T) -> &'static str) -> String {
    all.iter()
        .enumerate()
        .map(|(i, v)| format!("{}. {} - {}", i + 1, code(v), name(v)))
        .collect::<Vec<_>>()
        .join("\n")
}
