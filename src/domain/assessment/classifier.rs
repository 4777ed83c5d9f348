//! Profile classifier - maps a rider's axes to one archetype of the taxonomy.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::axes::RiderAxes;
use super::rules::{first_match, AssessmentSignals, Rule};

/// The ten rider archetypes.
///
/// Only the four types listed in [`PROFILE_RULES`] plus the `BalancedRider`
/// fallback are ever assigned. The remaining five are recognised identities
/// with display text but no matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileType {
    DunningKruger,
    ImpostorSyndrome,
    CalculatedRisk,
    LuckySurvivor,
    CautiousExpert,
    NervousBeginner,
    DangerousNovice,
    BalancedRider,
    SkilledPessimist,
    OverconfidentIntermediate,
}

/// Classification rules in priority order. First match wins.
pub static PROFILE_RULES: &[Rule<ProfileType>] = &[
    Rule {
        name: "high risk, low skill, overconfident",
        outcome: ProfileType::DangerousNovice,
        applies: |s| s.risk > 6.0 && s.skill < 4.0 && s.adequacy > 2.0,
    },
    Rule {
        name: "medium-high risk, low-medium skill, very overconfident",
        outcome: ProfileType::DunningKruger,
        applies: |s| s.risk >= 5.0 && s.skill < 6.0 && s.adequacy >= 3.0,
    },
    Rule {
        name: "low risk, good skill, underconfident",
        outcome: ProfileType::ImpostorSyndrome,
        applies: |s| s.risk < 4.0 && s.skill > 6.0 && s.adequacy < -2.0,
    },
    Rule {
        name: "low risk, high skill, accurate",
        outcome: ProfileType::CautiousExpert,
        applies: |s| s.risk < 4.0 && s.skill > 7.0 && s.adequacy.abs() <= 1.0,
    },
];

/// Profile assigned when no rule matches.
pub const DEFAULT_PROFILE: ProfileType = ProfileType::BalancedRider;

/// Shown for labels that are not part of the taxonomy.
pub const UNKNOWN_PROFILE_DESCRIPTION: &str = "Профіль райдера в процесі формування. Продовжуйте відповідати на питання для точного визначення.";

static DESCRIPTIONS: Lazy<HashMap<ProfileType, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            ProfileType::DunningKruger,
            "Ви переоцінюєте свої навички. Це нормально на початку, але важливо усвідомити реальний рівень для безпечного прогресу. Ваша впевненість випереджає досвід.",
        ),
        (
            ProfileType::ImpostorSyndrome,
            "Ви недооцінюєте свої навички. Маєте гарний досвід, але не вірите в себе. Це може заважати розвитку та отриманню задоволення від їзди.",
        ),
        (
            ProfileType::CalculatedRisk,
            "Ви приймаєте ризики, але робите це свідомо. Знаєте свої межі та розумієте наслідки. Це може бути ефективно, але потребує постійної уваги.",
        ),
        (
            ProfileType::LuckySurvivor,
            "Високий ризик при недостатніх навичках. Вам поки що щастило, але це не може тривати вічно. Терміново потрібне навчання.",
        ),
        (
            ProfileType::CautiousExpert,
            "Досвідчений райдер з обережним підходом. Ви знаєте свої можливості та не ризикуєте даремно. Це найбезпечніший профіль.",
        ),
        (
            ProfileType::NervousBeginner,
            "Початківець, який усвідомлює свої обмеження. Це хороша основа для навчання, але надмірна тривожність може заважати прогресу.",
        ),
        (
            ProfileType::DangerousNovice,
            "Небезпечна комбінація: мало досвіду, багато ризику, переоцінка себе. Це найнебезпечніший профіль. Потрібне термінове навчання.",
        ),
        (
            ProfileType::BalancedRider,
            "Збалансований підхід до їзди. Ризик відповідає навичкам, самооцінка адекватна. Хороша основа для подальшого розвитку.",
        ),
        (
            ProfileType::SkilledPessimist,
            "Високі навички, але недооцінюєте себе та уникаєте ризиків. Можете дозволити собі більше, ваш досвід це дозволяє.",
        ),
        (
            ProfileType::OverconfidentIntermediate,
            "Середні навички з переоцінкою можливостей. Типово для 2-3 року їзди. Важливо усвідомити реальний рівень.",
        ),
    ])
});

impl ProfileType {
    /// Every member of the taxonomy.
    pub const ALL: [ProfileType; 10] = [
        Self::DunningKruger,
        Self::ImpostorSyndrome,
        Self::CalculatedRisk,
        Self::LuckySurvivor,
        Self::CautiousExpert,
        Self::NervousBeginner,
        Self::DangerousNovice,
        Self::BalancedRider,
        Self::SkilledPessimist,
        Self::OverconfidentIntermediate,
    ];

    /// Classifies signals against [`PROFILE_RULES`].
    pub fn classify(signals: &AssessmentSignals) -> Self {
        first_match(PROFILE_RULES, signals, DEFAULT_PROFILE)
    }

    pub fn from_axes(axes: &RiderAxes) -> Self {
        Self::classify(&AssessmentSignals::from_axes(axes))
    }

    /// Identifier used on the wire, e.g. `DANGEROUS_NOVICE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DunningKruger => "DUNNING_KRUGER",
            Self::ImpostorSyndrome => "IMPOSTOR_SYNDROME",
            Self::CalculatedRisk => "CALCULATED_RISK",
            Self::LuckySurvivor => "LUCKY_SURVIVOR",
            Self::CautiousExpert => "CAUTIOUS_EXPERT",
            Self::NervousBeginner => "NERVOUS_BEGINNER",
            Self::DangerousNovice => "DANGEROUS_NOVICE",
            Self::BalancedRider => "BALANCED_RIDER",
            Self::SkilledPessimist => "SKILLED_PESSIMIST",
            Self::OverconfidentIntermediate => "OVERCONFIDENT_INTERMEDIATE",
        }
    }

    /// Human-readable name, e.g. "Dangerous Novice".
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DunningKruger => "Dunning-Kruger Rider",
            Self::ImpostorSyndrome => "Impostor Syndrome",
            Self::CalculatedRisk => "Calculated Risk-Taker",
            Self::LuckySurvivor => "Lucky Survivor",
            Self::CautiousExpert => "Cautious Expert",
            Self::NervousBeginner => "Nervous Beginner",
            Self::DangerousNovice => "Dangerous Novice",
            Self::BalancedRider => "Balanced Rider",
            Self::SkilledPessimist => "Skilled Pessimist",
            Self::OverconfidentIntermediate => "Overconfident Intermediate",
        }
    }

    /// Fixed descriptive paragraph shown to the rider.
    pub fn description(&self) -> &'static str {
        DESCRIPTIONS
            .get(self)
            .copied()
            .unwrap_or(UNKNOWN_PROFILE_DESCRIPTION)
    }

    /// Whether any classification path can produce this type.
    pub fn is_assignable(&self) -> bool {
        *self == DEFAULT_PROFILE || PROFILE_RULES.iter().any(|rule| rule.outcome == *self)
    }
}

/// Description lookup by free-form label (identifier or display name).
///
/// Unknown labels get the "profile still forming" paragraph.
pub fn describe_label(label: &str) -> &'static str {
    label
        .parse::<ProfileType>()
        .map(|profile| profile.description())
        .unwrap_or(UNKNOWN_PROFILE_DESCRIPTION)
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProfileType {
    type Err = ValidationError;

    /// Accepts `DANGEROUS_NOVICE`, `dangerous_novice` or `Dangerous Novice`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if needle.is_empty() {
            return Err(ValidationError::empty_field("profile_type"));
        }
        Self::ALL
            .into_iter()
            .find(|profile| {
                profile.as_str().eq_ignore_ascii_case(needle)
                    || profile.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "profile_type",
                    format!("unknown profile type '{}'", needle),
                )
            })
    }
}
