use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// A form value that does not name any known option of a survey field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value '{value}'")]
pub struct UnknownVariant {
    /// The survey field being parsed (e.g. "age", "income").
    pub field: &'static str,
    /// The rejected raw value.
    pub value: String,
}

/// Declares a closed set of survey options that round-trip through their literal form value.
macro_rules! survey_option {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $lit:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $lit)] $variant,)+
        }

        impl $name {
            /// Every option, in form display order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The literal form value, also used inside segment keys.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $lit,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($lit => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

survey_option! {
    /// Respondent age group as offered on the form.
    AgeGroup, "age" {
        From20To35 => "20-35",
        From35To50 => "35-50",
        Over50 => "50+",
    }
}

survey_option! {
    Gender, "gender" {
        Male => "male",
        Female => "female",
    }
}

survey_option! {
    Location, "location" {
        Urban => "urban",
        Rural => "rural",
    }
}

survey_option! {
    /// Monthly income band in PKR.
    IncomeBand, "income" {
        Under20k => "<20k",
        From20kTo50k => "20-50k",
        From50kTo100k => "50-100k",
        Over100k => ">100k",
    }
}

survey_option! {
    /// Three-valued polarity of a response.
    Sentiment, "sentiment" {
        Positive => "positive",
        Negative => "negative",
        Neutral => "neutral",
    }
}

survey_option! {
    /// Language the respondent submitted the form in.
    Language, "language" {
        English => "en",
        Urdu => "ur",
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

/// Raw survey form as filled in by the respondent.
///
/// Field values are the literal option strings; every field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SurveySubmission {
    #[validate(length(min = 1))]
    pub age: String,
    #[validate(length(min = 1))]
    pub gender: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub income: String,
    /// Free-text answer to the survey question.
    #[validate(length(min = 1))]
    pub response: String,
    /// Language the form was shown in.
    #[serde(default)]
    pub language: Language,
}

/// A validated and classified response, awaiting an id and timestamp from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResponse {
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub location: Location,
    pub income_band: IncomeBand,
    pub original_text: String,
    pub translated_text: String,
    pub sentiment: Sentiment,
    pub submission_language: Language,
}

/// One persisted survey answer.
///
/// `sentiment` is fixed at submission time and never recomputed on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Store-assigned identifier (UUID v4).
    pub id: String,
    #[serde(rename = "age")]
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub location: Location,
    #[serde(rename = "income")]
    pub income_band: IncomeBand,
    #[serde(rename = "original_response")]
    pub original_text: String,
    #[serde(rename = "translated_response")]
    pub translated_text: String,
    pub sentiment: Sentiment,
    #[serde(rename = "language")]
    pub submission_language: Language,
    pub created_at: DateTime<Utc>,
}

impl ResponseRecord {
    /// Stamps a new response with its identity.
    pub fn from_new(response: NewResponse, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            age_group: response.age_group,
            gender: response.gender,
            location: response.location,
            income_band: response.income_band,
            original_text: response.original_text,
            translated_text: response.translated_text,
            sentiment: response.sentiment,
            submission_language: response.submission_language,
            created_at,
        }
    }
}
