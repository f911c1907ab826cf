//! Static phrase book for user-facing survey strings.
//!
//! Lookup only: phrases without an Urdu entry fall back to English.

use crate::models::Language;

/// A user-facing string of the survey flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    SurveyTitle,
    Question,
    SubmitSurvey,
    ThankYou,
    FillAllFields,
    SubmitFailed,
}

impl Phrase {
    fn english(&self) -> &'static str {
        match self {
            Phrase::SurveyTitle => "Medicine Price Survey",
            Phrase::Question => {
                "What are your thoughts on the recent medicine price increase in Pakistan?"
            }
            Phrase::SubmitSurvey => "Submit Survey",
            Phrase::ThankYou => "Thank you for your response!",
            Phrase::FillAllFields => "Please fill in all fields",
            Phrase::SubmitFailed => "Failed to submit survey. Please try again.",
        }
    }

    fn urdu(&self) -> Option<&'static str> {
        match self {
            Phrase::SurveyTitle => Some("دواؤں کی قیمت کا سروے"),
            Phrase::Question => {
                Some("پاکستان میں دواؤں کی قیمتوں میں حالیہ اضافے کے بارے میں آپ کا کیا خیال ہے؟")
            }
            Phrase::SubmitSurvey => Some("سروے جمع کریں"),
            Phrase::ThankYou => Some("آپ کے جواب کے لیے شکریہ!"),
            Phrase::FillAllFields | Phrase::SubmitFailed => None,
        }
    }

    /// The phrase in `language`, or English when no translation exists.
    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english(),
            Language::Urdu => self.urdu().unwrap_or_else(|| self.english()),
        }
    }
}

/// Form header shown before a submission: title, question and how to submit.
pub fn question_sheet(language: Language) -> String {
    format!(
        "{}\n\n{}\n\n{}: survey submit --language {} --age <20-35|35-50|50+> \
         --gender <male|female> --location <urban|rural> \
         --income <<20k|20-50k|50-100k|>100k> --text <answer>",
        Phrase::SurveyTitle.text(language),
        Phrase::Question.text(language),
        Phrase::SubmitSurvey.text(language),
        language,
    )
}
