use chrono::NaiveDate;

use crate::{Question, QuestionKind};

/// The empty value a select control reports when nothing is chosen.
pub const NO_SELECTION: &str = "";

/// Label of the "nothing chosen" entry of a select control.
pub const NO_SELECTION_LABEL: &str = "Select an option";

/// Date format accepted by date controls.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The input control rendered for a question.
///
/// Every control accepts a single string value and reports changes as the
/// raw string; none of them hold state beyond what the user is typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Single-line free text.
    TextInput,
    /// Text entry restricted to numbers.
    NumberInput,
    /// Text entry restricted to ISO dates (`YYYY-MM-DD`).
    DateInput,
    /// One choice from `options`, or [`NO_SELECTION`].
    Select { options: Vec<String> },
    /// Boolean toggle reporting `"true"` or `"false"`.
    Switch,
    /// One exclusive button per option, all sharing `group`.
    Radio { group: String, options: Vec<String> },
    /// Multi-line free text.
    Paragraph,
}

impl Control {
    /// Pick the control for a question.
    pub fn for_question(question: &Question) -> Self {
        match question.kind() {
            QuestionKind::Text => Self::TextInput,
            QuestionKind::Number => Self::NumberInput,
            QuestionKind::Date => Self::DateInput,
            QuestionKind::Select => Self::Select {
                options: question.options().to_vec(),
            },
            QuestionKind::Switch => Self::Switch,
            QuestionKind::Radio => Self::Radio {
                group: radio_group(question),
                options: question.options().to_vec(),
            },
            QuestionKind::Paragraph => Self::Paragraph,
        }
    }

    /// Whether `value` is something this control could have produced.
    ///
    /// An empty value is always accepted; emptiness is the business of the
    /// required flag.
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        match self {
            Self::TextInput | Self::Paragraph => true,
            Self::NumberInput => value.trim().parse::<f64>().is_ok_and(f64::is_finite),
            Self::DateInput => NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok(),
            Self::Select { options } | Self::Radio { options, .. } => {
                options.iter().any(|option| option == value)
            }
            Self::Switch => matches!(value, "true" | "false"),
        }
    }

    /// Hint shown next to a value the control rejects.
    pub fn constraint_hint(&self) -> Option<&'static str> {
        match self {
            Self::NumberInput => Some("Enter a number"),
            Self::DateInput => Some("Enter a date as YYYY-MM-DD"),
            Self::Select { .. } | Self::Radio { .. } => Some("Pick one of the options"),
            Self::Switch => Some("Expected true or false"),
            Self::TextInput | Self::Paragraph => None,
        }
    }
}

/// Group name shared by all radio buttons of a question.
pub fn radio_group(question: &Question) -> String {
    format!("radio-{}", question.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionId;

    fn question(kind: QuestionKind) -> Question {
        Question::new(QuestionId::new(17), "Prompt", kind).with_options(["Red", "Blue"])
    }

    #[test]
    fn one_control_per_kind() {
        assert_eq!(Control::for_question(&question(QuestionKind::Text)), Control::TextInput);
        assert_eq!(Control::for_question(&question(QuestionKind::Number)), Control::NumberInput);
        assert_eq!(Control::for_question(&question(QuestionKind::Date)), Control::DateInput);
        assert_eq!(Control::for_question(&question(QuestionKind::Switch)), Control::Switch);
        assert_eq!(Control::for_question(&question(QuestionKind::Paragraph)), Control::Paragraph);
        assert_eq!(
            Control::for_question(&question(QuestionKind::Select)),
            Control::Select {
                options: vec!["Red".to_string(), "Blue".to_string()]
            }
        );
    }

    #[test]
    fn radio_group_derives_from_id() {
        let Control::Radio { group, options } = Control::for_question(&question(QuestionKind::Radio))
        else {
            panic!("expected radio control");
        };
        assert_eq!(group, "radio-17");
        assert_eq!(options, vec!["Red", "Blue"]);
    }

    #[test]
    fn choice_kinds_without_options_render_empty() {
        let q = Question::new(QuestionId::new(1), "Pick", QuestionKind::Select);
        assert_eq!(Control::for_question(&q), Control::Select { options: vec![] });
    }

    #[test]
    fn number_constraint() {
        let control = Control::NumberInput;
        assert!(control.accepts("42"));
        assert!(control.accepts("-3.5"));
        assert!(control.accepts(""));
        assert!(!control.accepts("forty"));
        assert!(!control.accepts("NaN"));
    }

    #[test]
    fn date_constraint() {
        let control = Control::DateInput;
        assert!(control.accepts("2024-02-29"));
        assert!(!control.accepts("2023-02-29"));
        assert!(!control.accepts("29/02/2024"));
    }

    #[test]
    fn choice_constraint() {
        let control = Control::for_question(&question(QuestionKind::Select));
        assert!(control.accepts("Blue"));
        assert!(control.accepts(NO_SELECTION));
        assert!(!control.accepts("Green"));
    }

    #[test]
    fn switch_constraint() {
        assert!(Control::Switch.accepts("true"));
        assert!(Control::Switch.accepts("false"));
        assert!(!Control::Switch.accepts("yes"));
        assert_eq!(Control::TextInput.constraint_hint(), None);
    }
}
