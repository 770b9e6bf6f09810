//! file: notice.rs
//! author: Jacob Xie
//! date: 2026/10/19 20:47:12 Monday
//! brief: messages handed to whatever surface talks to the user

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceKind {
    Dismiss,
    Cancel,
    Confirm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub kind: ChoiceKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub choices: Vec<Choice>,
}

impl Notice {
    /// Informational notice with a single OK.
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            choices: vec![Choice {
                label: "OK",
                kind: ChoiceKind::Dismiss,
            }],
        }
    }

    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            choices: vec![
                Choice {
                    label: "Cancel",
                    kind: ChoiceKind::Cancel,
                },
                Choice {
                    label: "OK",
                    kind: ChoiceKind::Confirm,
                },
            ],
        }
    }

    pub fn needs_confirmation(&self) -> bool {
        self.choices
            .iter()
            .any(|choice| choice.kind == ChoiceKind::Confirm)
    }
}
